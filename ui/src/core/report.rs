//! Report state mapped from the six fetched sheet cells.

use serde::{Deserialize, Serialize};

use super::format;

/// Total number of schools in the province. Fixed denominator; the sheet only
/// carries it inside fraction strings like `18/192`.
pub const TOTAL_REGISTERED: u32 = 192;

/// Counts shown by the report. Rebuilt from scratch on every refresh; nothing
/// is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportState {
    pub total_registered: u32,
    pub approved_install: u32,
    pub installed: u32,
    pub more_than_10_pc: u32,
    pub install_36: u32,
    pub install_72: u32,
    pub install_108: u32,
    pub total_teachers: u32,
    pub teachers_installed: u32,
}

impl ReportState {
    /// Maps the positionally ordered range values (N4, N5, N9, N10, N12, N13)
    /// onto the report fields. Missing positions default to 0.
    pub fn from_values(values: &[u32]) -> Self {
        let at = |index: usize| values.get(index).copied().unwrap_or(0);
        Self {
            total_registered: TOTAL_REGISTERED,
            approved_install: at(0),
            installed: at(2),
            more_than_10_pc: at(3),
            install_36: at(4),
            install_72: at(5),
            // The 108-tiết bucket has no cell in the sheet yet.
            install_108: 0,
            total_teachers: at(0),
            teachers_installed: at(2),
        }
    }

    pub fn teachers_remaining(&self) -> u32 {
        self.total_teachers.saturating_sub(self.teachers_installed)
    }

    pub fn not_yet_registered(&self) -> u32 {
        self.total_registered.saturating_sub(self.approved_install)
    }

    /// Install progress across all registered schools, one decimal place.
    pub fn install_progress(&self) -> String {
        format::percent_of(self.installed, self.total_registered)
    }

    /// Share of registered teachers who finished installing.
    pub fn teacher_progress(&self) -> String {
        format::percent_of(self.teachers_installed, self.total_teachers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_map_onto_fields() {
        let report = ReportState::from_values(&[18, 174, 17, 12, 2, 16]);
        assert_eq!(report.approved_install, 18);
        assert_eq!(report.total_teachers, 18);
        assert_eq!(report.installed, 17);
        assert_eq!(report.teachers_installed, 17);
        assert_eq!(report.more_than_10_pc, 12);
        assert_eq!(report.install_36, 2);
        assert_eq!(report.install_72, 16);
        assert_eq!(report.install_108, 0);
        assert_eq!(report.total_registered, TOTAL_REGISTERED);
    }

    #[test]
    fn short_value_slices_default_to_zero() {
        let report = ReportState::from_values(&[18]);
        assert_eq!(report.approved_install, 18);
        assert_eq!(report.installed, 0);
        assert_eq!(report.install_72, 0);
    }

    #[test]
    fn derived_values_match_the_sample_sheet() {
        let report = ReportState::from_values(&[18, 174, 17, 12, 2, 16]);
        assert_eq!(report.install_progress(), "8.9");
        assert_eq!(report.teacher_progress(), "94.4");
        assert_eq!(report.teachers_remaining(), 1);
        assert_eq!(report.not_yet_registered(), 174);
    }

    #[test]
    fn zero_teacher_denominator_is_safe() {
        let report = ReportState::from_values(&[]);
        assert_eq!(report.teacher_progress(), "0");
        assert_eq!(report.teachers_remaining(), 0);
    }
}
