//! Fetch lifecycle for the report view.
//!
//! The view owns a single [`ReportSession`]. Every refresh takes out a
//! generation token and a completion carrying a stale token is discarded, so
//! a late response can never overwrite the result of a newer refresh. The
//! refresh control is additionally disabled while a fetch is in flight.

use super::client::FetchError;
use super::report::ReportState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSession {
    pub report: ReportState,
    pub last_update: Option<String>,
    pub alert: Option<String>,
    pub loading: bool,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Committed,
    Failed,
    Stale,
}

impl ReportSession {
    /// Starts a refresh and hands back its generation token, or `None` while
    /// an earlier fetch is still in flight.
    pub fn begin_refresh(&mut self) -> Option<u64> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.generation = self.generation.wrapping_add(1);
        Some(self.generation)
    }

    /// Applies a fetch outcome. A failure leaves the previous report
    /// untouched and only records the alert message; a stale token changes
    /// nothing at all.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<ReportState, FetchError>,
        stamp: String,
    ) -> Completion {
        if generation != self.generation {
            return Completion::Stale;
        }
        self.loading = false;
        match outcome {
            Ok(report) => {
                self.report = report;
                self.last_update = Some(stamp);
                self.alert = None;
                Completion::Committed
            }
            Err(err) => {
                self.alert = Some(err.user_message());
                Completion::Failed
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> String {
        "10:00:00 30/08/2026".to_string()
    }

    #[test]
    fn refresh_is_blocked_while_loading() {
        let mut session = ReportSession::default();
        let first = session.begin_refresh();
        assert!(first.is_some());
        assert!(session.loading);
        assert_eq!(session.begin_refresh(), None);
    }

    #[test]
    fn success_commits_report_and_stamp() {
        let mut session = ReportSession::default();
        let generation = session.begin_refresh().unwrap();
        let report = ReportState::from_values(&[18, 174, 17, 12, 2, 16]);

        let completion = session.complete(generation, Ok(report.clone()), stamp());
        assert_eq!(completion, Completion::Committed);
        assert_eq!(session.report, report);
        assert_eq!(session.last_update.as_deref(), Some("10:00:00 30/08/2026"));
        assert!(!session.loading);
        assert!(session.alert.is_none());
    }

    #[test]
    fn failure_preserves_the_previous_report() {
        let mut session = ReportSession::default();
        let generation = session.begin_refresh().unwrap();
        let report = ReportState::from_values(&[18, 174, 17, 12, 2, 16]);
        session.complete(generation, Ok(report.clone()), stamp());

        let generation = session.begin_refresh().unwrap();
        let before = session.report.clone();
        let completion = session.complete(
            generation,
            Err(FetchError::Http { status: 500 }),
            stamp(),
        );

        assert_eq!(completion, Completion::Failed);
        assert_eq!(session.report, before);
        assert!(!session.loading);
        assert!(session.alert.is_some());
    }

    #[test]
    fn stale_completion_changes_nothing() {
        let mut session = ReportSession::default();
        let generation = session.begin_refresh().unwrap();
        let report = ReportState::from_values(&[18, 174, 17, 12, 2, 16]);

        let stale = session.complete(generation + 7, Ok(report), stamp());
        assert_eq!(stale, Completion::Stale);
        assert_eq!(session.report, ReportState::default());
        assert!(session.last_update.is_none());
        // The in-flight refresh is still pending; only its own token may end it.
        assert!(session.loading);
    }

    #[test]
    fn dismiss_clears_the_alert() {
        let mut session = ReportSession::default();
        let generation = session.begin_refresh().unwrap();
        session.complete(generation, Err(FetchError::Http { status: 403 }), stamp());
        assert!(session.alert.is_some());

        session.dismiss_alert();
        assert!(session.alert.is_none());
    }
}
