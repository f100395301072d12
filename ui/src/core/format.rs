//! Formatting helpers for presenting the report.

use time::macros::format_description;
use time::OffsetDateTime;

/// Percentage of `part` over `whole` with one decimal place, `"0"` when the
/// denominator is zero.
pub fn percent_of(part: u32, whole: u32) -> String {
    if whole == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", part as f64 / whole as f64 * 100.0)
    }
}

/// Same ratio as a raw number in [0, 100], for the progress bars.
pub fn percent_value(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Stamp for the "last updated" line, `HH:MM:SS dd/mm/yyyy` in UTC.
pub fn refresh_stamp(now: OffsetDateTime) -> String {
    now.format(&format_description!(
        "[hour]:[minute]:[second] [day]/[month]/[year]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

pub fn now_stamp() -> String {
    refresh_stamp(OffsetDateTime::now_utc())
}
