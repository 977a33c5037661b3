//! Date formatting

use chrono::NaiveDateTime;

/// Format a datetime as `YYYY-MM-DD`, dropping any time-of-day component.
pub fn format_date(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}
