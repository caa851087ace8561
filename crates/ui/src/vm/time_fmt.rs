use chrono::{DateTime, Utc};

/// Compact date for history rows.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%b %d, %Y").to_string()
}
