use chrono::NaiveDate;

use super::text::MISSING;

/// `2024-03-01`
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// `Mar 1, 2024`
pub fn format_long_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}
