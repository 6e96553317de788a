//! Number and date formatting shared by tables, cards and charts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, Utc};

/// Round `value` to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Render an amount with at most one decimal, dropping a trailing `.0`.
pub fn format_amount(value: f64) -> String {
    let rounded = round_to(value, 1);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// Grams suffix used by stat cards, e.g. `42g`.
pub fn format_grams(value: f64) -> String {
    format!("{}g", format_amount(value))
}

/// Table timestamp, e.g. `Mar 5, 2025 8:10 AM`.
pub fn format_scan_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Long calendar date, e.g. `March 5, 2025`.
pub fn format_long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Medium calendar date, e.g. `Mar 5, 2025`.
pub fn format_medium_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Chart axis label, e.g. `Mar 5`.
pub fn format_axis_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Value for an `<input type="date">`.
pub fn date_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse an `<input type="date">` value; blank or malformed input is `None`.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Upper-cased first character of a username for avatar badges.
pub fn avatar_initial(username: &str) -> String {
    username.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
