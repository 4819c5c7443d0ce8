//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{NaiveDate, Utc};

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2025-03-15" or "2025-03-15T14:02:26Z" -> "15/03/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format "YYYY-MM" month keys as "MM/YYYY" for chart axes.
pub fn format_month(month_key: &str) -> String {
    if let Some((year, month)) = month_key.split_once('-') {
        return format!("{}/{}", month, year);
    }
    month_key.to_string()
}

/// Parse the value of an `<input type="date">`, empty string meaning unset.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Today's date in the user's terms. UTC is close enough for the
/// date-not-in-past check; the backend re-validates anyway.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15/03/2025");
        assert_eq!(format_date("2025-03-15T14:02:26.123Z"), "15/03/2025");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2025-03"), "03/2025");
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2025-03-15"),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("invalid"), None);
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_month("invalid"), "invalid");
    }
}
