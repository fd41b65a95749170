//! Shared utility functions for Aqua Sentinel crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Local, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date-only string in "YYYY-MM-DD" format.
    ///
    /// The result carries calendar fields only, so it never shifts by a day
    /// when the caller's timezone is behind UTC.
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| DateError(format!("'{}': {}", s, e)))
    }

    /// Today's calendar date in the local timezone.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Format an hour/minute pair as zero-padded "HH:MM".
    pub fn format_clock(hour: u32, minute: u32) -> String {
        format!("{:02}:{:02}", hour, minute)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::Datelike;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-03-09");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_rejects_garbage() {
            assert!(parse_date("2024-13-01").is_err());
            assert!(parse_date("yesterday").is_err());
        }

        #[test]
        fn test_parse_date_keeps_calendar_day() {
            let parsed = parse_date(" 2023-12-31 ").unwrap();
            assert_eq!(parsed.day(), 31);
            assert_eq!(parsed.month(), 12);
            assert_eq!(parsed.year(), 2023);
            assert_eq!(parsed.and_hms_opt(0, 0, 0).unwrap().date(), parsed);
        }

        #[test]
        fn test_format_clock_pads() {
            assert_eq!(format_clock(4, 5), "04:05");
            assert_eq!(format_clock(17, 59), "17:59");
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
