//! Date parsing and bucketing utilities.

use crate::error::{CallCenterError, Result};
use chrono::NaiveDate;

/// The stored date format. Lexicographic order equals calendar order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an issue date, enforcing the stored `YYYY-MM-DD` format.
///
/// # Errors
///
/// Returns `InvalidDate` if the string is not a valid calendar date in
/// that exact format.
pub fn parse_issue_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CallCenterError::InvalidDate {
        date: s.to_string(),
    })
}

/// The `YYYY-MM` aggregation bucket of a stored date string.
///
/// Returns `None` for strings that are not valid `YYYY-MM-DD` dates, so
/// aggregation drops malformed rows instead of mis-bucketing them.
#[must_use]
pub fn year_month(date: &str) -> Option<&str> {
    if NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok() {
        date.get(..7)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_issue_date_valid() {
        let date = parse_issue_date("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_issue_date_trims_whitespace() {
        assert!(parse_issue_date(" 2024-06-20 ").is_ok());
    }

    #[test]
    fn test_parse_issue_date_invalid() {
        assert!(parse_issue_date("2024-13-01").is_err());
        assert!(parse_issue_date("2024-02-30").is_err());
        assert!(parse_issue_date("15/01/2024").is_err());
        assert!(parse_issue_date("soon").is_err());
    }

    #[test]
    fn test_year_month_bucket() {
        assert_eq!(year_month("2024-01-15"), Some("2024-01"));
        assert_eq!(year_month("not-a-date"), None);
        assert_eq!(year_month("2024-02-30"), None);
    }
}
