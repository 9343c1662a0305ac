//! Date parsing and formatting for statements.
//!
//! A malformed payment date is not an error: it renders as
//! [`INVALID_DATE_TEXT`] so the statement can still be produced.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rendered in place of a payment date that is missing or unparseable.
pub const INVALID_DATE_TEXT: &str = "NaN/NaN/NaN";

/// Parses an ISO-like payment date.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive
/// `YYYY-MM-DDTHH:MM:SS` timestamp. Returns `None` for anything else,
/// including the empty string.
///
/// # Examples
///
/// ```
/// use statement_engine::calculation::parse_payment_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_payment_date("2024-03-25"), NaiveDate::from_ymd_opt(2024, 3, 25));
/// assert_eq!(parse_payment_date(""), None);
/// ```
pub fn parse_payment_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Formats a payment date as `Y/M/D` without zero padding.
///
/// # Examples
///
/// ```
/// use statement_engine::calculation::format_payment_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(format_payment_date(NaiveDate::from_ymd_opt(2024, 3, 5)), "2024/3/5");
/// assert_eq!(format_payment_date(None), "NaN/NaN/NaN");
/// ```
pub fn format_payment_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y/%-m/%-d").to_string(),
        None => INVALID_DATE_TEXT.to_string(),
    }
}

/// Formats the generation timestamp shown in the statement footnote.
pub fn format_generated_at(at: NaiveDateTime) -> String {
    at.format("%Y/%-m/%-d %-H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_payment_date("2024-03-25"), Some(date(2024, 3, 25)));
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        assert_eq!(
            parse_payment_date("2024-03-25T09:30:00+09:00"),
            Some(date(2024, 3, 25))
        );
        assert_eq!(
            parse_payment_date("2024-03-25T00:00:00Z"),
            Some(date(2024, 3, 25))
        );
    }

    #[test]
    fn test_parse_naive_timestamp() {
        assert_eq!(
            parse_payment_date("2024-03-25T00:00:00"),
            Some(date(2024, 3, 25))
        );
        assert_eq!(
            parse_payment_date("2024-03-25T00:00:00.000"),
            Some(date(2024, 3, 25))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_payment_date(""), None);
        assert_eq!(parse_payment_date("   "), None);
        assert_eq!(parse_payment_date("yesterday"), None);
        assert_eq!(parse_payment_date("2024-02-30"), None);
    }

    #[test]
    fn test_format_payment_date_is_unpadded() {
        assert_eq!(format_payment_date(Some(date(2024, 3, 5))), "2024/3/5");
        assert_eq!(format_payment_date(Some(date(2024, 12, 25))), "2024/12/25");
    }

    #[test]
    fn test_format_missing_payment_date() {
        assert_eq!(format_payment_date(None), INVALID_DATE_TEXT);
    }

    #[test]
    fn test_format_generated_at() {
        let at = date(2024, 3, 5).and_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_generated_at(at), "2024/3/5 9:05:07");

        let at = date(2024, 11, 30).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(format_generated_at(at), "2024/11/30 23:59:00");
    }
}
