//! Due-date normalization helpers.
//!
//! Pure calendar-date functions with no dependency on any picker widget:
//! the dialog hands in raw control values and gets typed dates back.

use chrono::NaiveDate;

/// Value format of the native date control, and the stored/wire form of a
/// due date: four-digit year, zero-padded month and day, hyphen-joined.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a date control value into a calendar date.
///
/// Empty input and anything that is not a real calendar date (bad syntax,
/// month 13, February 30th) map to `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).ok()
}

/// Format a calendar date as ISO "YYYY-MM-DD", with no time component.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(
            parse_date_input("2024-05-01"),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(parse_date_input(""), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date_input("not-a-date"), None);
        assert_eq!(parse_date_input("05/01/2024"), None);
        assert_eq!(parse_date_input("2024-05-01T12:00"), None);
    }

    #[test]
    fn test_parse_rejects_impossible_calendar_dates() {
        assert_eq!(parse_date_input("2024-02-30"), None);
        assert_eq!(parse_date_input("2024-13-01"), None);
    }

    #[test]
    fn test_parse_accepts_leap_day() {
        assert_eq!(
            parse_date_input("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date_input("2023-02-29"), None);
    }

    #[test]
    fn test_format_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_iso_date(date), "2024-05-01");
    }

    #[test]
    fn test_parse_then_format_normalizes_padding() {
        // chrono accepts unpadded month/day on parse; formatting restores
        // the canonical zero-padded form.
        let date = parse_date_input("2024-5-1").unwrap();
        assert_eq!(format_iso_date(date), "2024-05-01");
    }
}
