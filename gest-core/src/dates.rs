//! Date parsing and display helpers.

use crate::error::ConfigError;
use chrono::{Locale, NaiveDate, NaiveDateTime, NaiveTime};

/// Date format used for reference date literals: "YYYY-MM-DD"
pub const YEAR_FORMAT: &str = "%Y-%m-%d";

/// Long date form shown next to the countdown, e.g. "30 de março de 2026".
pub const LONG_DATE_FORMAT: &str = "%d de %B de %Y";

/// Display locale for long dates.
pub const DISPLAY_LOCALE: Locale = Locale::pt_BR;

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(s.trim(), YEAR_FORMAT).map_err(|e| ConfigError::InvalidDate {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

/// Format a date in the long localized form: two-digit day, full month name, year.
pub fn format_long_date(date: &NaiveDate) -> String {
    start_of_day(*date)
        .and_utc()
        .format_localized(LONG_DATE_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

/// The instant a calendar date begins.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_literal() {
        let lmp = parse_date("2025-06-23").unwrap();
        assert_eq!(lmp, NaiveDate::from_ymd_opt(2025, 6, 23).unwrap());

        let padded = parse_date(" 2026-03-30 ").unwrap();
        assert_eq!(padded, NaiveDate::from_ymd_opt(2026, 3, 30).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_date("30/03/2026").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { .. }));
    }

    #[test]
    fn test_format_long_date() {
        let edd = NaiveDate::from_ymd_opt(2026, 3, 30).unwrap();
        assert_eq!(format_long_date(&edd), "30 de março de 2026");

        let early = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert_eq!(format_long_date(&early), "03 de junho de 2025");
    }

    #[test]
    fn test_start_of_day() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 21).unwrap();
        let instant = start_of_day(date);
        assert_eq!(instant.date(), date);
        assert_eq!(instant.time(), NaiveTime::MIN);
    }
}
