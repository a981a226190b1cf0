use crate::{
    calculator::TOTAL_PREGNANCY_DAYS, dates::parse_date, error::ConfigError,
    size_table::BabySizeTable,
};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

/// The two operator-supplied dates every metric is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDates {
    pub last_menstrual_period: NaiveDate,
    pub estimated_due_date: NaiveDate,
}

impl ReferenceDates {
    pub fn new(last_menstrual_period: NaiveDate, estimated_due_date: NaiveDate) -> Self {
        Self {
            last_menstrual_period,
            estimated_due_date,
        }
    }

    /// Parse both dates from "YYYY-MM-DD" literals.
    pub fn parse(lmp: &str, edd: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(parse_date(lmp)?, parse_date(edd)?))
    }

    /// Days from LMP to EDD; conventionally 280.
    pub fn span_days(&self) -> i64 {
        (self.estimated_due_date - self.last_menstrual_period).num_days()
    }
}

/// Everything the calculator and renderer need, passed explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct GestationConfig {
    pub reference: ReferenceDates,
    pub sizes: BabySizeTable,
    pub total_days: u32,
}

impl GestationConfig {
    pub fn new(
        reference: ReferenceDates,
        sizes: BabySizeTable,
        total_days: u32,
    ) -> Result<Self, ConfigError> {
        if total_days == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if reference.span_days() <= 0 {
            warn!(
                "Due date {} is not after LMP {}; metrics will look odd",
                reference.estimated_due_date, reference.last_menstrual_period
            );
        } else if reference.span_days() != i64::from(total_days) {
            warn!(
                "LMP to due date spans {} days, expected {}",
                reference.span_days(),
                total_days
            );
        }
        Ok(Self {
            reference,
            sizes,
            total_days,
        })
    }

    /// Config using the standard 280-day duration and the embedded size table.
    pub fn with_defaults(reference: ReferenceDates) -> Result<Self, ConfigError> {
        Self::new(reference, BabySizeTable::embedded()?, TOTAL_PREGNANCY_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_dates() {
        let reference = ReferenceDates::parse("2025-06-23", "2026-03-30").unwrap();
        assert_eq!(
            reference.last_menstrual_period,
            NaiveDate::from_ymd_opt(2025, 6, 23).unwrap()
        );
        assert_eq!(reference.span_days(), 280);
    }

    #[test]
    fn test_parse_reference_dates_invalid() {
        let err = ReferenceDates::parse("2025-06-23", "2026-02-30").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { input, .. } if input == "2026-02-30"));
    }

    #[test]
    fn test_with_defaults() {
        let reference = ReferenceDates::parse("2025-06-23", "2026-03-30").unwrap();
        let config = GestationConfig::with_defaults(reference).unwrap();
        assert_eq!(config.total_days, 280);
        assert_eq!(config.sizes.len(), 5);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let reference = ReferenceDates::parse("2025-06-23", "2026-03-30").unwrap();
        let err = GestationConfig::new(reference, BabySizeTable::default(), 0).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDuration);
    }

    #[test]
    fn test_inverted_dates_are_accepted() {
        let reference = ReferenceDates::parse("2026-03-30", "2025-06-23").unwrap();
        let config = GestationConfig::new(reference, BabySizeTable::default(), 280);
        assert!(config.is_ok());
    }
}
