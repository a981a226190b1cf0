//! Aggregated dashboard metrics for a single instant.

use crate::{
    calculator::{
        baby_size_label, days_between, days_until, gestational_age, progress_percentage,
        trimester, GestationalAge, Trimester,
    },
    config::GestationConfig,
    dates::start_of_day,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows, derived from the config and the current instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Whole days since LMP; negative before it.
    pub days_pregnant: i64,
    pub gestational_age: GestationalAge,
    /// Whole days until the due date; negative once it has passed.
    pub days_until_due: i64,
    pub trimester: Trimester,
    pub progress_percent: u8,
    pub total_days: u32,
    pub baby_size: String,
}

impl DashboardMetrics {
    pub fn compute(config: &GestationConfig, now: NaiveDateTime) -> Self {
        let lmp = start_of_day(config.reference.last_menstrual_period);
        let edd = start_of_day(config.reference.estimated_due_date);

        let days_pregnant = days_between(lmp, now);
        let age = gestational_age(days_pregnant);

        Self {
            days_pregnant,
            gestational_age: age,
            days_until_due: days_until(edd, now),
            trimester: trimester(age.completed_weeks),
            progress_percent: progress_percentage(days_pregnant, config.total_days),
            total_days: config.total_days,
            baby_size: baby_size_label(age.completed_weeks, &config.sizes).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReferenceDates;
    use chrono::{Duration, NaiveDate};

    fn config() -> GestationConfig {
        let reference = ReferenceDates::parse("2025-06-23", "2026-03-30").unwrap();
        GestationConfig::with_defaults(reference).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let metrics = DashboardMetrics::compute(&config(), at(2025, 10, 21, 0));
        assert_eq!(metrics.days_pregnant, 120);
        assert_eq!(metrics.gestational_age.completed_weeks, 17);
        assert_eq!(metrics.gestational_age.remainder_days, 1);
        assert_eq!(metrics.trimester.label(), "Second Trimester");
        assert_eq!(metrics.progress_percent, 42);
        assert_eq!(metrics.baby_size, "Lemon");
        assert_eq!(metrics.days_until_due, 160);
        assert_eq!(metrics.total_days, 280);
    }

    #[test]
    fn test_afternoon_counts_spent_day() {
        let metrics = DashboardMetrics::compute(&config(), at(2025, 10, 21, 15));
        assert_eq!(metrics.days_pregnant, 120);
        assert_eq!(metrics.days_until_due, 159);
    }

    #[test]
    fn test_before_lmp() {
        let now = at(2025, 6, 23, 0) - Duration::days(3);
        let metrics = DashboardMetrics::compute(&config(), now);
        assert_eq!(metrics.days_pregnant, -3);
        assert_eq!(metrics.gestational_age.completed_weeks, -1);
        assert_eq!(metrics.gestational_age.remainder_days, 4);
        assert_eq!(metrics.trimester, Trimester::EarlyJourney);
        assert_eq!(metrics.progress_percent, 0);
        assert_eq!(metrics.baby_size, "a tiny seed");
    }

    #[test]
    fn test_after_due_date() {
        let metrics = DashboardMetrics::compute(&config(), at(2026, 4, 9, 0));
        assert_eq!(metrics.days_pregnant, 290);
        assert_eq!(metrics.days_until_due, -10);
        assert_eq!(metrics.progress_percent, 100);
        assert_eq!(metrics.trimester, Trimester::Third);
        assert_eq!(metrics.baby_size, "Melon");
    }

    #[test]
    fn test_serializes_for_logging() {
        let metrics = DashboardMetrics::compute(&config(), at(2025, 10, 21, 0));
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["days_pregnant"], 120);
        assert_eq!(json["trimester"], "Second");
        assert_eq!(json["baby_size"], "Lemon");
    }
}
