//! Dashboard renderer: writes computed metrics into a `DashboardView`.

use crate::{
    dates::format_long_date, error::ViewError, metrics::DashboardMetrics, view::DashboardView,
};
use chrono::NaiveDate;
use log::debug;

/// Write every metric into its slot. Stops at the first slot that fails.
pub fn render<V: DashboardView + ?Sized>(
    metrics: &DashboardMetrics,
    due_date: NaiveDate,
    view: &mut V,
) -> Result<(), ViewError> {
    let age = metrics.gestational_age;

    view.show_weeks(age.completed_weeks)?;
    view.show_days(age.remainder_days)?;
    view.show_age_text(age.completed_weeks, age.remainder_days)?;

    view.show_countdown(metrics.days_until_due)?;
    view.show_due_date(&format_long_date(&due_date))?;

    view.show_trimester(metrics.trimester.label())?;

    view.show_progress_percentage(metrics.progress_percent)?;
    view.show_progress_text(metrics.days_pregnant, metrics.total_days)?;
    view.show_progress_fill(metrics.progress_percent)?;

    view.show_baby_size(&metrics.baby_size)?;

    debug!(
        "Rendered dashboard: {}w{}d, {}%",
        age.completed_weeks, age.remainder_days, metrics.progress_percent
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{GestationConfig, ReferenceDates},
        view::{RecordingView, Slot},
    };

    fn scenario() -> (DashboardMetrics, NaiveDate) {
        let reference = ReferenceDates::parse("2025-06-23", "2026-03-30").unwrap();
        let config = GestationConfig::with_defaults(reference).unwrap();
        let now = NaiveDate::from_ymd_opt(2025, 10, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (
            DashboardMetrics::compute(&config, now),
            reference.estimated_due_date,
        )
    }

    #[test]
    fn test_render_fills_every_slot() {
        let (metrics, edd) = scenario();
        let mut view = RecordingView::new();
        render(&metrics, edd, &mut view).unwrap();

        assert_eq!(view.written(), Slot::ALL.len());
        assert_eq!(view.get(Slot::WeeksCurrent), Some("17"));
        assert_eq!(view.get(Slot::DaysCurrent), Some("1"));
        assert_eq!(view.get(Slot::AgeText), Some("17 weeks and 1 day(s)"));
        assert_eq!(view.get(Slot::CountdownDays), Some("160"));
        assert_eq!(view.get(Slot::EddDate), Some("30 de março de 2026"));
        assert_eq!(view.get(Slot::TrimesterInfo), Some("Second Trimester"));
        assert_eq!(view.get(Slot::ProgressPercentage), Some("42%"));
        assert_eq!(view.get(Slot::ProgressText), Some("120 of 280 days completed"));
        assert_eq!(view.get(Slot::ProgressFill), Some("42%"));
        assert_eq!(view.get(Slot::BabySize), Some("Lemon"));
    }

    #[test]
    fn test_render_surfaces_missing_slot() {
        let (metrics, edd) = scenario();
        let mut view = RecordingView::without(&[Slot::TrimesterInfo]);
        let err = render(&metrics, edd, &mut view).unwrap_err();
        assert_eq!(err, ViewError::MissingSlot(Slot::TrimesterInfo));
        // Slots after the failing one are left untouched.
        assert_eq!(view.get(Slot::BabySize), None);
        assert_eq!(view.get(Slot::EddDate), Some("30 de março de 2026"));
    }
}
