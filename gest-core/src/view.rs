//! Display abstraction the renderer writes into.
//!
//! A `DashboardView` exposes one method per named slot. Implementors only need
//! to provide `set_text` and `set_progress_width`; the per-slot methods format
//! their values and delegate. Every write reports a missing slot as an error
//! instead of ignoring it.

use crate::error::ViewError;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A named element of the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Slot {
    WeeksCurrent,
    DaysCurrent,
    AgeText,
    CountdownDays,
    EddDate,
    TrimesterInfo,
    ProgressPercentage,
    ProgressText,
    ProgressFill,
    BabySize,
}

impl Slot {
    pub const ALL: [Slot; 10] = [
        Slot::WeeksCurrent,
        Slot::DaysCurrent,
        Slot::AgeText,
        Slot::CountdownDays,
        Slot::EddDate,
        Slot::TrimesterInfo,
        Slot::ProgressPercentage,
        Slot::ProgressText,
        Slot::ProgressFill,
        Slot::BabySize,
    ];

    /// DOM element id of the slot.
    pub fn id(&self) -> &'static str {
        match self {
            Slot::WeeksCurrent => "weeks-current",
            Slot::DaysCurrent => "days-current",
            Slot::AgeText => "age-text",
            Slot::CountdownDays => "countdown-days",
            Slot::EddDate => "edd-date",
            Slot::TrimesterInfo => "trimester-info",
            Slot::ProgressPercentage => "progress-percentage",
            Slot::ProgressText => "progress-text",
            Slot::ProgressFill => "progress-fill",
            Slot::BabySize => "baby-size",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub trait DashboardView {
    /// Replace the text content of `slot`.
    fn set_text(&mut self, slot: Slot, text: &str) -> Result<(), ViewError>;

    /// Set the width of the progress bar fill, in percent.
    fn set_progress_width(&mut self, percent: u8) -> Result<(), ViewError>;

    fn show_weeks(&mut self, weeks: i64) -> Result<(), ViewError> {
        self.set_text(Slot::WeeksCurrent, &weeks.to_string())
    }

    fn show_days(&mut self, days: i64) -> Result<(), ViewError> {
        self.set_text(Slot::DaysCurrent, &days.to_string())
    }

    fn show_age_text(&mut self, weeks: i64, days: i64) -> Result<(), ViewError> {
        self.set_text(Slot::AgeText, &format!("{weeks} weeks and {days} day(s)"))
    }

    fn show_countdown(&mut self, days_until_due: i64) -> Result<(), ViewError> {
        self.set_text(Slot::CountdownDays, &days_until_due.to_string())
    }

    fn show_due_date(&mut self, formatted: &str) -> Result<(), ViewError> {
        self.set_text(Slot::EddDate, formatted)
    }

    fn show_trimester(&mut self, label: &str) -> Result<(), ViewError> {
        self.set_text(Slot::TrimesterInfo, label)
    }

    fn show_progress_percentage(&mut self, percent: u8) -> Result<(), ViewError> {
        self.set_text(Slot::ProgressPercentage, &format!("{percent}%"))
    }

    fn show_progress_text(&mut self, completed: i64, total: u32) -> Result<(), ViewError> {
        self.set_text(
            Slot::ProgressText,
            &format!("{completed} of {total} days completed"),
        )
    }

    fn show_progress_fill(&mut self, percent: u8) -> Result<(), ViewError> {
        self.set_progress_width(percent)
    }

    fn show_baby_size(&mut self, label: &str) -> Result<(), ViewError> {
        self.set_text(Slot::BabySize, label)
    }
}

/// In-memory view backing the renderer tests; records every write. Slots can
/// be marked missing to simulate incomplete markup.
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    values: BTreeMap<Slot, String>,
    missing: BTreeSet<Slot>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view in which `slots` do not exist.
    pub fn without(slots: &[Slot]) -> Self {
        Self {
            values: BTreeMap::new(),
            missing: slots.iter().copied().collect(),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values.get(&slot).map(String::as_str)
    }

    pub fn written(&self) -> usize {
        self.values.len()
    }

    fn write(&mut self, slot: Slot, value: String) -> Result<(), ViewError> {
        if self.missing.contains(&slot) {
            return Err(ViewError::MissingSlot(slot));
        }
        self.values.insert(slot, value);
        Ok(())
    }
}

impl DashboardView for RecordingView {
    fn set_text(&mut self, slot: Slot, text: &str) -> Result<(), ViewError> {
        self.write(slot, text.to_string())
    }

    fn set_progress_width(&mut self, percent: u8) -> Result<(), ViewError> {
        self.write(Slot::ProgressFill, format!("{percent}%"))
    }
}
