//! Gestational metrics calculator.
//!
//! Every function here is pure. Day counts follow whole-day floor semantics:
//! a partial day always rounds down, including for negative spans.

use crate::size_table::BabySizeTable;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a full-term pregnancy in days (40 weeks).
pub const TOTAL_PREGNANCY_DAYS: u32 = 280;

/// Label used when no baby-size entry applies yet.
pub const DEFAULT_BABY_SIZE: &str = "a tiny seed";

const MILLIS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_WEEK: i64 = 7;

/// Elapsed time since LMP in completed weeks plus remainder days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationalAge {
    pub completed_weeks: i64,
    /// Always in `0..=6`.
    pub remainder_days: i64,
}

/// Pregnancy stage derived from completed weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trimester {
    EarlyJourney,
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn label(&self) -> &'static str {
        match self {
            Trimester::EarlyJourney => "Early Journey",
            Trimester::First => "First Trimester",
            Trimester::Second => "Second Trimester",
            Trimester::Third => "Third Trimester",
        }
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole days from `a` to `b`, floored. Negative when `b` is before `a`.
pub fn days_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (b - a).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Whole days remaining from `from` until `target`.
pub fn days_until(target: NaiveDateTime, from: NaiveDateTime) -> i64 {
    days_between(from, target)
}

/// Split a day count into completed weeks and remainder days.
///
/// Uses Euclidean division, so for negative counts the weeks round toward
/// negative infinity and the remainder stays in `0..=6`.
pub fn gestational_age(days: i64) -> GestationalAge {
    GestationalAge {
        completed_weeks: days.div_euclid(DAYS_PER_WEEK),
        remainder_days: days.rem_euclid(DAYS_PER_WEEK),
    }
}

pub fn trimester(weeks: i64) -> Trimester {
    match weeks {
        i64::MIN..=0 => Trimester::EarlyJourney,
        1..=13 => Trimester::First,
        14..=27 => Trimester::Second,
        _ => Trimester::Third,
    }
}

/// Label of the entry with the greatest threshold not above `current_week`.
pub fn baby_size_label(current_week: i64, table: &BabySizeTable) -> &str {
    table
        .entries()
        .iter()
        .rev()
        .find(|entry| i64::from(entry.week_threshold) <= current_week)
        .map(|entry| entry.label.as_str())
        .unwrap_or(DEFAULT_BABY_SIZE)
}

/// Completed share of `total_days`, floored and clamped to `0..=100`.
///
/// A zero-day total counts as complete.
pub fn progress_percentage(days_completed: i64, total_days: u32) -> u8 {
    if total_days == 0 {
        return 100;
    }
    let percent = (days_completed * 100).div_euclid(i64::from(total_days));
    percent.clamp(0, 100) as u8
}
