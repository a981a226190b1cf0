//! Error types for the gestation dashboard.

use crate::view::Slot;
use thiserror::Error;

/// Errors raised while building the dashboard configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Baby-size thresholds must be strictly increasing
    #[error("Baby-size table is not strictly increasing: week {current} follows week {previous}")]
    UnorderedSizeTable { previous: u32, current: u32 },

    /// Failed to parse the baby-size CSV
    #[error("Failed to parse baby-size table: {0}")]
    SizeTableParse(String),

    /// Date parsing failed
    #[error("Failed to parse date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    /// Total pregnancy duration of zero days
    #[error("Total pregnancy duration must be at least one day")]
    ZeroDuration,
}

impl From<csv::Error> for ConfigError {
    fn from(value: csv::Error) -> Self {
        ConfigError::SizeTableParse(value.to_string())
    }
}

/// Errors raised by a `DashboardView` when writing a slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The named element does not exist in the page
    #[error("Missing display slot #{0}")]
    MissingSlot(Slot),

    /// The environment rejected the write
    #[error("Failed to update #{slot}: {reason}")]
    Dom { slot: Slot, reason: String },
}
