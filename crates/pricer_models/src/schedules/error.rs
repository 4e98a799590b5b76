//! Schedule generation error types.

use pricer_core::types::{Date, DateError, PricingError};
use thiserror::Error;

/// Errors that can occur during schedule generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Start date must not be after end date.
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
    },

    /// Frequency label not recognised.
    #[error("Unknown frequency '{0}'")]
    UnknownFrequency(String),

    /// Date arithmetic overflow while rolling the schedule.
    #[error("Date arithmetic overflow: {0}")]
    DateOverflow(#[from] DateError),
}

impl From<ScheduleError> for PricingError {
    fn from(err: ScheduleError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
