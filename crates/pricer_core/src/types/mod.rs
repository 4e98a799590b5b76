//! Core time and error types.
//!
//! This module provides:
//! - `time`: `Date`, `DateTime` and `DayCountConvention`
//! - `calendar`: Weekend-plus-holiday business calendars
//! - `error`: Structured error types for pricing, dates and interpolation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DateTime`], [`DayCountConvention`], [`day_count`], [`year_fraction`] from `time`
//! - [`Calendar`] from `calendar`
//! - [`PricingError`], [`DateError`], [`InterpolationError`] from `error`

pub mod calendar;
pub mod error;
pub mod time;

pub use calendar::Calendar;
pub use error::{DateError, InterpolationError, PricingError};
pub use time::{day_count, year_fraction, Date, DateTime, DayCountConvention};
