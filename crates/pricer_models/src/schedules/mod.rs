//! Schedule generation for interest rate swaps.
//!
//! This module provides:
//! - [`Schedule`]: Regular payment dates between a start and an end date
//! - [`Period`]: A single accrual period between consecutive dates
//! - [`Frequency`]: Payment frequency enumeration (Annual, SemiAnnual, Quarterly)
//!
//! # Examples
//!
//! ```
//! use pricer_models::schedules::{Frequency, Schedule};
//! use pricer_core::types::{Date, DayCountConvention};
//!
//! let schedule = Schedule::new(
//!     Date::from_ymd(2024, 1, 15).unwrap(),
//!     Date::from_ymd(2026, 1, 15).unwrap(),
//!     Frequency::Annual,
//! )
//! .unwrap();
//!
//! let accrual: f64 = schedule
//!     .periods()
//!     .iter()
//!     .map(|p| p.year_fraction(DayCountConvention::Actual365Fixed))
//!     .sum();
//! assert!((accrual - 731.0 / 365.0).abs() < 1e-12);
//! ```

mod error;
mod frequency;
mod period;
mod schedule;

pub use error::ScheduleError;
pub use frequency::Frequency;
pub use period::Period;
pub use schedule::Schedule;
