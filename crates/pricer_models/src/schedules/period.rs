//! Accrual period between two consecutive schedule dates.

use pricer_core::types::{Date, DayCountConvention};
use std::fmt;

/// A single accrual period; payment falls on the end date.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::Period;
/// use pricer_core::types::{Date, DayCountConvention};
///
/// let period = Period::new(
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     Date::from_ymd(2024, 7, 15).unwrap(),
/// );
///
/// assert_eq!(period.days(), 182);
/// assert!((period.year_fraction(DayCountConvention::Thirty360) - 0.5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: Date,
    end: Date,
}

impl Period {
    /// Creates a period from `start` to `end`.
    #[inline]
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Accrual start date.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Accrual end date, also the payment date.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Accrual fraction under `day_count`.
    #[inline]
    pub fn year_fraction(&self, day_count: DayCountConvention) -> f64 {
        day_count.year_fraction(self.start, self.end)
    }

    /// Actual calendar days in the period.
    #[inline]
    pub fn days(&self) -> i64 {
        self.end - self.start
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}
