//! Payment schedule generation.

use super::{Frequency, Period, ScheduleError};
use pricer_core::types::Date;

/// Regular payment schedule between a start and an end date.
///
/// Dates roll forward from `start` by `frequency.months_between_payments()`
/// months, each step starting from the previous date with the day of month
/// capped to the target month's length. A step past `end` is clipped to
/// `end`, and `end` is always the last date.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::{Frequency, Schedule};
/// use pricer_core::types::Date;
///
/// let schedule = Schedule::new(
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     Date::from_ymd(2026, 1, 15).unwrap(),
///     Frequency::SemiAnnual,
/// )
/// .unwrap();
///
/// assert_eq!(schedule.payment_dates().len(), 5);
/// assert_eq!(schedule.periods().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    start: Date,
    end: Date,
    frequency: Frequency,
    /// `[start, ..., end]`; a single date when `start == end`
    dates: Vec<Date>,
}

impl Schedule {
    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::InvalidDateRange` - `start` is after `end`
    /// * `ScheduleError::DateOverflow` - Rolling leaves the supported date range
    pub fn new(start: Date, end: Date, frequency: Frequency) -> Result<Self, ScheduleError> {
        if start > end {
            return Err(ScheduleError::InvalidDateRange { start, end });
        }

        let months = frequency.months_between_payments();
        let mut dates = vec![start];
        let mut current = start;
        while current < end {
            let next = current.add_months(months)?.min(end);
            dates.push(next);
            current = next;
        }

        Ok(Self {
            start,
            end,
            frequency,
            dates,
        })
    }

    /// Schedule start date.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Schedule end date.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Payment frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// All schedule dates, starting with `start` and ending with `end`.
    #[inline]
    pub fn payment_dates(&self) -> &[Date] {
        &self.dates
    }

    /// Accrual periods between consecutive dates.
    pub fn periods(&self) -> Vec<Period> {
        self.dates
            .windows(2)
            .map(|w| Period::new(w[0], w[1]))
            .collect()
    }
}
