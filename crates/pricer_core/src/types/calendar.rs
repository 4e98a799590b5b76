//! Holiday calendars for business-day adjustment.

use std::collections::BTreeSet;

use super::error::DateError;
use super::time::Date;

/// Weekend-plus-holidays business calendar.
///
/// Saturdays and Sundays are never business days; additional holidays are
/// held in an ordered set.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Calendar, Date};
///
/// let mut cal = Calendar::new();
/// cal.add_holiday(Date::from_ymd(2024, 12, 25).unwrap());
///
/// // Christmas falls on a Wednesday in 2024
/// let xmas = Date::from_ymd(2024, 12, 25).unwrap();
/// assert!(!cal.is_business_day(xmas));
/// assert_eq!(cal.adjust(xmas).unwrap(), Date::from_ymd(2024, 12, 26).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    holidays: BTreeSet<Date>,
}

impl Calendar {
    /// Creates a calendar with weekends only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar with the given holidays.
    pub fn with_holidays<I: IntoIterator<Item = Date>>(holidays: I) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Registers an additional holiday.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Returns `true` if `date` is a registered holiday.
    #[inline]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns the registered holidays in chronological order.
    pub fn holidays(&self) -> impl Iterator<Item = &Date> {
        self.holidays.iter()
    }

    /// Returns `true` unless `date` is a weekend day or a holiday.
    #[inline]
    pub fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.is_holiday(date)
    }

    /// Rolls `date` forward to the first business day (following convention).
    pub fn adjust(&self, date: Date) -> Result<Date, DateError> {
        let mut adjusted = date;
        while !self.is_business_day(adjusted) {
            adjusted = adjusted.add_days(1)?;
        }
        Ok(adjusted)
    }

    /// Offsets `date` by a signed number of calendar days (no adjustment).
    #[inline]
    pub fn advance(&self, date: Date, days: i64) -> Result<Date, DateError> {
        date.add_days(days)
    }
}
