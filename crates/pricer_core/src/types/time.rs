//! Time types and day count conventions for financial calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DateTime`: Date plus sub-day timestamp
//! - `DayCountConvention`: Day counts and year fractions
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2023, 1, 1).unwrap();
//! let end = Date::from_ymd(2023, 1, 31).unwrap();
//!
//! let yf = DayCountConvention::Actual365Fixed.year_fraction(start, end);
//! assert!((yf - 30.0 / 365.0).abs() < 1e-15);
//! ```

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Dates are immutable values; ordering is chronological.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    #[inline]
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns `true` on Saturdays and Sundays.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Offsets the date by a signed number of calendar days.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(d.add_days(2).unwrap(), Date::from_ymd(2024, 3, 1).unwrap());
    /// assert_eq!(d.add_days(-28).unwrap(), Date::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("{} + {} days", self, days)))
    }

    /// Adds whole months, capping the day to the target month's last day.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(d.add_months(1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(d.add_months(3).unwrap(), Date::from_ymd(2024, 4, 30).unwrap());
    /// ```
    pub fn add_months(&self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("{} + {} months", self, months)))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the signed number of days from `other` to `self`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Calendar date with a sub-day timestamp (second resolution).
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{Date, DateTime};
///
/// let ts = DateTime::from_ymd_hms(2024, 3, 15, 16, 30, 0).unwrap();
/// assert_eq!(ts.date(), Date::from_ymd(2024, 3, 15).unwrap());
/// assert_eq!(ts.to_string(), "2024-03-15 16:30:00");
/// assert!(DateTime::from(ts.date()) < ts);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    /// Creates a timestamp from calendar and clock components.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        let date = Date::from_ymd(year, month, day)?;
        date.0
            .and_hms_opt(hour, minute, second)
            .map(DateTime)
            .ok_or(DateError::InvalidTime {
                hour,
                minute,
                second,
            })
    }

    /// Returns the calendar date part.
    #[inline]
    pub fn date(&self) -> Date {
        Date(self.0.date())
    }

    /// Returns the underlying NaiveDateTime.
    #[inline]
    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl From<Date> for DateTime {
    /// Midnight at the start of `date`.
    fn from(date: Date) -> Self {
        DateTime(date.0.and_time(chrono::NaiveTime::MIN))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Day count convention (year fraction convention).
///
/// # Variants
/// - `Actual365Fixed`: Actual days / 365
/// - `Actual360`: Actual days / 360
/// - `Thirty360`: 30-day months, 360-day year
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
///
/// assert_eq!(DayCountConvention::Actual365Fixed.day_count(start, end), 182);
/// assert_eq!(DayCountConvention::Thirty360.day_count(start, end), 180);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Actual365Fixed,

    /// Actual/360: actual_days / 360.0
    Actual360,

    /// 30/360: every month counts 30 days, the year 360 days.
    ///
    /// Day counts follow `360(y2-y1) + 30(m2-m1) + (d2-d1)` on the raw
    /// calendar components, with no end-of-month day adjustment.
    Thirty360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Actual360.name(), "ACT/360");
    /// assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365",
            DayCountConvention::Actual360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Returns the year-length denominator of the convention.
    #[inline]
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => 365.0,
            DayCountConvention::Actual360 | DayCountConvention::Thirty360 => 360.0,
        }
    }

    /// Integer day count between two dates.
    ///
    /// Negative when `end` precedes `start`.
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Actual365Fixed | DayCountConvention::Actual360 => end - start,
            DayCountConvention::Thirty360 => {
                let years = i64::from(end.year()) - i64::from(start.year());
                let months = i64::from(end.month()) - i64::from(start.month());
                let days = i64::from(end.day()) - i64::from(start.day());
                360 * years + 30 * months + days
            }
        }
    }

    /// Year fraction between two dates: day count over the year length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 7, 1).unwrap();
    ///
    /// let yf = DayCountConvention::Actual360.year_fraction(start, end);
    /// assert!((yf - 182.0 / 360.0).abs() < 1e-15);
    ///
    /// // Reversed dates return a negative value
    /// let yf_neg = DayCountConvention::Actual360.year_fraction(end, start);
    /// assert!((yf_neg + 182.0 / 360.0).abs() < 1e-15);
    /// ```
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / self.days_per_year()
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses a day count convention (case-insensitive).
    ///
    /// Accepts "ACT/365", "Actual/365", "A365", "ACT/360", "A360",
    /// "30/360" and "Thirty360".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" | "ACT365FIXED" => Ok(DayCountConvention::Actual365Fixed),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Actual360),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Integer day count between two dates under `conv`.
#[inline]
pub fn day_count(start: Date, end: Date, conv: DayCountConvention) -> i64 {
    conv.day_count(start, end)
}

/// Year fraction between two dates under `conv`.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{year_fraction, Date, DayCountConvention};
///
/// let start = Date::from_ymd(2023, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(year_fraction(start, end, DayCountConvention::Actual365Fixed), 1.0);
/// ```
#[inline]
pub fn year_fraction(start: Date, end: Date, conv: DayCountConvention) -> f64 {
    conv.year_fraction(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    // ==========================================================
    // Date construction and arithmetic
    // ==========================================================

    #[test]
    fn test_from_ymd_rejects_invalid() {
        match Date::from_ymd(2023, 2, 29) {
            Err(DateError::InvalidDate { year, month, day }) => {
                assert_eq!((year, month, day), (2023, 2, 29));
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(d(2023, 12, 31) < d(2024, 1, 1));
        assert!(d(2024, 1, 2) > d(2024, 1, 1));
        assert_eq!(d(2024, 1, 1), d(2024, 1, 1));
    }

    #[test]
    fn test_display_round_trip() {
        let date = d(2024, 3, 5);
        assert_eq!(date.to_string(), "2024-03-05");
        assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_add_months_caps_day() {
        assert_eq!(d(2023, 1, 31).add_months(1).unwrap(), d(2023, 2, 28));
        assert_eq!(d(2023, 8, 31).add_months(6).unwrap(), d(2024, 2, 29));
        assert_eq!(d(2023, 11, 15).add_months(3).unwrap(), d(2024, 2, 15));
    }

    #[test]
    fn test_weekend_detection() {
        assert!(d(2024, 6, 15).is_weekend()); // Saturday
        assert!(d(2024, 6, 16).is_weekend()); // Sunday
        assert!(!d(2024, 6, 17).is_weekend());
    }

    #[test]
    fn test_datetime_invalid_time() {
        assert!(matches!(
            DateTime::from_ymd_hms(2024, 1, 1, 24, 0, 0),
            Err(DateError::InvalidTime { hour: 24, .. })
        ));
        assert!(matches!(
            DateTime::from_ymd_hms(2024, 2, 30, 0, 0, 0),
            Err(DateError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_datetime_ordering_within_day() {
        let morning = DateTime::from_ymd_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let evening = DateTime::from_ymd_hms(2024, 1, 1, 18, 0, 0).unwrap();
        assert!(morning < evening);
        assert_eq!(morning.date(), evening.date());
    }

    // ==========================================================
    // Day counts
    // ==========================================================

    #[test]
    fn test_act365_january() {
        let yf = year_fraction(d(2023, 1, 1), d(2023, 1, 31), DayCountConvention::Actual365Fixed);
        assert_relative_eq!(yf, 30.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act360_uses_actual_days() {
        let conv = DayCountConvention::Actual360;
        assert_eq!(conv.day_count(d(2024, 2, 1), d(2024, 3, 1)), 29);
        assert_relative_eq!(conv.year_fraction(d(2024, 2, 1), d(2024, 3, 1)), 29.0 / 360.0);
    }

    #[test]
    fn test_thirty360_raw_components() {
        let conv = DayCountConvention::Thirty360;
        assert_eq!(conv.day_count(d(2024, 1, 15), d(2024, 2, 15)), 30);
        // February is still a 30-day month
        assert_eq!(conv.day_count(d(2023, 2, 1), d(2023, 3, 1)), 30);
        // No end-of-month adjustment: 31st counts as day 31
        assert_eq!(conv.day_count(d(2024, 1, 1), d(2024, 1, 31)), 30);
        assert_eq!(conv.day_count(d(2024, 1, 31), d(2024, 3, 1)), 30);
        assert_eq!(conv.day_count(d(2023, 6, 30), d(2024, 6, 30)), 360);
        assert_relative_eq!(conv.year_fraction(d(2023, 6, 30), d(2024, 6, 30)), 1.0);
    }

    #[test]
    fn test_day_count_free_function_matches_method() {
        for conv in [
            DayCountConvention::Actual365Fixed,
            DayCountConvention::Actual360,
            DayCountConvention::Thirty360,
        ] {
            assert_eq!(
                day_count(d(2022, 5, 17), d(2025, 11, 3), conv),
                conv.day_count(d(2022, 5, 17), d(2025, 11, 3))
            );
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "Actual/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Actual365Fixed
        );
        assert_eq!("a360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Actual360);
        assert_eq!("30/360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Thirty360);
        assert!("ACT/ACT".parse::<DayCountConvention>().is_err());
    }
}
