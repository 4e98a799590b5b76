//! Coupon frequency.

use super::ScheduleError;
use std::fmt;
use std::str::FromStr;

/// How often a leg pays.
///
/// Only frequencies that divide the year into whole months are supported,
/// so rolling a schedule is always a whole-month step.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::Frequency;
///
/// let freq: Frequency = "6M".parse().unwrap();
/// assert_eq!(freq, Frequency::SemiAnnual);
/// assert_eq!(freq.months_between_payments(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// Once a year
    Annual,
    /// Every six months
    SemiAnnual,
    /// Every three months
    Quarterly,
}

impl Frequency {
    /// All supported frequencies, least frequent first.
    pub const ALL: [Frequency; 3] = [Frequency::Annual, Frequency::SemiAnnual, Frequency::Quarterly];

    /// Coupons per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
        }
    }

    /// Roll step in months.
    #[inline]
    pub fn months_between_payments(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Market tenor label (`"12M"`, `"6M"`, `"3M"`).
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Annual => "12M",
            Frequency::SemiAnnual => "6M",
            Frequency::Quarterly => "3M",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    /// Accepts the tenor label or the spelled-out name, ignoring case,
    /// dashes and underscores (`"3m"`, `"Semi-Annual"`, `"1Y"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match key.as_str() {
            "12m" | "1y" | "annual" => Ok(Frequency::Annual),
            "6m" | "semiannual" => Ok(Frequency::SemiAnnual),
            "3m" | "quarterly" => Ok(Frequency::Quarterly),
            _ => Err(ScheduleError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_divide_the_year() {
        for freq in Frequency::ALL {
            assert_eq!(freq.months_between_payments() * freq.periods_per_year(), 12);
        }
        assert_eq!(Frequency::Quarterly.months_between_payments(), 3);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Semi-Annual".parse::<Frequency>(), Ok(Frequency::SemiAnnual));
        assert_eq!(" 3M ".parse::<Frequency>(), Ok(Frequency::Quarterly));
        assert_eq!("1y".parse::<Frequency>(), Ok(Frequency::Annual));
        assert_eq!(
            "1M".parse::<Frequency>(),
            Err(ScheduleError::UnknownFrequency("1M".to_string()))
        );
    }

    #[test]
    fn test_label_parses_back() {
        for freq in Frequency::ALL {
            assert_eq!(freq.to_string().parse::<Frequency>(), Ok(freq));
        }
    }
}
