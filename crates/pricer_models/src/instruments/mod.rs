//! Financial instrument definitions.
//!
//! This module provides the tradable instruments and the enum used to hold
//! them in a portfolio.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) for static dispatch:
//! - [`Instrument`] wraps every instrument type
//! - Engines match on the variant they support and reject the rest
//!
//! # Instrument Types
//!
//! - [`EuropeanOption`]: European call or put with optional curve and surface bindings
//! - [`BarrierOption`]: Single-barrier European option with a rebate
//! - [`VanillaSwap`]: Fixed-for-floating interest rate swap
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{EuropeanOption, Instrument, InstrumentKind, OptionType};
//!
//! let call = EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
//! let instrument = Instrument::from(call);
//!
//! assert_eq!(instrument.kind(), InstrumentKind::European);
//! assert!((instrument.npv().unwrap() - 10.4506).abs() < 1e-4);
//! ```

mod barrier;
mod error;
mod payoff;
mod swap;
mod vanilla;

pub use barrier::{BarrierOption, BarrierType};
pub use error::InstrumentError;
pub use payoff::OptionType;
pub use swap::{SwapDirection, VanillaSwap};
pub use vanilla::EuropeanOption;

use pricer_core::types::PricingError;
use std::fmt;

/// Discriminant of an [`Instrument`], used in logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstrumentKind {
    /// European option
    European,
    /// Barrier option
    Barrier,
    /// Interest rate swap
    Swap,
}

impl InstrumentKind {
    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            InstrumentKind::European => "european",
            InstrumentKind::Barrier => "barrier",
            InstrumentKind::Swap => "swap",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unified instrument enum for static dispatch.
///
/// # Variants
/// - `European`: European option
/// - `Barrier`: Barrier option
/// - `Swap`: Interest rate swap
#[derive(Debug, Clone, PartialEq)]
pub enum Instrument {
    /// European option
    European(EuropeanOption),
    /// Barrier option
    Barrier(BarrierOption),
    /// Interest rate swap
    Swap(VanillaSwap),
}

impl Instrument {
    /// Instrument's own valuation, independent of any engine.
    ///
    /// Options always succeed; a swap fails without a bound curve.
    pub fn npv(&self) -> Result<f64, PricingError> {
        match self {
            Instrument::European(option) => Ok(option.npv()),
            Instrument::Barrier(option) => Ok(option.npv()),
            Instrument::Swap(swap) => Ok(swap.npv()?),
        }
    }

    /// Variant discriminant.
    #[inline]
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Instrument::European(_) => InstrumentKind::European,
            Instrument::Barrier(_) => InstrumentKind::Barrier,
            Instrument::Swap(_) => InstrumentKind::Swap,
        }
    }

    /// Returns the European option if this is a `European` variant.
    pub fn as_european(&self) -> Option<&EuropeanOption> {
        match self {
            Instrument::European(option) => Some(option),
            _ => None,
        }
    }

    /// Returns the barrier option if this is a `Barrier` variant.
    pub fn as_barrier(&self) -> Option<&BarrierOption> {
        match self {
            Instrument::Barrier(option) => Some(option),
            _ => None,
        }
    }

    /// Returns the swap if this is a `Swap` variant.
    pub fn as_swap(&self) -> Option<&VanillaSwap> {
        match self {
            Instrument::Swap(swap) => Some(swap),
            _ => None,
        }
    }
}

impl From<EuropeanOption> for Instrument {
    fn from(option: EuropeanOption) -> Self {
        Instrument::European(option)
    }
}

impl From<BarrierOption> for Instrument {
    fn from(option: BarrierOption) -> Self {
        Instrument::Barrier(option)
    }
}

impl From<VanillaSwap> for Instrument {
    fn from(swap: VanillaSwap) -> Self {
        Instrument::Swap(swap)
    }
}
