//! Pricing engines and enum dispatch.
//!
//! This module provides:
//! - [`PricingEngine`]: trait implemented by every engine
//! - One engine per supported instrument variant
//! - [`Engine`]: static dispatch wrapper implementing [`PricingEngine`]
//!
//! # Pairing
//!
//! | Engine | Instrument |
//! |---|---|
//! | [`BlackScholesEngine`] | `European` |
//! | [`SabrEngine`] | `European` |
//! | [`BinomialBarrierEngine`] | `Barrier` |
//! | [`DiscountingSwapEngine`] | `Swap` |

mod binomial_barrier;
mod black_scholes;
mod discounting_swap;
mod sabr;

pub use binomial_barrier::{BinomialBarrierEngine, DEFAULT_LATTICE_STEPS};
pub use black_scholes::BlackScholesEngine;
pub use discounting_swap::DiscountingSwapEngine;
pub use sabr::SabrEngine;

use pricer_core::types::PricingError;
use pricer_models::instruments::Instrument;
use tracing::debug;

/// Common interface of all pricing engines.
pub trait PricingEngine {
    /// Short engine name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Values `instrument`.
    ///
    /// # Errors
    /// * `PricingError::UnsupportedInstrument` - The engine cannot value this variant
    /// * `PricingError::InvalidInput` - The instrument lacks required market data
    fn price(&self, instrument: &Instrument) -> Result<f64, PricingError>;
}

/// Pairing error for an engine asked to value a variant it does not support.
pub(crate) fn unsupported(engine: &'static str, instrument: &Instrument) -> PricingError {
    PricingError::UnsupportedInstrument(format!(
        "{} engine cannot price {} instruments",
        engine,
        instrument.kind()
    ))
}

/// Enum dispatch over the available engines.
///
/// # Examples
/// ```
/// use pricer_pricing::{BinomialBarrierEngine, Engine, PricingEngine};
///
/// let engine = Engine::from(BinomialBarrierEngine::default());
/// assert_eq!(engine.name(), "binomial-barrier");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Engine {
    /// Closed-form Black-Scholes
    BlackScholes(BlackScholesEngine),
    /// SABR implied volatility with Black-76
    Sabr(SabrEngine),
    /// CRR lattice for barrier options
    BinomialBarrier(BinomialBarrierEngine),
    /// Single-curve swap discounting
    DiscountingSwap(DiscountingSwapEngine),
}

impl Engine {
    /// Returns the Black-Scholes engine if this is a `BlackScholes` variant.
    pub fn as_black_scholes(&self) -> Option<&BlackScholesEngine> {
        match self {
            Engine::BlackScholes(engine) => Some(engine),
            _ => None,
        }
    }

    /// Returns the swap engine if this is a `DiscountingSwap` variant.
    pub fn as_discounting_swap(&self) -> Option<&DiscountingSwapEngine> {
        match self {
            Engine::DiscountingSwap(engine) => Some(engine),
            _ => None,
        }
    }
}

impl PricingEngine for Engine {
    fn name(&self) -> &'static str {
        match self {
            Engine::BlackScholes(engine) => engine.name(),
            Engine::Sabr(engine) => engine.name(),
            Engine::BinomialBarrier(engine) => engine.name(),
            Engine::DiscountingSwap(engine) => engine.name(),
        }
    }

    fn price(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        debug!(engine = self.name(), instrument = %instrument.kind(), "dispatching price");
        match self {
            Engine::BlackScholes(engine) => engine.price(instrument),
            Engine::Sabr(engine) => engine.price(instrument),
            Engine::BinomialBarrier(engine) => engine.price(instrument),
            Engine::DiscountingSwap(engine) => engine.price(instrument),
        }
    }
}

impl From<BlackScholesEngine> for Engine {
    fn from(engine: BlackScholesEngine) -> Self {
        Engine::BlackScholes(engine)
    }
}

impl From<SabrEngine> for Engine {
    fn from(engine: SabrEngine) -> Self {
        Engine::Sabr(engine)
    }
}

impl From<BinomialBarrierEngine> for Engine {
    fn from(engine: BinomialBarrierEngine) -> Self {
        Engine::BinomialBarrier(engine)
    }
}

impl From<DiscountingSwapEngine> for Engine {
    fn from(engine: DiscountingSwapEngine) -> Self {
        Engine::DiscountingSwap(engine)
    }
}
