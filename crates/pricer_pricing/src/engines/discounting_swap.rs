//! Discounting engine for vanilla swaps.

use super::{unsupported, PricingEngine};
use pricer_core::types::PricingError;
use pricer_models::instruments::Instrument;

/// Values a swap on the curve bound to it.
///
/// The engine holds no market data of its own; an unbound swap fails with
/// `PricingError::InvalidInput`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountingSwapEngine;

impl DiscountingSwapEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl PricingEngine for DiscountingSwapEngine {
    fn name(&self) -> &'static str {
        "discounting-swap"
    }

    fn price(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        match instrument {
            Instrument::Swap(swap) => Ok(swap.npv()?),
            other => Err(unsupported(self.name(), other)),
        }
    }
}
