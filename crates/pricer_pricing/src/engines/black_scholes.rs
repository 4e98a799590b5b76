//! Analytic Black-Scholes engine for European options.

use super::{unsupported, PricingEngine};
use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
use pricer_core::types::PricingError;
use pricer_models::analytical::{BlackScholesInputs, Greeks};
use pricer_models::instruments::{EuropeanOption, Instrument};
use std::sync::Arc;

/// Closed-form engine for European options.
///
/// With a curve bound to the engine, the rate is the curve's zero rate at
/// the option's maturity; otherwise the option's flat rate. Volatility and
/// dividend are always the option's flat inputs, so surfaces bound to the
/// option are ignored here.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_pricing::BlackScholesEngine;
///
/// let engine = BlackScholesEngine::new();
/// let call = EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
///
/// assert!((engine.price_option(&call) - 10.4506).abs() < 1e-4);
/// assert!((engine.delta(&call).unwrap() - 0.6368).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlackScholesEngine {
    curve: Option<Arc<InterpolatedCurve<f64>>>,
}

impl BlackScholesEngine {
    /// Engine that uses each option's flat rate.
    pub fn new() -> Self {
        Self { curve: None }
    }

    /// Engine that reads rates from `curve`.
    pub fn with_curve(curve: Arc<InterpolatedCurve<f64>>) -> Self {
        Self { curve: Some(curve) }
    }

    /// Bound curve, if any.
    #[inline]
    pub fn curve(&self) -> Option<&Arc<InterpolatedCurve<f64>>> {
        self.curve.as_ref()
    }

    fn inputs(&self, option: &EuropeanOption) -> BlackScholesInputs {
        let rate = self
            .curve
            .as_ref()
            .map_or(option.rate(), |curve| curve.zero_rate(option.maturity()));
        BlackScholesInputs {
            rate,
            ..option.flat_inputs()
        }
    }

    fn greek_inputs(&self, option: &EuropeanOption) -> Result<BlackScholesInputs, PricingError> {
        let inputs = self.inputs(option);
        if inputs.is_degenerate() {
            return Err(PricingError::InvalidInput(format!(
                "Greeks undefined for maturity {} and volatility {}",
                inputs.maturity, inputs.volatility
            )));
        }
        Ok(inputs)
    }

    /// Option value; zero when maturity or volatility is not positive.
    pub fn price_option(&self, option: &EuropeanOption) -> f64 {
        self.inputs(option).price()
    }

    /// ∂V/∂S.
    ///
    /// # Errors
    /// `PricingError::InvalidInput` when maturity or volatility is not positive.
    pub fn delta(&self, option: &EuropeanOption) -> Result<f64, PricingError> {
        Ok(self.greek_inputs(option)?.delta())
    }

    /// ∂²V/∂S².
    pub fn gamma(&self, option: &EuropeanOption) -> Result<f64, PricingError> {
        Ok(self.greek_inputs(option)?.gamma())
    }

    /// ∂V/∂σ.
    pub fn vega(&self, option: &EuropeanOption) -> Result<f64, PricingError> {
        Ok(self.greek_inputs(option)?.vega())
    }

    /// ∂V/∂t per year.
    pub fn theta(&self, option: &EuropeanOption) -> Result<f64, PricingError> {
        Ok(self.greek_inputs(option)?.theta())
    }

    /// ∂V/∂r.
    pub fn rho(&self, option: &EuropeanOption) -> Result<f64, PricingError> {
        Ok(self.greek_inputs(option)?.rho())
    }

    /// All first-order Greeks plus gamma.
    pub fn greeks(&self, option: &EuropeanOption) -> Result<Greeks, PricingError> {
        Ok(self.greek_inputs(option)?.greeks())
    }
}

impl PricingEngine for BlackScholesEngine {
    fn name(&self) -> &'static str {
        "black-scholes"
    }

    fn price(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        match instrument {
            Instrument::European(option) => Ok(self.price_option(option)),
            other => Err(unsupported(self.name(), other)),
        }
    }
}
