//! SABR engine for European options.

use super::{unsupported, PricingEngine};
use pricer_core::types::PricingError;
use pricer_models::analytical::black_forward_price;
use pricer_models::instruments::{EuropeanOption, Instrument};
use pricer_models::models::SabrModel;

/// Prices European options with Black-76 on the SABR implied volatility.
///
/// The option's spot is taken as the forward and discounting uses the
/// engine's flat `discount_rate`. The option's own rate, dividend and any
/// bindings are ignored.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_models::models::SabrModel;
/// use pricer_pricing::SabrEngine;
///
/// let model = SabrModel::new(0.2, 1.0, 0.0, 0.0).unwrap();
/// let engine = SabrEngine::new(model, 0.0);
/// let call = EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.3, 0.0);
///
/// // Lognormal SABR without vol-of-vol is Black-76 at alpha
/// assert!((engine.price_option(&call) - 7.9656).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SabrEngine {
    model: SabrModel,
    discount_rate: f64,
}

impl SabrEngine {
    /// Creates the engine.
    pub fn new(model: SabrModel, discount_rate: f64) -> Self {
        Self {
            model,
            discount_rate,
        }
    }

    /// Underlying SABR parameters.
    #[inline]
    pub fn model(&self) -> &SabrModel {
        &self.model
    }

    /// Flat continuously compounded discount rate.
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// SABR implied volatility at the option's strike and maturity.
    pub fn implied_vol(&self, option: &EuropeanOption) -> f64 {
        self.model
            .implied_vol(option.spot(), option.strike(), option.maturity())
    }

    /// Option value; zero when the implied volatility or maturity is not positive.
    pub fn price_option(&self, option: &EuropeanOption) -> f64 {
        let maturity = option.maturity();
        let vol = self.implied_vol(option);
        if vol <= 0.0 || maturity <= 0.0 {
            return 0.0;
        }
        let df = (-self.discount_rate * maturity).exp();
        black_forward_price(
            option.option_type(),
            option.spot(),
            option.strike(),
            maturity,
            vol,
            df,
        )
    }
}

impl PricingEngine for SabrEngine {
    fn name(&self) -> &'static str {
        "sabr"
    }

    fn price(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        match instrument {
            Instrument::European(option) => Ok(self.price_option(option)),
            other => Err(unsupported(self.name(), other)),
        }
    }
}
