//! European option with optional term structure bindings.

use super::OptionType;
use crate::analytical::BlackScholesInputs;
use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
use pricer_core::market_data::surfaces::{InterpolatedVolSurface, VolatilitySurface};
use std::sync::Arc;

/// European option on an asset paying a continuous dividend yield.
///
/// The flat `rate` and `volatility` are used unless a curve or surface is
/// bound, in which case the curve's zero rate at maturity and the surface's
/// volatility at (strike, maturity) take over for [`npv`](Self::npv).
/// Bindings are shared handles; the option never mutates them.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_core::market_data::curves::InterpolatedCurve;
/// use std::sync::Arc;
///
/// let call = EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 0.0);
/// assert!((call.npv() - 10.4506).abs() < 1e-4);
///
/// let curve = Arc::new(InterpolatedCurve::new(&[1.0], &[0.03]).unwrap());
/// let bound = call.clone().with_curve(curve);
/// assert_eq!(bound.effective_rate(), 0.03);
/// assert!(bound.npv() < call.npv());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanOption {
    option_type: OptionType,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    dividend: f64,
    curve: Option<Arc<InterpolatedCurve<f64>>>,
    surface: Option<Arc<InterpolatedVolSurface<f64>>>,
}

impl EuropeanOption {
    /// Creates an unbound option.
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `spot` - Spot price
    /// * `strike` - Strike price
    /// * `maturity` - Time to maturity in years
    /// * `rate` - Flat continuously compounded rate
    /// * `volatility` - Flat volatility
    /// * `dividend` - Continuous dividend yield
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        dividend: f64,
    ) -> Self {
        Self {
            option_type,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            dividend,
            curve: None,
            surface: None,
        }
    }

    /// Binds a yield curve.
    pub fn with_curve(mut self, curve: Arc<InterpolatedCurve<f64>>) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Binds a volatility surface.
    pub fn with_surface(mut self, surface: Arc<InterpolatedVolSurface<f64>>) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Binds or replaces the yield curve after construction.
    pub fn set_curve(&mut self, curve: Arc<InterpolatedCurve<f64>>) {
        self.curve = Some(curve);
    }

    /// Binds or replaces the volatility surface after construction.
    pub fn set_surface(&mut self, surface: Arc<InterpolatedVolSurface<f64>>) {
        self.surface = Some(surface);
    }

    /// Drops both bindings, returning to the flat inputs.
    pub fn clear_bindings(&mut self) {
        self.curve = None;
        self.surface = None;
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Flat rate, ignoring any bound curve.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Flat volatility, ignoring any bound surface.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Continuous dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Bound yield curve, if any.
    #[inline]
    pub fn curve(&self) -> Option<&Arc<InterpolatedCurve<f64>>> {
        self.curve.as_ref()
    }

    /// Bound volatility surface, if any.
    #[inline]
    pub fn surface(&self) -> Option<&Arc<InterpolatedVolSurface<f64>>> {
        self.surface.as_ref()
    }

    /// Bound curve's zero rate at maturity, else the flat rate.
    pub fn effective_rate(&self) -> f64 {
        self.curve
            .as_ref()
            .map_or(self.rate, |curve| curve.zero_rate(self.maturity))
    }

    /// Bound surface's volatility at (strike, maturity), else the flat volatility.
    pub fn effective_volatility(&self) -> f64 {
        self.surface.as_ref().map_or(self.volatility, |surface| {
            surface.volatility(self.strike, self.maturity)
        })
    }

    /// Closed-form inputs on the flat rate and volatility.
    pub fn flat_inputs(&self) -> BlackScholesInputs {
        BlackScholesInputs {
            option_type: self.option_type,
            spot: self.spot,
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            volatility: self.volatility,
            dividend: self.dividend,
        }
    }

    /// Closed-form inputs on the effective rate and volatility.
    pub fn effective_inputs(&self) -> BlackScholesInputs {
        BlackScholesInputs {
            rate: self.effective_rate(),
            volatility: self.effective_volatility(),
            ..self.flat_inputs()
        }
    }

    /// Dividend-adjusted Black-Scholes value on the effective inputs.
    ///
    /// Zero when the maturity or effective volatility is not positive.
    pub fn npv(&self) -> f64 {
        self.effective_inputs().price()
    }
}
