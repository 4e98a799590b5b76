//! Scenario execution engine.
//!
//! Revalues a portfolio under a [`ScenarioShock`] and reports the P&L.

use super::ScenarioShock;
use pricer_core::market_data::curves::InterpolatedCurve;
use pricer_core::market_data::surfaces::InterpolatedVolSurface;
use pricer_core::types::PricingError;
use pricer_models::instruments::{EuropeanOption, Instrument};
use pricer_pricing::{Engine, PricingEngine};
use std::sync::Arc;
use tracing::debug;

/// P&L of a portfolio under one shock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioPnL {
    /// Portfolio value before the shock
    pub base_value: f64,
    /// Portfolio value after the shock
    pub shocked_value: f64,
    /// P&L (shocked - base)
    pub pnl: f64,
    /// P&L as a fraction of |base|, zero when the base is zero
    pub pnl_pct: f64,
}

impl ScenarioPnL {
    /// Create a new scenario P&L result.
    pub fn new(base_value: f64, shocked_value: f64) -> Self {
        let pnl = shocked_value - base_value;
        let pnl_pct = if base_value != 0.0 {
            pnl / base_value.abs()
        } else {
            0.0
        };
        Self {
            base_value,
            shocked_value,
            pnl,
            pnl_pct,
        }
    }

    /// Check if P&L is a loss (negative).
    pub fn is_loss(&self) -> bool {
        self.pnl < 0.0
    }

    /// Check if P&L is a gain (positive).
    pub fn is_gain(&self) -> bool {
        self.pnl > 0.0
    }
}

/// Revalues portfolios under market shocks with one pricing engine.
///
/// Each instrument is handled by the first matching rule:
///
/// 1. Black-Scholes engine and a European option: the base is the engine
///    price; the shocked value prices an unbound copy with shocked spot,
///    rate and volatility, keeping the dividend.
/// 2. Swap engine, a swap, and a scenario curve: the base is the engine
///    price of the swap as bound; the shocked value rebinds a copy to the
///    scenario curve shifted in parallel.
/// 3. Anything else contributes its own `npv()` to both sides, so zero P&L.
///
/// The engine, curve and surface are never mutated.
#[derive(Clone, Debug)]
pub struct ScenarioEngine<'a> {
    engine: &'a Engine,
    curve: Option<Arc<InterpolatedCurve<f64>>>,
    surface: Option<Arc<InterpolatedVolSurface<f64>>>,
}

impl<'a> ScenarioEngine<'a> {
    /// Scenario engine without scenario curve or surface.
    pub fn new(engine: &'a Engine) -> Self {
        Self {
            engine,
            curve: None,
            surface: None,
        }
    }

    /// Sets the curve shocked for swap revaluation.
    pub fn with_curve(mut self, curve: Arc<InterpolatedCurve<f64>>) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Sets the volatility surface shocked by [`shocked_surface`](Self::shocked_surface).
    pub fn with_surface(mut self, surface: Arc<InterpolatedVolSurface<f64>>) -> Self {
        self.surface = Some(surface);
        self
    }

    /// The pricing engine.
    #[inline]
    pub fn engine(&self) -> &Engine {
        self.engine
    }

    /// Scenario curve, if any.
    #[inline]
    pub fn curve(&self) -> Option<&Arc<InterpolatedCurve<f64>>> {
        self.curve.as_ref()
    }

    /// Scenario surface, if any.
    #[inline]
    pub fn surface(&self) -> Option<&Arc<InterpolatedVolSurface<f64>>> {
        self.surface.as_ref()
    }

    /// Scenario curve with every pillar moved by the shock's rate shift.
    pub fn shocked_curve(&self, shock: &ScenarioShock) -> Option<InterpolatedCurve<f64>> {
        self.curve
            .as_ref()
            .map(|curve| curve.parallel_shift(shock.rate_parallel_bp))
    }

    /// Scenario surface with every node scaled by `1 + vol_shift`.
    pub fn shocked_surface(&self, shock: &ScenarioShock) -> Option<InterpolatedVolSurface<f64>> {
        self.surface
            .as_ref()
            .map(|surface| surface.scaled(1.0 + shock.vol_shift))
    }

    /// Portfolio P&L under `shock`: `Σ shocked - Σ base`.
    ///
    /// # Errors
    /// The first pricing failure in the portfolio.
    pub fn apply(&self, portfolio: &[Instrument], shock: &ScenarioShock) -> Result<f64, PricingError> {
        Ok(self.evaluate(portfolio, shock)?.pnl)
    }

    /// Base value, shocked value and P&L of the portfolio under `shock`.
    pub fn evaluate(
        &self,
        portfolio: &[Instrument],
        shock: &ScenarioShock,
    ) -> Result<ScenarioPnL, PricingError> {
        let shocked_curve = self.shocked_curve(shock).map(Arc::new);

        let mut base_value = 0.0;
        let mut shocked_value = 0.0;

        for instrument in portfolio {
            let (base, shocked) = match (self.engine, instrument, &shocked_curve) {
                (Engine::BlackScholes(bs), Instrument::European(option), _) => {
                    let shocked_option = EuropeanOption::new(
                        option.option_type(),
                        shock.shock_spot(option.spot()),
                        option.strike(),
                        option.maturity(),
                        shock.shock_rate(option.rate()),
                        shock.shock_vol(option.volatility()),
                        option.dividend(),
                    );
                    (bs.price_option(option), bs.price_option(&shocked_option))
                }
                (Engine::DiscountingSwap(_), Instrument::Swap(swap), Some(curve)) => {
                    let base = self.engine.price(instrument)?;
                    let mut shocked_swap = swap.clone();
                    shocked_swap.set_curve(Arc::clone(curve));
                    (base, self.engine.price(&Instrument::Swap(shocked_swap))?)
                }
                _ => {
                    debug!(
                        engine = self.engine.name(),
                        instrument = %instrument.kind(),
                        "no scenario rule, valuing unshocked"
                    );
                    let npv = instrument.npv()?;
                    (npv, npv)
                }
            };
            base_value += base;
            shocked_value += shocked;
        }

        let result = ScenarioPnL::new(base_value, shocked_value);
        debug!(
            instruments = portfolio.len(),
            base = result.base_value,
            shocked = result.shocked_value,
            pnl = result.pnl,
            "scenario evaluated"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::PresetShock;
    use approx::assert_relative_eq;
    use pricer_core::market_data::surfaces::VolatilitySurface;
    use pricer_core::types::{Date, DayCountConvention};
    use pricer_models::instruments::{
        BarrierOption, BarrierType, OptionType, SwapDirection, VanillaSwap,
    };
    use pricer_models::schedules::{Frequency, Schedule};
    use pricer_pricing::{BinomialBarrierEngine, BlackScholesEngine, DiscountingSwapEngine};

    fn call() -> EuropeanOption {
        EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 0.0)
    }

    fn curve() -> Arc<InterpolatedCurve<f64>> {
        Arc::new(InterpolatedCurve::new(&[1.0, 5.0], &[0.03, 0.035]).unwrap())
    }

    fn payer_swap() -> VanillaSwap {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2029, 1, 1).unwrap();
        VanillaSwap::new(
            SwapDirection::Payer,
            1_000_000.0,
            0.03,
            Schedule::new(start, end, Frequency::Annual).unwrap(),
            Schedule::new(start, end, Frequency::Quarterly).unwrap(),
            DayCountConvention::Actual365Fixed,
            DayCountConvention::Actual365Fixed,
        )
        .with_curve(curve())
    }

    // ========================================
    // ScenarioPnL
    // ========================================

    #[test]
    fn test_pnl_fields() {
        let pnl = ScenarioPnL::new(200.0, 150.0);
        assert_eq!(pnl.pnl, -50.0);
        assert_eq!(pnl.pnl_pct, -0.25);
        assert!(pnl.is_loss() && !pnl.is_gain());
        assert_eq!(ScenarioPnL::new(0.0, 5.0).pnl_pct, 0.0);
    }

    // ========================================
    // European options
    // ========================================

    #[test]
    fn test_zero_shock_zero_pnl() {
        let engine = Engine::from(BlackScholesEngine::new());
        let portfolio = vec![Instrument::from(call())];
        let scenarios = ScenarioEngine::new(&engine);
        assert_eq!(scenarios.apply(&portfolio, &ScenarioShock::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_rate_shock_on_call_matches_reprice() {
        let engine = Engine::from(BlackScholesEngine::new());
        let portfolio = vec![Instrument::from(call())];
        let pnl = ScenarioEngine::new(&engine)
            .apply(&portfolio, &ScenarioShock::rates(100.0))
            .unwrap();
        let shocked = EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.06, 0.2, 0.0);
        assert_relative_eq!(pnl, shocked.npv() - call().npv(), epsilon = 1e-12);
    }

    #[test]
    fn test_shocked_clone_is_unbound() {
        // The surface on the option is dropped for the shocked side
        let vols = [vec![0.5, 0.5], vec![0.5, 0.5]];
        let surface =
            Arc::new(InterpolatedVolSurface::new(&[50.0, 150.0], &[0.1, 5.0], &vols).unwrap());
        let engine = Engine::from(BlackScholesEngine::new());
        let portfolio = vec![Instrument::from(call().with_surface(surface))];
        let result = ScenarioEngine::new(&engine)
            .evaluate(&portfolio, &ScenarioShock::default())
            .unwrap();
        assert_relative_eq!(result.base_value, call().npv(), epsilon = 1e-12);
        assert_relative_eq!(result.shocked_value, call().npv(), epsilon = 1e-12);
    }

    // ========================================
    // Swaps
    // ========================================

    #[test]
    fn test_swap_rate_shock() {
        let engine = Engine::from(DiscountingSwapEngine::new());
        let swap = payer_swap();
        let portfolio = vec![Instrument::from(swap.clone())];
        let scenarios = ScenarioEngine::new(&engine).with_curve(curve());

        let result = scenarios.evaluate(&portfolio, &ScenarioShock::rates(10.0)).unwrap();
        let mut expected = swap.clone();
        expected.set_curve(Arc::new(curve().parallel_shift(10.0)));
        assert_relative_eq!(result.base_value, swap.npv().unwrap(), epsilon = 1e-9);
        assert_relative_eq!(result.shocked_value, expected.npv().unwrap(), epsilon = 1e-9);
        assert!(result.pnl != 0.0);
    }

    #[test]
    fn test_swap_without_scenario_curve_falls_back() {
        let engine = Engine::from(DiscountingSwapEngine::new());
        let portfolio = vec![Instrument::from(payer_swap())];
        let pnl = ScenarioEngine::new(&engine)
            .apply(&portfolio, &ScenarioShock::rates(100.0))
            .unwrap();
        assert_eq!(pnl, 0.0);
    }

    // ========================================
    // Fallback
    // ========================================

    #[test]
    fn test_unmatched_pairs_contribute_zero() {
        let engine = Engine::from(BinomialBarrierEngine::default());
        let barrier = BarrierOption::new(
            BarrierType::DownAndOut,
            OptionType::Put,
            100.0,
            100.0,
            1.0,
            0.05,
            0.2,
            80.0,
        );
        let portfolio = vec![Instrument::from(barrier), Instrument::from(call())];
        let result = ScenarioEngine::new(&engine)
            .evaluate(&portfolio, &PresetShock::MarketCrash.shock())
            .unwrap();
        assert_eq!(result.pnl, 0.0);
        assert_relative_eq!(result.base_value, barrier.npv() + call().npv(), epsilon = 1e-12);
    }

    #[test]
    fn test_fallback_propagates_npv_errors() {
        let engine = Engine::from(BlackScholesEngine::new());
        let bound = payer_swap();
        let unbound = VanillaSwap::new(
            bound.direction(),
            bound.notional(),
            bound.fixed_rate(),
            bound.fixed_schedule().clone(),
            bound.float_schedule().clone(),
            bound.fixed_day_count(),
            bound.float_day_count(),
        );
        let err = ScenarioEngine::new(&engine)
            .apply(&[Instrument::from(unbound)], &ScenarioShock::rates(1.0))
            .unwrap_err();
        assert!(err.is_data_error());
    }

    // ========================================
    // Shocked structures
    // ========================================

    #[test]
    fn test_shocked_structures_leave_originals() {
        let vols = [vec![0.2, 0.25], vec![0.3, 0.35]];
        let surface =
            Arc::new(InterpolatedVolSurface::new(&[90.0, 110.0], &[0.5, 2.0], &vols).unwrap());
        let engine = Engine::from(BlackScholesEngine::new());
        let scenarios = ScenarioEngine::new(&engine)
            .with_curve(curve())
            .with_surface(Arc::clone(&surface));
        let shock = ScenarioShock::new(25.0, 0.1, 0.0);

        let shocked_curve = scenarios.shocked_curve(&shock).unwrap();
        assert_relative_eq!(shocked_curve.zero_rates()[0], 0.0325, epsilon = 1e-15);
        assert_eq!(scenarios.curve().unwrap().zero_rates()[0], 0.03);

        let shocked_surface = scenarios.shocked_surface(&shock).unwrap();
        assert_relative_eq!(shocked_surface.volatility(110.0, 2.0), 0.385, epsilon = 1e-12);
        assert_eq!(surface.volatility(110.0, 2.0), 0.35);
    }

    #[test]
    fn test_no_scenario_structures() {
        let engine = Engine::from(BlackScholesEngine::new());
        let scenarios = ScenarioEngine::new(&engine);
        assert!(scenarios.shocked_curve(&ScenarioShock::rates(1.0)).is_none());
        assert!(scenarios.shocked_surface(&ScenarioShock::vol(0.1)).is_none());
    }
}
