//! Named market data container.
//!
//! This module provides:
//! - [`MarketData`]: Registry of named curves, surfaces and spot quotes
//! - [`EquitySpot`]: Equity spot quote
//! - [`FxSpot`]: FX spot quote for a currency pair
//!
//! Curves and surfaces are held behind `Arc` so instruments and engines can
//! bind to the same term structure without copying it.

use super::curves::InterpolatedCurve;
use super::error::MarketDataError;
use super::surfaces::InterpolatedVolSurface;
use std::collections::HashMap;
use std::sync::Arc;

fn validate_quote(name: &str, spot: f64) -> Result<(), MarketDataError> {
    if spot.is_finite() && spot > 0.0 {
        Ok(())
    } else {
        Err(MarketDataError::InvalidQuote {
            name: name.to_string(),
            value: spot,
        })
    }
}

/// Equity spot quote.
#[derive(Debug, Clone, PartialEq)]
pub struct EquitySpot {
    ticker: String,
    spot: f64,
}

impl EquitySpot {
    /// Construct a quote; `spot` must be positive and finite.
    pub fn new(ticker: impl Into<String>, spot: f64) -> Result<Self, MarketDataError> {
        let ticker = ticker.into();
        validate_quote(&ticker, spot)?;
        Ok(Self { ticker, spot })
    }

    /// Equity ticker.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Spot price.
    pub fn spot(&self) -> f64 {
        self.spot
    }
}

/// FX spot quote, units of quote currency per unit of base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct FxSpot {
    pair: String,
    spot: f64,
}

impl FxSpot {
    /// Construct a quote for `pair` (e.g. "EURUSD"); `spot` must be positive and finite.
    pub fn new(pair: impl Into<String>, spot: f64) -> Result<Self, MarketDataError> {
        let pair = pair.into();
        validate_quote(&pair, spot)?;
        Ok(Self { pair, spot })
    }

    /// Currency pair code.
    pub fn pair(&self) -> &str {
        &self.pair
    }

    /// Spot rate.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Rate for the inverted pair.
    pub fn inverse(&self) -> f64 {
        1.0 / self.spot
    }
}

/// Registry of named market data.
///
/// Re-registering a name replaces the previous entry.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::{EquitySpot, MarketData};
/// use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
///
/// let mut market = MarketData::new();
/// market.add_yield_curve("USD", InterpolatedCurve::new(&[1.0, 5.0], &[0.03, 0.04]).unwrap());
/// market.add_equity_spot(EquitySpot::new("ACME", 100.0).unwrap());
///
/// let curve = market.require_yield_curve("USD").unwrap();
/// assert!((curve.zero_rate(1.0) - 0.03).abs() < 1e-12);
/// assert!(market.require_yield_curve("EUR").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarketData {
    curves: HashMap<String, Arc<InterpolatedCurve<f64>>>,
    surfaces: HashMap<String, Arc<InterpolatedVolSurface<f64>>>,
    equity_spots: HashMap<String, EquitySpot>,
    fx_spots: HashMap<String, FxSpot>,
}

impl MarketData {
    /// Empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a yield curve and return the shared handle.
    pub fn add_yield_curve(
        &mut self,
        name: impl Into<String>,
        curve: InterpolatedCurve<f64>,
    ) -> Arc<InterpolatedCurve<f64>> {
        let curve = Arc::new(curve);
        self.curves.insert(name.into(), Arc::clone(&curve));
        curve
    }

    /// Register a volatility surface and return the shared handle.
    pub fn add_vol_surface(
        &mut self,
        name: impl Into<String>,
        surface: InterpolatedVolSurface<f64>,
    ) -> Arc<InterpolatedVolSurface<f64>> {
        let surface = Arc::new(surface);
        self.surfaces.insert(name.into(), Arc::clone(&surface));
        surface
    }

    /// Register an equity spot quote under its ticker.
    pub fn add_equity_spot(&mut self, quote: EquitySpot) {
        self.equity_spots.insert(quote.ticker.clone(), quote);
    }

    /// Register an FX spot quote under its pair code.
    pub fn add_fx_spot(&mut self, quote: FxSpot) {
        self.fx_spots.insert(quote.pair.clone(), quote);
    }

    /// Look up a yield curve.
    pub fn yield_curve(&self, name: &str) -> Option<Arc<InterpolatedCurve<f64>>> {
        self.curves.get(name).cloned()
    }

    /// Look up a volatility surface.
    pub fn vol_surface(&self, name: &str) -> Option<Arc<InterpolatedVolSurface<f64>>> {
        self.surfaces.get(name).cloned()
    }

    /// Look up an equity spot quote.
    pub fn equity_spot(&self, ticker: &str) -> Option<&EquitySpot> {
        self.equity_spots.get(ticker)
    }

    /// Look up an FX spot quote.
    pub fn fx_spot(&self, pair: &str) -> Option<&FxSpot> {
        self.fx_spots.get(pair)
    }

    /// Yield curve lookup failing with `MarketDataError::Missing`.
    pub fn require_yield_curve(
        &self,
        name: &str,
    ) -> Result<Arc<InterpolatedCurve<f64>>, MarketDataError> {
        self.yield_curve(name).ok_or_else(|| missing("yield curve", name))
    }

    /// Volatility surface lookup failing with `MarketDataError::Missing`.
    pub fn require_vol_surface(
        &self,
        name: &str,
    ) -> Result<Arc<InterpolatedVolSurface<f64>>, MarketDataError> {
        self.vol_surface(name).ok_or_else(|| missing("vol surface", name))
    }

    /// Equity spot lookup failing with `MarketDataError::Missing`.
    pub fn require_equity_spot(&self, ticker: &str) -> Result<&EquitySpot, MarketDataError> {
        self.equity_spot(ticker)
            .ok_or_else(|| missing("equity spot", ticker))
    }

    /// FX spot lookup failing with `MarketDataError::Missing`.
    pub fn require_fx_spot(&self, pair: &str) -> Result<&FxSpot, MarketDataError> {
        self.fx_spot(pair).ok_or_else(|| missing("fx spot", pair))
    }

    /// Registered curve names, sorted.
    pub fn curve_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.curves.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered surface names, sorted.
    pub fn surface_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.surfaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn missing(kind: &'static str, name: &str) -> MarketDataError {
    MarketDataError::Missing {
        kind,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::YieldCurve;
    use crate::market_data::surfaces::VolatilitySurface;

    fn curve(rate: f64) -> InterpolatedCurve<f64> {
        InterpolatedCurve::new(&[1.0], &[rate]).unwrap()
    }

    // ========================================
    // Quotes
    // ========================================

    #[test]
    fn test_equity_spot_rejects_non_positive() {
        assert!(EquitySpot::new("ACME", 0.0).is_err());
        assert!(EquitySpot::new("ACME", -5.0).is_err());
        assert!(EquitySpot::new("ACME", f64::NAN).is_err());
    }

    #[test]
    fn test_fx_spot_inverse() {
        let quote = FxSpot::new("EURUSD", 1.25).unwrap();
        assert_eq!(quote.pair(), "EURUSD");
        assert!((quote.inverse() - 0.8).abs() < 1e-12);
    }

    // ========================================
    // Registry
    // ========================================

    #[test]
    fn test_add_and_lookup_curve_shares_handle() {
        let mut market = MarketData::new();
        let handle = market.add_yield_curve("USD", curve(0.03));
        let looked_up = market.yield_curve("USD").unwrap();
        assert!(Arc::ptr_eq(&handle, &looked_up));
        assert_eq!(looked_up.zero_rate(2.0), 0.03);
    }

    #[test]
    fn test_replace_curve() {
        let mut market = MarketData::new();
        market.add_yield_curve("USD", curve(0.03));
        market.add_yield_curve("USD", curve(0.04));
        assert_eq!(market.require_yield_curve("USD").unwrap().zero_rate(1.0), 0.04);
        assert_eq!(market.curve_names(), vec!["USD"]);
    }

    #[test]
    fn test_surface_lookup() {
        let mut market = MarketData::new();
        let surface = InterpolatedVolSurface::new(&[100.0], &[1.0], &[vec![0.2]]).unwrap();
        market.add_vol_surface("ACME", surface);
        assert_eq!(market.require_vol_surface("ACME").unwrap().volatility(90.0, 2.0), 0.2);
        assert_eq!(market.surface_names(), vec!["ACME"]);
    }

    #[test]
    fn test_require_missing() {
        let market = MarketData::new();
        assert_eq!(
            market.require_vol_surface("SPX").unwrap_err(),
            MarketDataError::Missing {
                kind: "vol surface",
                name: "SPX".to_string()
            }
        );
        assert!(market.require_equity_spot("ACME").is_err());
        assert!(market.require_fx_spot("EURUSD").is_err());
    }

    #[test]
    fn test_spot_lookups() {
        let mut market = MarketData::new();
        market.add_equity_spot(EquitySpot::new("ACME", 101.5).unwrap());
        market.add_fx_spot(FxSpot::new("USDJPY", 150.0).unwrap());
        assert_eq!(market.require_equity_spot("ACME").unwrap().spot(), 101.5);
        assert_eq!(market.fx_spot("USDJPY").map(FxSpot::spot), Some(150.0));
    }
}
