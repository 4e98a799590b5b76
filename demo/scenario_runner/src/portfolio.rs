//! Sample market data and trade book.
//!
//! Options are booked with flat inputs read off the market at their own
//! strike and maturity, so scenario shocks act on the option fields
//! directly. The swap is bound to the shared curve.

use crate::config::MarketConfig;
use pricer_core::market_data::{
    EquitySpot, InterpolatedCurve, InterpolatedVolSurface, MarketData, VolatilitySurface, YieldCurve,
};
use pricer_core::types::{Date, DayCountConvention, PricingError};
use pricer_models::instruments::{
    BarrierOption, BarrierType, EuropeanOption, Instrument, OptionType, SwapDirection, VanillaSwap,
};
use pricer_models::schedules::{Frequency, Schedule};

/// Name of the discount curve in the market container.
pub const CURVE_NAME: &str = "USD-OIS";
/// Name of the equity volatility surface.
pub const SURFACE_NAME: &str = "SPX";
/// Equity ticker.
pub const TICKER: &str = "SPX";

const OPTION_MATURITY: f64 = 1.0;
const SWAP_YEARS: u32 = 5;
const SWAP_NOTIONAL: f64 = 10_000_000.0;
const SWAP_FIXED_RATE: f64 = 0.038;

/// A labelled instrument in the book.
#[derive(Debug, Clone)]
pub struct Position {
    /// Display label
    pub label: &'static str,
    /// The trade
    pub instrument: Instrument,
}

/// Builds the market container from the configured quotes.
pub fn build_market(config: &MarketConfig) -> Result<MarketData, PricingError> {
    let mut market = MarketData::new();
    market.add_yield_curve(
        CURVE_NAME,
        InterpolatedCurve::new(&config.curve_times, &config.curve_rates)?,
    );
    market.add_vol_surface(
        SURFACE_NAME,
        InterpolatedVolSurface::new(
            &config.surface_strikes,
            &config.surface_tenors,
            &config.surface_vols,
        )?,
    );
    market.add_equity_spot(EquitySpot::new(TICKER, config.spot)?);
    Ok(market)
}

/// Call, put, up-and-out call and payer swap on the given market.
pub fn sample_book(
    market: &MarketData,
    valuation_date: Date,
    dividend: f64,
) -> Result<Vec<Position>, PricingError> {
    let curve = market.require_yield_curve(CURVE_NAME)?;
    let surface = market.require_vol_surface(SURFACE_NAME)?;
    let spot = market.require_equity_spot(TICKER)?.spot();

    let rate = curve.zero_rate(OPTION_MATURITY);
    let european = |option_type, strike: f64| {
        let vol = surface.volatility(strike, OPTION_MATURITY);
        EuropeanOption::new(option_type, spot, strike, OPTION_MATURITY, rate, vol, dividend)
    };

    let atm_vol = surface.volatility(spot, OPTION_MATURITY);
    let up_and_out = BarrierOption::new(
        BarrierType::UpAndOut,
        OptionType::Call,
        spot,
        spot,
        OPTION_MATURITY,
        rate,
        atm_vol,
        1.3 * spot,
    );

    let end = valuation_date.add_months(12 * SWAP_YEARS)?;
    let swap = VanillaSwap::new(
        SwapDirection::Payer,
        SWAP_NOTIONAL,
        SWAP_FIXED_RATE,
        Schedule::new(valuation_date, end, Frequency::Annual)?,
        Schedule::new(valuation_date, end, Frequency::Quarterly)?,
        DayCountConvention::Thirty360,
        DayCountConvention::Actual360,
    )
    .with_curve(curve);

    Ok(vec![
        Position {
            label: "1Y ATM call",
            instrument: european(OptionType::Call, spot).into(),
        },
        Position {
            label: "1Y 90% put",
            instrument: european(OptionType::Put, 0.9 * spot).into(),
        },
        Position {
            label: "1Y up-and-out call",
            instrument: up_and_out.into(),
        },
        Position {
            label: "5Y payer swap",
            instrument: swap.into(),
        },
    ])
}
