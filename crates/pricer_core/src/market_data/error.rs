//! Market data error types.
//!
//! Every variant is a data error: it converts into
//! [`PricingError::InvalidInput`](crate::types::PricingError::InvalidInput).

use crate::types::{InterpolationError, PricingError};
use thiserror::Error;

/// Market data construction and lookup errors.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::RowCountMismatch { rows: 2, strikes: 3 };
/// assert!(format!("{}", err).contains("2 rows"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Pillar or axis validation failed.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Volatility grid row count differs from the strike count.
    #[error("Volatility grid has {rows} rows but {strikes} strikes")]
    RowCountMismatch {
        /// Number of grid rows
        rows: usize,
        /// Number of strikes
        strikes: usize,
    },

    /// A volatility grid row length differs from the tenor count.
    #[error("Volatility grid row {row} has {len} entries but {tenors} tenors")]
    RowLengthMismatch {
        /// Offending row index
        row: usize,
        /// Length of that row
        len: usize,
        /// Number of tenors
        tenors: usize,
    },

    /// Spot quote is not a positive finite number.
    #[error("Invalid quote for {name}: {value}")]
    InvalidQuote {
        /// Ticker or currency pair
        name: String,
        /// The rejected value
        value: f64,
    },

    /// Named market object is not registered.
    #[error("Missing {kind}: {name}")]
    Missing {
        /// Object kind ("yield curve", "vol surface", ...)
        kind: &'static str,
        /// Requested name
        name: String,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
