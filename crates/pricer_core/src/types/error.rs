//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The error surfaced by every valuation call
//! - `DateError`: Errors from date construction and parsing
//! - `InterpolationError`: Errors from interpolator construction
//!
//! `PricingError` separates two failure families callers care about:
//! bad input data ([`PricingError::is_data_error`]) and an engine invoked
//! on an instrument it cannot value ([`PricingError::is_pairing_error`]).

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure of a valuation call is terminal and surfaces as one of
/// these variants. Degenerate numeric regimes (zero maturity, zero
/// volatility) are not errors; they price to zero.
///
/// # Variants
/// - `InvalidInput`: Malformed market data, parameters or configuration
/// - `UnsupportedInstrument`: Engine/instrument pairing not supported
/// - `NumericalInstability`: Computation produced a non-finite value
/// - `ModelFailure`: Model assumptions violated
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// assert!(err.is_data_error());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Instrument type not supported by the engine
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce valid result
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

impl PricingError {
    /// Returns `true` for failures caused by bad input data.
    #[inline]
    pub fn is_data_error(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }

    /// Returns `true` when an engine was invoked on an instrument variant
    /// it does not support.
    #[inline]
    pub fn is_pairing_error(&self) -> bool {
        matches!(self, PricingError::UnsupportedInstrument(_))
    }
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Invalid time-of-day components.
    #[error("Invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour component (0-23)
        hour: u32,
        /// Minute component (0-59)
        minute: u32,
        /// Second component (0-59)
        second: u32,
    },

    /// Date arithmetic left the representable range.
    #[error("Date arithmetic overflow: {0}")]
    Overflow(String),

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Interpolation-related errors.
///
/// Interpolators validate their knots once at construction; queries are
/// infallible afterwards.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 0, need: 1 };
/// assert!(format!("{}", err).contains("need at least 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissa and ordinate lengths differ.
    #[error("Length mismatch: {xs} abscissae but {ys} values")]
    LengthMismatch {
        /// Number of abscissae
        xs: usize,
        /// Number of values
        ys: usize,
    },

    /// Abscissae are not strictly increasing.
    #[error("Abscissae must be strictly increasing (violated at index {index})")]
    NonIncreasing {
        /// First index whose abscissa is not above its predecessor
        index: usize,
    },

    /// General invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PricingError {
    fn from(err: InterpolationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
