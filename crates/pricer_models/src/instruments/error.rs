//! Instrument error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument valuation errors.
///
/// Both variants are data errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::ZeroAnnuity;
/// assert!(format!("{}", err).contains("annuity"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// Swap valued without a bound discount curve.
    #[error("Swap has no discount curve bound")]
    MissingDiscountCurve,

    /// Fixed leg annuity is exactly zero, so no fair rate exists.
    #[error("Zero annuity in fair rate computation")]
    ZeroAnnuity,
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = InstrumentError::MissingDiscountCurve.into();
        assert!(err.is_data_error());
        assert!(err.to_string().contains("discount curve"));
    }
}
