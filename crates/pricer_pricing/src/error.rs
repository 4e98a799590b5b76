//! Engine configuration errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised while constructing an engine.
///
/// # Examples
/// ```
/// use pricer_pricing::EngineError;
///
/// let err = EngineError::InvalidSteps(0);
/// assert!(err.to_string().contains("steps"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Lattice step count must be at least one.
    #[error("Invalid lattice steps {0}: must be at least 1")]
    InvalidSteps(usize),
}

impl From<EngineError> for PricingError {
    fn from(err: EngineError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            EngineError::InvalidSteps(0).to_string(),
            "Invalid lattice steps 0: must be at least 1"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = EngineError::InvalidSteps(0).into();
        assert!(err.is_data_error());
        assert!(!err.is_pairing_error());
    }
}
