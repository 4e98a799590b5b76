//! Flat volatility surface implementation.

use super::VolatilitySurface;
use num_traits::Float;

/// Flat volatility surface with constant implied volatility.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{FlatVol, VolatilitySurface};
///
/// let surface = FlatVol::new(0.25_f64);
/// assert_eq!(surface.volatility(80.0, 0.5), 0.25);
/// assert_eq!(surface.volatility(120.0, 5.0), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    /// The constant implied volatility
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat surface with volatility `sigma`.
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
    #[inline]
    fn volatility(&self, _strike: T, _tenor: T) -> T {
        self.sigma
    }

    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn tenor_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
