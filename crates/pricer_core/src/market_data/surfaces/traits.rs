//! Volatility surface trait definition.

use num_traits::Float;

/// Generic volatility surface for implied volatility lookup.
///
/// Lookups are infallible: interpolated surfaces clamp queries to their
/// grid, so any strike and tenor yields a volatility.
///
/// # Contract
///
/// - `volatility(strike, tenor)` returns the implied volatility σ(K, T)
/// - `strike_domain()` and `tenor_domain()` return the grid bounds, or
///   the whole positive axis for surfaces without a grid
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{FlatVol, VolatilitySurface};
///
/// let surface = FlatVol::new(0.2_f64);
/// assert_eq!(surface.volatility(100.0, 1.0), 0.2);
/// ```
pub trait VolatilitySurface<T: Float> {
    /// Implied volatility for `strike` and `tenor` (years).
    fn volatility(&self, strike: T, tenor: T) -> T;

    /// Strike range `(min, max)`.
    fn strike_domain(&self) -> (T, T);

    /// Tenor range `(min, max)` in years.
    fn tenor_domain(&self) -> (T, T);
}
