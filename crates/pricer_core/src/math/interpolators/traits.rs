//! Interpolator trait definition.

use num_traits::Float;

/// One-dimensional interpolation over a fixed set of knots.
///
/// Knots are validated once at construction, so queries cannot fail.
/// Implementations decide their own extrapolation policy and document it.
pub trait Interpolator<T: Float> {
    /// Interpolated value at `x`.
    fn interpolate(&self, x: T) -> T;

    /// The knot range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
