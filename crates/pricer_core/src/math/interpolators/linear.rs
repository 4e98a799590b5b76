//! Linear interpolation implementation.

use super::{bracket, validate_axis, Interpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator with flat extrapolation.
///
/// Stores strictly increasing knots and interpolates linearly between
/// adjacent knots. Below the first knot the first value is returned, above
/// the last knot the last value; a single knot gives a constant function.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp: LinearInterpolator<f64> = LinearInterpolator::new(&[1.0, 2.0, 3.0], &[0.02, 0.03, 0.035]).unwrap();
/// assert_eq!(interp.domain(), (1.0, 3.0));
/// assert!((interp.interpolate(1.5) - 0.025).abs() < 1e-12);
/// assert_eq!(interp.interpolate(0.5), 0.02);
/// assert_eq!(interp.interpolate(5.0), 0.035);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from knots.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly increasing x-coordinates (at least one)
    /// * `ys` - Values at each x-coordinate
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
    /// * `Err(InterpolationError::InsufficientData)` - No knots
    /// * `Err(InterpolationError::NonIncreasing)` - `xs` not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        validate_axis(xs)?;

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false` for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns a copy with every value mapped through `f`.
    pub fn map_values<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            xs: self.xs.clone(),
            ys: self.ys.iter().map(|&y| f(y)).collect(),
        }
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Piecewise linear value at `x`, flat outside the knot range.
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    #[inline]
    fn interpolate(&self, x: T) -> T {
        let (lo, hi, w) = bracket(&self.xs, x);
        self.ys[lo] + (self.ys[hi] - self.ys[lo]) * w
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
