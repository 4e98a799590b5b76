//! Interpolation methods for term structures.
//!
//! All interpolators are generic over `T: num_traits::Float`, so the same
//! code runs with `f64` and with dual numbers for sensitivity checks.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear, flat outside the knots
//! - [`BilinearInterpolator`]: 2D grid interpolation, clamped to the grid
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let interp: LinearInterpolator<f64> = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
//! assert!((interp.interpolate(1.5) - 2.5).abs() < 1e-12);
//! assert_eq!(interp.interpolate(10.0), 4.0);
//! ```

mod bilinear;
mod linear;
mod traits;


pub use bilinear::BilinearInterpolator;
pub use linear::LinearInterpolator;
pub use traits::Interpolator;

use crate::types::InterpolationError;
use num_traits::Float;

/// Checks that `axis` is non-empty and strictly increasing.
pub(crate) fn validate_axis<T: Float>(axis: &[T]) -> Result<(), InterpolationError> {
    if axis.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }
    if let Some(index) = (1..axis.len()).find(|&i| !(axis[i] > axis[i - 1])) {
        return Err(InterpolationError::NonIncreasing { index });
    }
    Ok(())
}

/// Locates `x` on a strictly increasing axis.
///
/// Returns `(lo, hi, w)` with the value at `x` equal to
/// `(1 - w) * f[lo] + w * f[hi]`. Queries outside the axis are clamped to
/// the nearest end, where `lo == hi` and `w == 0`.
#[inline]
pub(crate) fn bracket<T: Float>(axis: &[T], x: T) -> (usize, usize, T) {
    let n = axis.len();
    let pos = axis.partition_point(|&a| a <= x);
    if pos == 0 {
        (0, 0, T::zero())
    } else if pos >= n {
        (n - 1, n - 1, T::zero())
    } else {
        let (lo, hi) = (pos - 1, pos);
        let w = (x - axis[lo]) / (axis[hi] - axis[lo]);
        (lo, hi, w)
    }
}
