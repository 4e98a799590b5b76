//! Flat yield curve implementation.

use super::YieldCurve;
use num_traits::Float;

/// Flat yield curve with constant interest rate.
///
/// The same continuously compounded rate applies to every maturity.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// // Discount factor at t=1: exp(-0.05)
/// assert!((curve.discount_factor(1.0) - 0.951229).abs() < 1e-5);
/// assert_eq!(curve.zero_rate(5.0), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// The constant interest rate
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given continuously compounded rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    #[inline]
    fn zero_rate(&self, _t: T) -> T {
        self.rate
    }

    /// Forward rate on a flat curve is the curve rate itself.
    #[inline]
    fn forward_rate(&self, t1: T, t2: T) -> T {
        if t2 <= t1 {
            T::zero()
        } else {
            self.rate
        }
    }
}
