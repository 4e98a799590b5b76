//! Yield curve trait definition.

use num_traits::Float;

/// Generic yield curve for discount factor and rate queries.
///
/// Implementations are generic over `T: Float` so the same curve runs with
/// `f64` and with dual numbers. Queries are pure and infallible; any
/// validation happens when the curve is built.
///
/// # Contract
///
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
/// - `discount_factor(t)` returns `exp(-r(t) * t)`
/// - `forward_rate(t1, t2)` returns `ln(D(t1) / D(t2)) / (t2 - t1)`, and
///   exactly zero when `t2 <= t1`
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// assert!((curve.discount_factor(1.0) - 0.951229).abs() < 1e-6);
/// assert!((curve.forward_rate(1.0, 2.0) - 0.05).abs() < 1e-12);
/// assert_eq!(curve.forward_rate(2.0, 1.0), 0.0);
/// ```
pub trait YieldCurve<T: Float> {
    /// Continuously compounded zero rate for maturity `t` (years).
    fn zero_rate(&self, t: T) -> T;

    /// Discount factor for maturity `t` (years).
    ///
    /// ```text
    /// D(t) = exp(-r(t) * t)
    /// ```
    fn discount_factor(&self, t: T) -> T {
        (-self.zero_rate(t) * t).exp()
    }

    /// Continuously compounded forward rate between `t1` and `t2`.
    ///
    /// ```text
    /// f(t1, t2) = ln(D(t1) / D(t2)) / (t2 - t1)
    /// ```
    ///
    /// Returns zero for an empty or reversed interval.
    fn forward_rate(&self, t1: T, t2: T) -> T {
        if t2 <= t1 {
            return T::zero();
        }
        let df1 = self.discount_factor(t1);
        let df2 = self.discount_factor(t2);
        (df1 / df2).ln() / (t2 - t1)
    }
}
