//! Curve analytics helpers.
//!
//! Thin functions over [`YieldCurve`] used for reporting term structures.

use super::curves::YieldCurve;
use num_traits::Float;

/// Zero rate at each of `times`.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::InterpolatedCurve;
/// use pricer_core::market_data::tools::spot_rates;
///
/// let curve: InterpolatedCurve<f64> = InterpolatedCurve::new(&[1.0, 3.0], &[0.02, 0.04]).unwrap();
/// let rates = spot_rates(&curve, &[1.0, 2.0, 3.0]);
/// assert!((rates[1] - 0.03).abs() < 1e-12);
/// ```
pub fn spot_rates<T, C>(curve: &C, times: &[T]) -> Vec<T>
where
    T: Float,
    C: YieldCurve<T> + ?Sized,
{
    times.iter().map(|&t| curve.zero_rate(t)).collect()
}

/// Forward rate over each consecutive pair of `times`.
///
/// Returns `times.len() - 1` rates, or none when fewer than two times are
/// given.
pub fn forward_rates<T, C>(curve: &C, times: &[T]) -> Vec<T>
where
    T: Float,
    C: YieldCurve<T> + ?Sized,
{
    times
        .windows(2)
        .map(|w| curve.forward_rate(w[0], w[1]))
        .collect()
}

/// Zero rate of `funding` minus zero rate of `base` at `t`.
pub fn funding_spread<T, A, B>(base: &A, funding: &B, t: T) -> T
where
    T: Float,
    A: YieldCurve<T> + ?Sized,
    B: YieldCurve<T> + ?Sized,
{
    funding.zero_rate(t) - base.zero_rate(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::{FlatCurve, InterpolatedCurve};
    use approx::assert_relative_eq;

    #[test]
    fn test_spot_rates() {
        let curve = FlatCurve::new(0.03_f64);
        assert_eq!(spot_rates(&curve, &[0.5, 1.0, 10.0]), vec![0.03, 0.03, 0.03]);
        assert!(spot_rates::<f64, _>(&curve, &[]).is_empty());
    }

    #[test]
    fn test_forward_rates_pairs() {
        let curve = InterpolatedCurve::new(&[1.0, 2.0, 3.0], &[0.02, 0.03, 0.035]).unwrap();
        let fwds = forward_rates(&curve, &[1.0, 2.0, 3.0]);
        assert_eq!(fwds.len(), 2);
        assert_relative_eq!(fwds[0], 0.04, epsilon = 1e-12);
        assert_relative_eq!(fwds[1], 0.045, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rates_short_input() {
        let curve = FlatCurve::new(0.03_f64);
        assert!(forward_rates(&curve, &[1.0]).is_empty());
    }

    #[test]
    fn test_funding_spread() {
        let ois = FlatCurve::new(0.03_f64);
        let funding = FlatCurve::new(0.0375_f64);
        assert_relative_eq!(funding_spread(&ois, &funding, 5.0), 0.0075, epsilon = 1e-15);
    }

    #[test]
    fn test_trait_objects() {
        let a: &dyn YieldCurve<f64> = &FlatCurve::new(0.01);
        let b: &dyn YieldCurve<f64> = &FlatCurve::new(0.02);
        assert_relative_eq!(funding_spread(a, b, 1.0), 0.01, epsilon = 1e-15);
    }
}
