//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// Going through `erfc` keeps full relative accuracy deep in the left tail,
/// where `1 - Φ(-x)` would cancel.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96) - 0.975).abs() < 1e-4);
/// assert!(norm_cdf(-40.0) >= 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
/// assert_eq!(norm_pdf(1.5), norm_pdf(-1.5));
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.158_655_253_931_457_05, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.5), 0.993_790_334_674_223_7, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1, 0.7, 1.3, 3.2] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        assert!(norm_cdf(-10.0) > 0.0);
        assert!(norm_cdf(-10.0) < 1e-22);
        assert_eq!(norm_cdf(40.0), 1.0);
    }

    #[test]
    fn test_norm_pdf_matches_cdf_slope() {
        let h = 1e-5;
        for &x in &[-1.2, 0.0, 0.4, 2.0] {
            let slope = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(slope, norm_pdf(x), epsilon = 1e-8);
        }
    }
}
