//! Interpolated yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use num_traits::Float;

/// Zero-rate curve built from (time, rate) pillars.
///
/// Zero rates are interpolated linearly between pillars and held flat
/// beyond the first and last pillar. A single pillar gives a flat curve.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
///
/// let curve: InterpolatedCurve<f64> = InterpolatedCurve::new(&[1.0, 2.0], &[0.02, 0.03]).unwrap();
///
/// assert!((curve.zero_rate(1.5) - 0.025).abs() < 1e-12);
/// assert_eq!(curve.zero_rate(10.0), 0.03);
/// assert!((curve.discount_factor(1.0) - (-0.02_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve<T: Float> {
    /// Pillar times (years) and zero rates
    interp: LinearInterpolator<T>,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct a curve from pillar times and zero rates.
    ///
    /// # Arguments
    ///
    /// * `times` - Strictly increasing pillar times in years (at least one)
    /// * `rates` - Continuously compounded zero rate at each pillar
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::Interpolation)` - Empty, mismatched or unsorted pillars
    pub fn new(times: &[T], rates: &[T]) -> Result<Self, MarketDataError> {
        let interp = LinearInterpolator::new(times, rates)?;
        Ok(Self { interp })
    }

    /// Pillar times in years.
    #[inline]
    pub fn times(&self) -> &[T] {
        self.interp.xs()
    }

    /// Zero rate at each pillar.
    #[inline]
    pub fn zero_rates(&self) -> &[T] {
        self.interp.ys()
    }

    /// Number of pillars.
    #[inline]
    pub fn len(&self) -> usize {
        self.interp.len()
    }

    /// Always `false` for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interp.is_empty()
    }

    /// New curve with `shift` added to every pillar rate.
    ///
    /// `shift` is an absolute rate (0.0001 is one basis point).
    pub fn shifted(&self, shift: T) -> Self {
        Self {
            interp: self.interp.map_values(|r| r + shift),
        }
    }
}

impl InterpolatedCurve<f64> {
    /// New curve with every pillar rate moved by `bp` basis points.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::InterpolatedCurve;
    ///
    /// let curve = InterpolatedCurve::new(&[1.0, 5.0], &[0.02, 0.03]).unwrap();
    /// let bumped = curve.parallel_shift(100.0);
    ///
    /// assert!((bumped.zero_rates()[0] - 0.03).abs() < 1e-12);
    /// assert_eq!(curve.zero_rates()[0], 0.02);
    /// ```
    pub fn parallel_shift(&self, bp: f64) -> Self {
        self.shifted(bp / 10_000.0)
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    #[inline]
    fn zero_rate(&self, t: T) -> T {
        self.interp.interpolate(t)
    }
}
