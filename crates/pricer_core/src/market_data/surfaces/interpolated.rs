//! Interpolated volatility surface implementation.

use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::BilinearInterpolator;
use num_traits::Float;

/// Strike by tenor volatility grid with bilinear interpolation.
///
/// # Grid Layout
///
/// The grid is organised as `vols[strike_idx][tenor_idx]`:
/// - Rows correspond to strikes
/// - Columns correspond to tenors within each row
///
/// Queries outside the grid are clamped to the nearest edge.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{InterpolatedVolSurface, VolatilitySurface};
///
/// let strikes = [90.0, 100.0, 110.0];
/// let tenors = [0.5, 1.0];
/// let vols = [
///     vec![0.24, 0.23], // K = 90
///     vec![0.20, 0.21], // K = 100
///     vec![0.22, 0.22], // K = 110
/// ];
///
/// let surface: InterpolatedVolSurface<f64> = InterpolatedVolSurface::new(&strikes, &tenors, &vols).unwrap();
/// assert_eq!(surface.volatility(100.0, 0.5), 0.20);
/// assert!((surface.volatility(95.0, 0.5) - 0.22).abs() < 1e-12);
/// assert_eq!(surface.volatility(150.0, 3.0), 0.22);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedVolSurface<T: Float> {
    /// xs = strikes, ys = tenors
    grid: BilinearInterpolator<T>,
}

impl<T: Float> InterpolatedVolSurface<T> {
    /// Construct a surface from grid data.
    ///
    /// # Arguments
    ///
    /// * `strikes` - Strictly increasing strikes (at least one)
    /// * `tenors` - Strictly increasing tenors in years (at least one)
    /// * `vols` - One row per strike, one entry per tenor
    ///
    /// # Returns
    ///
    /// * `Err(MarketDataError::RowCountMismatch)` - Row count differs from strike count
    /// * `Err(MarketDataError::RowLengthMismatch)` - A row length differs from tenor count
    /// * `Err(MarketDataError::Interpolation)` - An axis is empty or unsorted
    pub fn new<R: AsRef<[T]>>(
        strikes: &[T],
        tenors: &[T],
        vols: &[R],
    ) -> Result<Self, MarketDataError> {
        if vols.len() != strikes.len() {
            return Err(MarketDataError::RowCountMismatch {
                rows: vols.len(),
                strikes: strikes.len(),
            });
        }
        if let Some((row, r)) = vols
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != tenors.len())
        {
            return Err(MarketDataError::RowLengthMismatch {
                row,
                len: r.as_ref().len(),
                tenors: tenors.len(),
            });
        }

        let grid = BilinearInterpolator::new(strikes, tenors, vols)?;
        Ok(Self { grid })
    }

    /// Grid strikes.
    #[inline]
    pub fn strikes(&self) -> &[T] {
        self.grid.xs()
    }

    /// Grid tenors.
    #[inline]
    pub fn tenors(&self) -> &[T] {
        self.grid.ys()
    }

    /// Volatility grid, `vols()[strike_idx][tenor_idx]`.
    #[inline]
    pub fn vols(&self) -> &[Vec<T>] {
        self.grid.zs()
    }

    /// New surface with every grid volatility multiplied by `factor`.
    ///
    /// A relative shock of +10% is `scaled(1.1)`.
    pub fn scaled(&self, factor: T) -> Self {
        Self {
            grid: self.grid.map_values(|v| v * factor),
        }
    }
}

impl<T: Float> VolatilitySurface<T> for InterpolatedVolSurface<T> {
    #[inline]
    fn volatility(&self, strike: T, tenor: T) -> T {
        self.grid.interpolate(strike, tenor)
    }

    fn strike_domain(&self) -> (T, T) {
        self.grid.domain_x()
    }

    fn tenor_domain(&self) -> (T, T) {
        self.grid.domain_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InterpolationError;
    use approx::assert_relative_eq;

    fn sample() -> InterpolatedVolSurface<f64> {
        let strikes = [80.0, 100.0, 120.0];
        let tenors = [0.25, 1.0, 2.0];
        let vols = [
            vec![0.28, 0.26, 0.25],
            vec![0.22, 0.21, 0.20],
            vec![0.24, 0.23, 0.22],
        ];
        InterpolatedVolSurface::new(&strikes, &tenors, &vols).unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_row_count_mismatch() {
        let vols = [vec![0.2, 0.2]];
        let result = InterpolatedVolSurface::new(&[90.0, 100.0], &[0.5, 1.0], &vols);
        assert_eq!(
            result.unwrap_err(),
            MarketDataError::RowCountMismatch { rows: 1, strikes: 2 }
        );
    }

    #[test]
    fn test_new_row_length_mismatch() {
        let vols = [vec![0.2, 0.2], vec![0.2]];
        let result = InterpolatedVolSurface::new(&[90.0, 100.0], &[0.5, 1.0], &vols);
        assert_eq!(
            result.unwrap_err(),
            MarketDataError::RowLengthMismatch {
                row: 1,
                len: 1,
                tenors: 2
            }
        );
    }

    #[test]
    fn test_new_unsorted_tenors() {
        let vols = [vec![0.2, 0.2]];
        let result = InterpolatedVolSurface::new(&[100.0], &[1.0, 0.5], &vols);
        assert!(matches!(
            result,
            Err(MarketDataError::Interpolation(InterpolationError::NonIncreasing { index: 1 }))
        ));
    }

    #[test]
    fn test_new_empty_axes() {
        let vols: [Vec<f64>; 0] = [];
        let result = InterpolatedVolSurface::new(&[], &[1.0], &vols);
        assert!(matches!(result, Err(MarketDataError::Interpolation(_))));
    }

    // ========================================
    // Lookups
    // ========================================

    #[test]
    fn test_exact_at_nodes() {
        let surface = sample();
        for (i, &k) in surface.strikes().iter().enumerate() {
            for (j, &t) in surface.tenors().iter().enumerate() {
                assert_eq!(surface.volatility(k, t), surface.vols()[i][j]);
            }
        }
    }

    #[test]
    fn test_interpolated_between_nodes() {
        let surface = sample();
        // Midway in strike between 80 and 100 at tenor 1.0
        assert_relative_eq!(surface.volatility(90.0, 1.0), 0.235, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_outside_grid() {
        let surface = sample();
        assert_eq!(surface.volatility(10.0, 0.01), 0.28);
        assert_eq!(surface.volatility(500.0, 30.0), 0.22);
    }

    #[test]
    fn test_domains() {
        let surface = sample();
        assert_eq!(surface.strike_domain(), (80.0, 120.0));
        assert_eq!(surface.tenor_domain(), (0.25, 2.0));
    }

    #[test]
    fn test_scaled() {
        let surface = sample();
        let up = surface.scaled(1.1);
        assert_relative_eq!(up.volatility(100.0, 1.0), 0.231, epsilon = 1e-12);
        assert_eq!(surface.volatility(100.0, 1.0), 0.21);
    }
}
