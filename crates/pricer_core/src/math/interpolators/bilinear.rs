//! Bilinear 2D interpolation for surfaces.

use super::{bracket, validate_axis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator for 2D grid data.
///
/// Stores a grid `zs[i][j] = z(xs[i], ys[j])` and interpolates bilinearly
/// on the cell enclosing the query. Queries outside the grid are clamped
/// to the nearest edge, so there is never an extrapolation slope. Either
/// axis may hold a single point.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::BilinearInterpolator;
///
/// let xs = [0.0, 1.0];
/// let ys = [0.0, 1.0];
/// let zs = [vec![0.0, 1.0], vec![2.0, 3.0]];
///
/// let interp: BilinearInterpolator<f64> = BilinearInterpolator::new(&xs, &ys, &zs).unwrap();
/// assert!((interp.interpolate(0.5, 0.5) - 1.5).abs() < 1e-12);
/// assert_eq!(interp.interpolate(5.0, 5.0), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearInterpolator<T: Float> {
    /// X-axis coordinates (rows)
    xs: Vec<T>,
    /// Y-axis coordinates (columns)
    ys: Vec<T>,
    /// Grid values: zs[i][j] = z(xs[i], ys[j])
    zs: Vec<Vec<T>>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Construct a bilinear interpolator from grid data.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly increasing row coordinates (at least one)
    /// * `ys` - Strictly increasing column coordinates (at least one)
    /// * `zs` - One row per x-coordinate, each with one value per y-coordinate
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - An axis is empty
    /// * `Err(InterpolationError::NonIncreasing)` - An axis is not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Grid shape does not match the axes
    pub fn new<R: AsRef<[T]>>(xs: &[T], ys: &[T], zs: &[R]) -> Result<Self, InterpolationError> {
        validate_axis(xs)?;
        validate_axis(ys)?;

        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid rows ({}) must match x-axis length ({})",
                zs.len(),
                xs.len()
            )));
        }

        for (i, row) in zs.iter().enumerate() {
            if row.as_ref().len() != ys.len() {
                return Err(InterpolationError::InvalidInput(format!(
                    "Grid row {} length ({}) must match y-axis length ({})",
                    i,
                    row.as_ref().len(),
                    ys.len()
                )));
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.iter().map(|row| row.as_ref().to_vec()).collect(),
        })
    }

    /// Interpolate value at point (x, y).
    ///
    /// ```text
    /// z = (1-u)(1-v)*z00 + u*(1-v)*z10 + (1-u)*v*z01 + u*v*z11
    /// ```
    ///
    /// where `u` and `v` are the normalised coordinates within the
    /// enclosing cell, both zero along a clamped or single-point axis.
    pub fn interpolate(&self, x: T, y: T) -> T {
        let (i0, i1, u) = bracket(&self.xs, x);
        let (j0, j1, v) = bracket(&self.ys, y);

        let one = T::one();
        (one - u) * (one - v) * self.zs[i0][j0]
            + u * (one - v) * self.zs[i1][j0]
            + (one - u) * v * self.zs[i0][j1]
            + u * v * self.zs[i1][j1]
    }

    /// Row coordinate range.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Column coordinate range.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    /// Row coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Column coordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Grid values, one row per x-coordinate.
    #[inline]
    pub fn zs(&self) -> &[Vec<T>] {
        &self.zs
    }

    /// Returns a copy with every grid value mapped through `f`.
    pub fn map_values<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            xs: self.xs.clone(),
            ys: self.ys.clone(),
            zs: self
                .zs
                .iter()
                .map(|row| row.iter().map(|&z| f(z)).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> BilinearInterpolator<f64> {
        let xs = [80.0, 100.0, 120.0];
        let ys = [0.5, 1.0];
        let zs = [vec![0.25, 0.24], vec![0.20, 0.21], vec![0.22, 0.23]];
        BilinearInterpolator::new(&xs, &ys, &zs).unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_row_count_mismatch() {
        let zs = [vec![0.2, 0.2]];
        let result = BilinearInterpolator::new(&[1.0, 2.0], &[1.0, 2.0], &zs);
        assert!(matches!(result, Err(InterpolationError::InvalidInput(_))));
    }

    #[test]
    fn test_new_row_length_mismatch() {
        let zs = [vec![0.2, 0.2], vec![0.2]];
        let result = BilinearInterpolator::new(&[1.0, 2.0], &[1.0, 2.0], &zs);
        match result {
            Err(InterpolationError::InvalidInput(msg)) => assert!(msg.contains("row 1")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_accepts_slices_of_slices() {
        let zs = [&[1.0, 2.0][..], &[3.0, 4.0][..]];
        assert!(BilinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], &zs).is_ok());
    }

    // ========================================
    // Interpolation
    // ========================================

    #[test]
    fn test_exact_at_nodes() {
        let interp = sample();
        assert_eq!(interp.interpolate(80.0, 0.5), 0.25);
        assert_eq!(interp.interpolate(100.0, 1.0), 0.21);
        assert_eq!(interp.interpolate(120.0, 1.0), 0.23);
    }

    #[test]
    fn test_cell_centre() {
        let interp = sample();
        let expected = 0.25 * (0.25 + 0.24 + 0.20 + 0.21);
        assert_relative_eq!(interp.interpolate(90.0, 0.75), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_clamped_outside_grid() {
        let interp = sample();
        assert_eq!(interp.interpolate(10.0, 0.1), 0.25);
        assert_eq!(interp.interpolate(500.0, 9.0), 0.23);
        // Clamped on one axis, interpolated on the other
        assert_relative_eq!(interp.interpolate(110.0, 5.0), 0.22, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_axis() {
        let zs = [vec![0.18, 0.22]];
        let interp = BilinearInterpolator::new(&[100.0], &[1.0, 2.0], &zs).unwrap();
        assert_relative_eq!(interp.interpolate(50.0, 1.5), 0.20, epsilon = 1e-12);
    }

    #[test]
    fn test_map_values() {
        let scaled = sample().map_values(|z| z * 2.0);
        assert_eq!(scaled.interpolate(80.0, 0.5), 0.5);
    }
}
