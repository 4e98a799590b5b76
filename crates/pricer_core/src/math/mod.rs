//! Numerical building blocks.
//!
//! - [`interpolators`]: Linear and bilinear interpolation over validated knots

pub mod interpolators;
