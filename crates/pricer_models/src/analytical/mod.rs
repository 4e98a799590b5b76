//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes with a continuous dividend yield
//! - Black-76 on a forward, used by the SABR engine
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Total functions**: degenerate inputs (`T <= 0`, `σ <= 0`) price to zero
//!   rather than failing
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in the tails

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{black_forward_price, BlackScholesInputs, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
