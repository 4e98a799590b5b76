//! Volatility models.
//!
//! This module provides:
//! - [`sabr`]: SABR stochastic volatility model with the Hagan implied-vol
//!   approximation

pub mod sabr;

pub use sabr::{SabrError, SabrModel};
