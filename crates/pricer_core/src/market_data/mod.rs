//! Market data structures for pricing.
//!
//! This module provides yield curve and volatility surface abstractions,
//! a named container for them, and small curve analytics helpers.
//!
//! # Architecture
//!
//! Term structures are generic over `T: Float` so they work with `f64` and
//! with dual numbers. Once built they are immutable; shocked variants are
//! new values (`parallel_shift`, `scaled`).
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and implementations (FlatCurve, InterpolatedCurve)
//! - [`surfaces`]: Volatility surface trait and implementations (FlatVol, InterpolatedVolSurface)
//! - [`container`]: Named registry (MarketData, EquitySpot, FxSpot)
//! - [`tools`]: Spot rates, forward rates, funding spread
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//! use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! assert!((curve.discount_factor(1.0) - 0.951229).abs() < 1e-5);
//!
//! let vol_surface = FlatVol::new(0.20_f64);
//! assert_eq!(vol_surface.volatility(100.0, 1.0), 0.20);
//! ```

pub mod container;
pub mod curves;
pub mod error;
pub mod surfaces;
pub mod tools;

pub use container::{EquitySpot, FxSpot, MarketData};
pub use curves::{FlatCurve, InterpolatedCurve, YieldCurve};
pub use error::MarketDataError;
pub use surfaces::{FlatVol, InterpolatedVolSurface, VolatilitySurface};
