//! # pricer_core: Foundation layer of the pricing workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the 4-layer architecture, providing:
//! - Time types: `Date`, `DateTime`, `DayCountConvention` (`types::time`)
//! - Business-day calendars (`types::calendar`)
//! - Error types: `PricingError`, `DateError`, `InterpolationError` (`types::error`)
//! - Generic interpolators (`math::interpolators`)
//! - Yield curves, volatility surfaces and a named market data container
//!   (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual numbers for sensitivity checks (optional)
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
//! use pricer_core::types::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2023, 1, 1).unwrap();
//! let end = Date::from_ymd(2023, 1, 31).unwrap();
//! let tau = DayCountConvention::Actual365Fixed.year_fraction(start, end);
//! assert!((tau - 30.0 / 365.0).abs() < 1e-15);
//!
//! let curve = InterpolatedCurve::new(&[1.0, 5.0], &[0.03, 0.04]).unwrap();
//! let df = curve.discount_factor(tau);
//! assert!(df < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Enable num-dual for dual-number tests of the generic term structures
//! - `serde`: Enable serialisation for Date, DateTime, DayCountConvention

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
