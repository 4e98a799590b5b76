//! # Pricer Pricing (Layer 3: Engines)
//!
//! Pricing engines that value the instruments of `pricer_models`.
//!
//! This crate provides:
//! - [`PricingEngine`]: the common engine interface
//! - [`BlackScholesEngine`]: closed form for European options, with Greeks
//! - [`SabrEngine`]: Black-76 on a SABR implied volatility
//! - [`BinomialBarrierEngine`]: Cox-Ross-Rubinstein lattice for barrier options
//! - [`DiscountingSwapEngine`]: single-curve swap discounting
//! - [`Engine`]: enum dispatch over all of the above
//!
//! Each engine supports one instrument variant and rejects the others with
//! `PricingError::UnsupportedInstrument`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{EuropeanOption, Instrument, OptionType};
//! use pricer_pricing::{BlackScholesEngine, Engine, PricingEngine};
//!
//! let engine = Engine::from(BlackScholesEngine::new());
//! let call = Instrument::from(EuropeanOption::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 0.0));
//!
//! let price = engine.price(&call).unwrap();
//! assert!((price - 10.4506).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engines;
pub mod error;

pub use engines::{
    BinomialBarrierEngine, BlackScholesEngine, DiscountingSwapEngine, Engine, PricingEngine,
    SabrEngine, DEFAULT_LATTICE_STEPS,
};
pub use error::EngineError;
