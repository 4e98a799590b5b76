//! # Pricer Risk (L4: Application)
//!
//! Scenario analysis on portfolios of instruments.
//!
//! This crate provides:
//! - [`ScenarioShock`]: parallel rate, relative volatility and relative spot shifts
//! - [`PresetShock`]: ready-made stress shocks
//! - [`ScenarioEngine`]: revalues a portfolio under a shock and reports P&L
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! │  scenarios/ - shocks, presets, engine   │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          pricer_pricing (L3)            │
//! │  Analytic, lattice and swap engines     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{EuropeanOption, Instrument, OptionType};
//! use pricer_pricing::{BlackScholesEngine, Engine};
//! use pricer_risk::{ScenarioEngine, ScenarioShock};
//!
//! let engine = Engine::from(BlackScholesEngine::new());
//! let portfolio = vec![Instrument::from(EuropeanOption::new(
//!     OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 0.0,
//! ))];
//!
//! let scenarios = ScenarioEngine::new(&engine);
//! let pnl = scenarios.apply(&portfolio, &ScenarioShock::spot(0.01)).unwrap();
//! assert!(pnl > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod scenarios;

pub use scenarios::{PresetShock, ScenarioEngine, ScenarioPnL, ScenarioShock};
