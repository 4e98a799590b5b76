//! Scenario analysis.
//!
//! This module provides:
//! - Shock definitions ([`ScenarioShock`])
//! - Preset stress shocks ([`PresetShock`])
//! - Portfolio revaluation under a shock ([`ScenarioEngine`])
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Engine                  │
//! ├──────────────────────────────────────────────┤
//! │  ScenarioShock  - Rate, vol and spot shifts  │
//! │  PresetShock    - Named stress shocks        │
//! │  ScenarioEngine - Revaluation & P&L          │
//! └──────────────────────────────────────────────┘
//! ```

mod engine;
mod presets;
mod shock;

pub use engine::{ScenarioEngine, ScenarioPnL};
pub use presets::PresetShock;
pub use shock::ScenarioShock;
