//! Preset stress shocks.
//!
//! Provides ready-to-use shocks for typical risk analysis:
//! - Parallel rate shifts (+/-1bp, +/-100bp)
//! - Relative volatility shifts (+/-10%)
//! - Relative spot shifts (+/-10%)
//! - A combined equity crash

use super::ScenarioShock;

/// Types of preset shocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetShock {
    /// Interest rate +1bp parallel shift
    RateUp1bp,
    /// Interest rate -1bp parallel shift
    RateDown1bp,
    /// Interest rate +100bp parallel shift
    RateUp100bp,
    /// Interest rate -100bp parallel shift
    RateDown100bp,
    /// Volatility +10% relative
    VolUp10Pct,
    /// Volatility -10% relative
    VolDown10Pct,
    /// Spot +10%
    SpotUp10Pct,
    /// Spot -10%
    SpotDown10Pct,
    /// Spot -20%, volatility +50%, rates -50bp
    MarketCrash,
}

impl PresetShock {
    /// Every preset, in display order.
    pub fn all() -> [Self; 9] {
        [
            Self::RateUp1bp,
            Self::RateDown1bp,
            Self::RateUp100bp,
            Self::RateDown100bp,
            Self::VolUp10Pct,
            Self::VolDown10Pct,
            Self::SpotUp10Pct,
            Self::SpotDown10Pct,
            Self::MarketCrash,
        ]
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RateUp1bp => "IR +1bp",
            Self::RateDown1bp => "IR -1bp",
            Self::RateUp100bp => "IR +100bp",
            Self::RateDown100bp => "IR -100bp",
            Self::VolUp10Pct => "Vol +10%",
            Self::VolDown10Pct => "Vol -10%",
            Self::SpotUp10Pct => "Spot +10%",
            Self::SpotDown10Pct => "Spot -10%",
            Self::MarketCrash => "Market Crash",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RateUp1bp => "Parallel interest rate shift +1 basis point",
            Self::RateDown1bp => "Parallel interest rate shift -1 basis point",
            Self::RateUp100bp => "Parallel interest rate shift +100 basis points",
            Self::RateDown100bp => "Parallel interest rate shift -100 basis points",
            Self::VolUp10Pct => "Implied volatility increases 10% relative",
            Self::VolDown10Pct => "Implied volatility decreases 10% relative",
            Self::SpotUp10Pct => "Underlying prices rise 10%",
            Self::SpotDown10Pct => "Underlying prices fall 10%",
            Self::MarketCrash => "Spot -20%, volatility +50%, rates -50 basis points",
        }
    }

    /// The shock this preset applies.
    pub fn shock(&self) -> ScenarioShock {
        match self {
            Self::RateUp1bp => ScenarioShock::rates(1.0),
            Self::RateDown1bp => ScenarioShock::rates(-1.0),
            Self::RateUp100bp => ScenarioShock::rates(100.0),
            Self::RateDown100bp => ScenarioShock::rates(-100.0),
            Self::VolUp10Pct => ScenarioShock::vol(0.1),
            Self::VolDown10Pct => ScenarioShock::vol(-0.1),
            Self::SpotUp10Pct => ScenarioShock::spot(0.1),
            Self::SpotDown10Pct => ScenarioShock::spot(-0.1),
            Self::MarketCrash => ScenarioShock::new(-50.0, 0.5, -0.2),
        }
    }
}
