//! Runner configuration management.
//!
//! Handles loading of the scenario runner configuration from TOML files
//! with environment variable override support.

use pricer_core::types::Date;
use pricer_risk::ScenarioShock;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the runner configuration, relative to the workspace root.
pub const DEFAULT_CONFIG_PATH: &str = "demo/scenario_runner/config/runner.toml";

/// Scenario runner configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Step count of the barrier lattice
    #[serde(default = "default_lattice_steps")]
    pub lattice_steps: usize,

    /// Market data
    #[serde(default)]
    pub market: MarketConfig,

    /// Custom shocks; the presets run when this is empty
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

/// Market data section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarketConfig {
    /// Valuation date (YYYY-MM-DD), start of the sample swap
    pub valuation_date: String,
    /// Equity spot
    pub spot: f64,
    /// Continuous dividend yield
    pub dividend: f64,
    /// Curve pillar times in years
    pub curve_times: Vec<f64>,
    /// Continuously compounded zero rates at the pillars
    pub curve_rates: Vec<f64>,
    /// Surface strike axis
    pub surface_strikes: Vec<f64>,
    /// Surface tenor axis in years
    pub surface_tenors: Vec<f64>,
    /// Volatilities, one row per strike
    pub surface_vols: Vec<Vec<f64>>,
}

/// A named custom shock
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    /// Label printed in the P&L table
    pub name: String,
    /// Shock components; missing fields default to zero
    #[serde(flatten)]
    pub shock: ScenarioShock,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_lattice_steps() -> usize {
    200
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            valuation_date: "2024-01-02".to_string(),
            spot: 100.0,
            dividend: 0.0,
            curve_times: vec![0.5, 1.0, 2.0, 5.0, 10.0],
            curve_rates: vec![0.030, 0.032, 0.035, 0.038, 0.040],
            surface_strikes: vec![80.0, 90.0, 100.0, 110.0, 120.0],
            surface_tenors: vec![0.25, 1.0, 2.0, 5.0],
            surface_vols: vec![
                vec![0.28, 0.27, 0.26, 0.25],
                vec![0.24, 0.24, 0.23, 0.23],
                vec![0.21, 0.21, 0.21, 0.21],
                vec![0.19, 0.19, 0.20, 0.20],
                vec![0.18, 0.18, 0.19, 0.19],
            ],
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            lattice_steps: default_lattice_steps(),
            market: MarketConfig::default(),
            scenarios: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the default path or return the default config
    pub fn load_or_default() -> Self {
        Self::load(&PathBuf::from(DEFAULT_CONFIG_PATH)).unwrap_or_default()
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(log_level) = std::env::var("SCENARIO_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(steps) = std::env::var("SCENARIO_LATTICE_STEPS") {
            if let Ok(steps) = steps.parse() {
                self.lattice_steps = steps;
            }
        }

        if let Ok(spot) = std::env::var("SCENARIO_SPOT") {
            if let Ok(spot) = spot.parse() {
                self.market.spot = spot;
            }
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.lattice_steps == 0 {
            errors.push("lattice_steps must be greater than 0".to_string());
        }

        self.market.validate(&mut errors);

        for (i, scenario) in self.scenarios.iter().enumerate() {
            if scenario.name.trim().is_empty() {
                errors.push(format!("scenarios[{}] has an empty name", i));
            }
            if scenario.shock.spot_shift <= -1.0 {
                errors.push(format!(
                    "scenario '{}' spot_shift {} would make spot non-positive",
                    scenario.name, scenario.shock.spot_shift
                ));
            }
            if scenario.shock.vol_shift <= -1.0 {
                errors.push(format!(
                    "scenario '{}' vol_shift {} would make volatility non-positive",
                    scenario.name, scenario.shock.vol_shift
                ));
            }
            if self.scenarios[..i].iter().any(|s| s.name == scenario.name) {
                errors.push(format!("duplicate scenario name '{}'", scenario.name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

impl MarketConfig {
    fn validate(&self, errors: &mut Vec<String>) {
        if Date::parse(&self.valuation_date).is_err() {
            errors.push(format!(
                "Invalid valuation_date '{}'. Expected YYYY-MM-DD",
                self.valuation_date
            ));
        }

        if self.spot <= 0.0 || self.spot.is_nan() {
            errors.push(format!("spot must be positive, got {}", self.spot));
        }

        if self.curve_times.is_empty() {
            errors.push("curve_times cannot be empty".to_string());
        }
        if self.curve_times.len() != self.curve_rates.len() {
            errors.push(format!(
                "curve_times has {} entries but curve_rates has {}",
                self.curve_times.len(),
                self.curve_rates.len()
            ));
        }

        if self.surface_strikes.is_empty() || self.surface_tenors.is_empty() {
            errors.push("surface axes cannot be empty".to_string());
        }
        if self.surface_vols.len() != self.surface_strikes.len() {
            errors.push(format!(
                "surface_vols has {} rows but there are {} strikes",
                self.surface_vols.len(),
                self.surface_strikes.len()
            ));
        }
        for (i, row) in self.surface_vols.iter().enumerate() {
            if row.len() != self.surface_tenors.len() {
                errors.push(format!(
                    "surface_vols row {} has {} entries but there are {} tenors",
                    i,
                    row.len(),
                    self.surface_tenors.len()
                ));
            }
            if row.iter().any(|&v| v <= 0.0 || v.is_nan()) {
                errors.push(format!("surface_vols row {} has a non-positive volatility", i));
            }
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validation_errors(config: &RunnerConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    // ========================================
    // Defaults and parsing
    // ========================================

    #[test]
    fn test_default_config_is_valid() {
        let config = RunnerConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.lattice_steps, 200);
        assert!(config.scenarios.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RunnerConfig::from_toml("").unwrap();
        assert_eq!(config.market, MarketConfig::default());
        assert_eq!(config.lattice_steps, 200);
    }

    #[test]
    fn test_partial_market_section() {
        let config = RunnerConfig::from_toml(
            r#"
            lattice_steps = 400

            [market]
            spot = 120.0
            curve_times = [1.0]
            curve_rates = [0.02]
            "#,
        )
        .unwrap();
        assert_eq!(config.lattice_steps, 400);
        assert_eq!(config.market.spot, 120.0);
        assert_eq!(config.market.curve_rates, vec![0.02]);
        assert_eq!(
            config.market.surface_strikes,
            MarketConfig::default().surface_strikes
        );
    }

    #[test]
    fn test_scenarios_flatten_shock() {
        let config = RunnerConfig::from_toml(
            r#"
            [[scenarios]]
            name = "Stagflation"
            rate_parallel_bp = 150
            spot_shift = -0.1

            [[scenarios]]
            name = "Vol spike"
            vol_shift = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(config.scenarios.len(), 2);
        assert_eq!(config.scenarios[0].shock, ScenarioShock::new(150.0, 0.0, -0.1));
        assert_eq!(config.scenarios[1].shock, ScenarioShock::vol(0.4));
    }

    #[test]
    fn test_parse_error() {
        let err = RunnerConfig::from_toml("lattice_steps = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\nlattice_steps = 50").unwrap();
        let config = RunnerConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.lattice_steps, 50);
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/runner.toml");
        let config = RunnerConfig::load(&path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scenarios.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunnerConfig::load(Path::new("/nonexistent/runner.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_with_env_and_validate_rejects_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lattice_steps = 0").unwrap();
        let err = RunnerConfig::load_with_env_and_validate(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_invalid_log_level() {
        let config = RunnerConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("log_level"));
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let config = RunnerConfig {
            log_level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_lattice_steps() {
        let config = RunnerConfig {
            lattice_steps: 0,
            ..Default::default()
        };
        assert!(validation_errors(&config)[0].contains("lattice_steps"));
    }

    #[test]
    fn test_market_errors_are_collected() {
        let mut config = RunnerConfig::default();
        config.market.valuation_date = "2024/01/02".to_string();
        config.market.spot = 0.0;
        config.market.curve_rates.pop();
        config.market.surface_vols[1][2] = -0.1;

        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("valuation_date")));
        assert!(errors.iter().any(|e| e.contains("spot")));
        assert!(errors.iter().any(|e| e.contains("curve_rates")));
        assert!(errors.iter().any(|e| e.contains("row 1")));
    }

    #[test]
    fn test_surface_shape_mismatch() {
        let mut config = RunnerConfig::default();
        config.market.surface_vols.pop();
        config.market.surface_vols[0].push(0.3);
        let errors = validation_errors(&config);
        assert!(errors.iter().any(|e| e.contains("rows")));
        assert!(errors.iter().any(|e| e.contains("row 0")));
    }

    #[test]
    fn test_scenario_validation() {
        let config = RunnerConfig {
            scenarios: vec![
                ScenarioConfig {
                    name: "Wipeout".to_string(),
                    shock: ScenarioShock::spot(-1.0),
                },
                ScenarioConfig {
                    name: " ".to_string(),
                    shock: ScenarioShock::vol(-1.5),
                },
                ScenarioConfig {
                    name: "Wipeout".to_string(),
                    shock: ScenarioShock::default(),
                },
            ],
            ..Default::default()
        };
        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("duplicate")));
        assert!(errors.iter().any(|e| e.contains("empty name")));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Validation errors: a; b");
        assert_eq!(ConfigError::Io("gone".to_string()).to_string(), "IO error: gone");
    }
}
