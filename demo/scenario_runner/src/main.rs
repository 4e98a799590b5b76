//! Scenario Runner - prices a sample book and revalues it under market shocks.
//!
//! # Flow
//!
//! 1. Load `RunnerConfig` (TOML file, environment overrides, validation)
//! 2. Build market data: discount curve, equity vol surface, equity spot
//! 3. Book a call, a put, an up-and-out call and a payer swap
//! 4. Price each trade with its matching engine
//! 5. Run the preset shocks, or the configured ones, through `ScenarioEngine`
//!
//! ```text
//! scenario-runner --config demo/scenario_runner/config/runner.toml --verbose
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pricer_core::types::Date;
use pricer_models::instruments::{Instrument, InstrumentKind};
use pricer_pricing::{
    BinomialBarrierEngine, BlackScholesEngine, DiscountingSwapEngine, Engine, PricingEngine,
};
use pricer_risk::{PresetShock, ScenarioEngine, ScenarioShock};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod portfolio;

use config::RunnerConfig;
use portfolio::{Position, CURVE_NAME};

/// Price a sample book and apply market shocks
#[derive(Parser)]
#[command(name = "scenario-runner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path; the bundled default is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// One engine per instrument kind.
struct Engines {
    analytic: Engine,
    lattice: Engine,
    swap: Engine,
}

impl Engines {
    fn new(lattice_steps: usize) -> Result<Self> {
        Ok(Self {
            analytic: BlackScholesEngine::new().into(),
            lattice: BinomialBarrierEngine::new(lattice_steps)?.into(),
            swap: DiscountingSwapEngine::new().into(),
        })
    }

    fn for_instrument(&self, instrument: &Instrument) -> &Engine {
        match instrument.kind() {
            InstrumentKind::European => &self.analytic,
            InstrumentKind::Barrier => &self.lattice,
            InstrumentKind::Swap => &self.swap,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RunnerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RunnerConfig::load_or_default(),
    }
    .with_env_override();
    config.validate()?;

    init_tracing(&config, cli.verbose);
    info!(
        lattice_steps = config.lattice_steps,
        scenarios = config.scenarios.len(),
        "configuration loaded"
    );

    let market = portfolio::build_market(&config.market).context("building market data")?;
    let valuation_date = Date::parse(&config.market.valuation_date)?;
    let book = portfolio::sample_book(&market, valuation_date, config.market.dividend)
        .context("booking sample portfolio")?;
    info!(positions = book.len(), curves = ?market.curve_names(), "market and book ready");

    let engines = Engines::new(config.lattice_steps)?;
    print_valuations(&book, &engines)?;

    let curve = market.require_yield_curve(CURVE_NAME)?;
    let instruments: Vec<Instrument> = book.iter().map(|p| p.instrument.clone()).collect();
    let option_scenarios = ScenarioEngine::new(&engines.analytic);
    let swap_scenarios = ScenarioEngine::new(&engines.swap).with_curve(curve);

    println!();
    println!(
        "{:<22} {:>14} {:>14} {:>14} {:>9}",
        "Scenario", "Options P&L", "Swap P&L", "Total P&L", "Total %"
    );
    println!("{}", "-".repeat(77));

    let base_total = book_value(&book, &engines)?;
    for (name, shock) in scenarios(&config) {
        let options = option_scenarios.evaluate(&instruments, &shock)?;
        let swaps = swap_scenarios.evaluate(&instruments, &shock)?;
        debug!(scenario = %name, ?shock, "scenario evaluated");

        // Each engine falls back to npv() for the other's trades, so only
        // the P&L columns add up across the two runs.
        let total = options.pnl + swaps.pnl;
        let pct = if base_total != 0.0 {
            100.0 * total / base_total.abs()
        } else {
            0.0
        };
        println!(
            "{:<22} {:>14.2} {:>14.2} {:>14.2} {:>8.2}%",
            name, options.pnl, swaps.pnl, total, pct
        );
    }

    Ok(())
}

fn init_tracing(config: &RunnerConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

/// Configured shocks, or every preset when none are configured.
fn scenarios(config: &RunnerConfig) -> Vec<(String, ScenarioShock)> {
    if config.scenarios.is_empty() {
        PresetShock::all()
            .iter()
            .map(|preset| (preset.name().to_string(), preset.shock()))
            .collect()
    } else {
        config
            .scenarios
            .iter()
            .map(|s| (s.name.clone(), s.shock))
            .collect()
    }
}

fn book_value(book: &[Position], engines: &Engines) -> Result<f64> {
    book.iter().try_fold(0.0, |acc, position| {
        let engine = engines.for_instrument(&position.instrument);
        Ok(acc + engine.price(&position.instrument)?)
    })
}

fn print_valuations(book: &[Position], engines: &Engines) -> Result<()> {
    println!(
        "{:<22} {:<10} {:<18} {:>16}",
        "Position", "Kind", "Engine", "Value"
    );
    println!("{}", "-".repeat(69));

    for position in book {
        let engine = engines.for_instrument(&position.instrument);
        let value = engine
            .price(&position.instrument)
            .with_context(|| format!("pricing {}", position.label))?;
        println!(
            "{:<22} {:<10} {:<18} {:>16.4}",
            position.label,
            position.instrument.kind().name(),
            engine.name(),
            value
        );

        if let (Some(option), Some(bs)) = (
            position.instrument.as_european(),
            engines.analytic.as_black_scholes(),
        ) {
            let greeks = bs.greeks(option)?;
            println!(
                "{:<22} delta {:.4}  gamma {:.4}  vega {:.4}",
                "", greeks.delta, greeks.gamma, greeks.vega
            );
        }
        if let Some(swap) = position.instrument.as_swap() {
            println!("{:<22} fair rate {:.4}%", "", 100.0 * swap.fair_rate()?);
        }
    }

    println!("{}", "-".repeat(69));
    println!("{:<52} {:>16.4}", "Book value", book_value(book, engines)?);
    Ok(())
}
