//! Cox-Ross-Rubinstein lattice for single-barrier options.
//!
//! Knock-out options are valued directly by backward induction. Knock-in
//! options use in-out parity against the vanilla closed form:
//!
//! ```text
//! V_in = V_vanilla - V_out
//! ```
//!
//! Lattice parameters for `n` steps over maturity `T`:
//!
//! ```text
//! dt = T / n
//! u  = exp(σ √dt),  d = 1 / u
//! p  = (exp(r dt) - d) / (u - d)
//! S(step, i) = S₀ u^(step - i) d^i
//! ```
//!
//! A node at or beyond the barrier pays the rebate, at expiry and at every
//! earlier step.

use super::{unsupported, PricingEngine};
use crate::error::EngineError;
use pricer_core::types::PricingError;
use pricer_models::instruments::{BarrierOption, Instrument};
use tracing::debug;

/// Step count used by [`BinomialBarrierEngine::default`].
pub const DEFAULT_LATTICE_STEPS: usize = 200;

/// Binomial lattice engine for [`BarrierOption`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::{BarrierOption, BarrierType, OptionType};
/// use pricer_pricing::BinomialBarrierEngine;
///
/// let engine = BinomialBarrierEngine::new(400).unwrap();
/// let up_out = BarrierOption::new(
///     BarrierType::UpAndOut, OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 130.0,
/// );
///
/// let price = engine.price_option(&up_out);
/// assert!(price > 0.0 && price < up_out.npv());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialBarrierEngine {
    steps: usize,
}

impl BinomialBarrierEngine {
    /// Creates an engine with `steps` lattice steps.
    ///
    /// # Errors
    /// `EngineError::InvalidSteps` when `steps` is zero.
    pub fn new(steps: usize) -> Result<Self, EngineError> {
        if steps == 0 {
            return Err(EngineError::InvalidSteps(steps));
        }
        Ok(Self { steps })
    }

    /// Number of lattice steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Lattice value of `option`; zero when maturity or volatility is not positive.
    pub fn price_option(&self, option: &BarrierOption) -> f64 {
        if option.maturity() <= 0.0 || option.volatility() <= 0.0 {
            return 0.0;
        }

        let barrier_type = option.barrier_type();
        if barrier_type.is_knock_in() {
            let knock_out = option.with_barrier_type(barrier_type.knock_out_counterpart());
            let vanilla = option.vanilla().npv();
            let out = self.knock_out(&knock_out);
            debug!(
                barrier_type = %barrier_type,
                vanilla,
                knock_out = out,
                "knock-in valued by in-out parity"
            );
            return vanilla - out;
        }

        self.knock_out(option)
    }

    fn knock_out(&self, option: &BarrierOption) -> f64 {
        let n = self.steps;
        let barrier_type = option.barrier_type();
        let spot = option.spot();
        let barrier = option.barrier();
        let rebate = option.rebate();

        let dt = option.maturity() / n as f64;
        let u = (option.volatility() * dt.sqrt()).exp();
        let d = 1.0 / u;
        let disc = (-option.rate() * dt).exp();
        let p = ((option.rate() * dt).exp() - d) / (u - d);

        debug!(steps = n, dt, u, p, barrier, "configured CRR lattice");

        let node_spot = |step: usize, i: usize| spot * u.powi((step - i) as i32) * d.powi(i as i32);

        let mut values: Vec<f64> = (0..=n)
            .map(|i| {
                let s = node_spot(n, i);
                if barrier_type.is_hit(s, barrier) {
                    rebate
                } else {
                    option.option_type().payoff(s, option.strike())
                }
            })
            .collect();

        for step in (0..n).rev() {
            for i in 0..=step {
                values[i] = if barrier_type.is_hit(node_spot(step, i), barrier) {
                    rebate
                } else {
                    disc * (p * values[i] + (1.0 - p) * values[i + 1])
                };
            }
        }

        values[0]
    }
}

impl Default for BinomialBarrierEngine {
    fn default() -> Self {
        Self {
            steps: DEFAULT_LATTICE_STEPS,
        }
    }
}

impl PricingEngine for BinomialBarrierEngine {
    fn name(&self) -> &'static str {
        "binomial-barrier"
    }

    fn price(&self, instrument: &Instrument) -> Result<f64, PricingError> {
        match instrument {
            Instrument::Barrier(option) => Ok(self.price_option(option)),
            other => Err(unsupported(self.name(), other)),
        }
    }
}
