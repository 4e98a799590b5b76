//! Single-barrier European options.

use super::{EuropeanOption, OptionType};
use std::fmt;

/// Barrier direction and knock behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierType {
    /// Dies when spot rises to the barrier.
    UpAndOut,
    /// Dies when spot falls to the barrier.
    DownAndOut,
    /// Comes alive when spot rises to the barrier.
    UpAndIn,
    /// Comes alive when spot falls to the barrier.
    DownAndIn,
}

impl BarrierType {
    /// `true` for barriers above spot.
    #[inline]
    pub fn is_up(&self) -> bool {
        matches!(self, BarrierType::UpAndOut | BarrierType::UpAndIn)
    }

    /// `true` for knock-in barriers.
    #[inline]
    pub fn is_knock_in(&self) -> bool {
        matches!(self, BarrierType::UpAndIn | BarrierType::DownAndIn)
    }

    /// Knock-out barrier in the same direction; knock-outs map to themselves.
    ///
    /// ```
    /// use pricer_models::instruments::BarrierType;
    ///
    /// assert_eq!(BarrierType::DownAndIn.knock_out_counterpart(), BarrierType::DownAndOut);
    /// assert_eq!(BarrierType::UpAndOut.knock_out_counterpart(), BarrierType::UpAndOut);
    /// ```
    #[inline]
    pub fn knock_out_counterpart(&self) -> Self {
        match self {
            BarrierType::UpAndIn | BarrierType::UpAndOut => BarrierType::UpAndOut,
            BarrierType::DownAndIn | BarrierType::DownAndOut => BarrierType::DownAndOut,
        }
    }

    /// Whether `spot` has reached `barrier`: `>=` for up barriers, `<=` for down.
    #[inline]
    pub fn is_hit(&self, spot: f64, barrier: f64) -> bool {
        if self.is_up() {
            spot >= barrier
        } else {
            spot <= barrier
        }
    }

    /// Kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            BarrierType::UpAndOut => "up-and-out",
            BarrierType::DownAndOut => "down-and-out",
            BarrierType::UpAndIn => "up-and-in",
            BarrierType::DownAndIn => "down-and-in",
        }
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// European barrier option with continuous-style monitoring and a rebate.
///
/// The instrument itself carries no lattice: [`npv`](Self::npv) is the
/// vanilla closed form and ignores the barrier. Barrier-aware values come
/// from a lattice engine.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{BarrierOption, BarrierType, OptionType};
///
/// let option = BarrierOption::new(
///     BarrierType::UpAndOut, OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.2, 130.0,
/// )
/// .with_rebate(1.5);
///
/// assert_eq!(option.rebate(), 1.5);
/// assert!((option.npv() - 10.4506).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierOption {
    barrier_type: BarrierType,
    option_type: OptionType,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    barrier: f64,
    rebate: f64,
}

impl BarrierOption {
    /// Creates a barrier option with zero rebate.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        barrier_type: BarrierType,
        option_type: OptionType,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        barrier: f64,
    ) -> Self {
        Self {
            barrier_type,
            option_type,
            spot,
            strike,
            maturity,
            rate,
            volatility,
            barrier,
            rebate: 0.0,
        }
    }

    /// Sets the amount paid when the barrier is hit.
    pub fn with_rebate(mut self, rebate: f64) -> Self {
        self.rebate = rebate;
        self
    }

    /// Same option with a different barrier type.
    pub fn with_barrier_type(mut self, barrier_type: BarrierType) -> Self {
        self.barrier_type = barrier_type;
        self
    }

    /// Barrier type.
    #[inline]
    pub fn barrier_type(&self) -> BarrierType {
        self.barrier_type
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Flat continuously compounded rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Flat volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Barrier level.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Rebate paid at a barrier hit.
    #[inline]
    pub fn rebate(&self) -> f64 {
        self.rebate
    }

    /// The matching European option, without dividend.
    pub fn vanilla(&self) -> EuropeanOption {
        EuropeanOption::new(
            self.option_type,
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            0.0,
        )
    }

    /// Vanilla closed-form value ignoring the barrier; zero when degenerate.
    pub fn npv(&self) -> f64 {
        self.vanilla().npv()
    }
}
