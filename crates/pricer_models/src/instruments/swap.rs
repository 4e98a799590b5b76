//! Fixed-for-floating interest rate swap.

use super::InstrumentError;
use crate::schedules::Schedule;
use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
use pricer_core::types::DayCountConvention;
use std::fmt;
use std::sync::Arc;

/// Which side of the fixed leg the holder is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Receives the fixed leg, pays floating.
    Payer,
    /// Pays the fixed leg, receives floating.
    Receiver,
}

impl SwapDirection {
    /// +1 for payer, -1 for receiver.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            SwapDirection::Payer => 1.0,
            SwapDirection::Receiver => -1.0,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::Payer => f.write_str("payer"),
            SwapDirection::Receiver => f.write_str("receiver"),
        }
    }
}

/// Vanilla fixed-for-floating swap discounted and projected on one curve.
///
/// Times on each leg are measured from that leg's schedule start under the
/// leg's day count.
///
/// ```text
/// fixed = Σ N K τᵢ D(tᵢ)               τᵢ between consecutive fixed dates
/// float = Σ N (f(t₁, t₂) + s)(t₂ - t₁) D(t₂)
/// npv   = sign · (fixed - float)
/// ```
///
/// The sign convention values the fixed leg as received by a payer, so a
/// payer swap gains when its fixed rate is above the market rate.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{SwapDirection, VanillaSwap};
/// use pricer_models::schedules::{Frequency, Schedule};
/// use pricer_core::market_data::curves::InterpolatedCurve;
/// use pricer_core::types::{Date, DayCountConvention};
/// use std::sync::Arc;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2029, 1, 1).unwrap();
/// let fixed = Schedule::new(start, end, Frequency::Annual).unwrap();
/// let float = Schedule::new(start, end, Frequency::Quarterly).unwrap();
/// let curve = Arc::new(InterpolatedCurve::new(&[1.0, 5.0], &[0.03, 0.035]).unwrap());
///
/// let swap = VanillaSwap::new(
///     SwapDirection::Payer,
///     1_000_000.0,
///     0.03,
///     fixed,
///     float,
///     DayCountConvention::Actual365Fixed,
///     DayCountConvention::Actual365Fixed,
/// )
/// .with_curve(curve);
///
/// let par = swap.with_fixed_rate(swap.fair_rate().unwrap());
/// assert!(par.npv().unwrap().abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VanillaSwap {
    direction: SwapDirection,
    notional: f64,
    fixed_rate: f64,
    fixed_schedule: Schedule,
    float_schedule: Schedule,
    fixed_day_count: DayCountConvention,
    float_day_count: DayCountConvention,
    curve: Option<Arc<InterpolatedCurve<f64>>>,
    float_spread: f64,
}

impl VanillaSwap {
    /// Creates an unbound swap with zero float spread.
    pub fn new(
        direction: SwapDirection,
        notional: f64,
        fixed_rate: f64,
        fixed_schedule: Schedule,
        float_schedule: Schedule,
        fixed_day_count: DayCountConvention,
        float_day_count: DayCountConvention,
    ) -> Self {
        Self {
            direction,
            notional,
            fixed_rate,
            fixed_schedule,
            float_schedule,
            fixed_day_count,
            float_day_count,
            curve: None,
            float_spread: 0.0,
        }
    }

    /// Binds the discount and projection curve.
    pub fn with_curve(mut self, curve: Arc<InterpolatedCurve<f64>>) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Binds or replaces the curve after construction.
    pub fn set_curve(&mut self, curve: Arc<InterpolatedCurve<f64>>) {
        self.curve = Some(curve);
    }

    /// Sets the spread added to each floating forward.
    pub fn with_float_spread(mut self, spread: f64) -> Self {
        self.float_spread = spread;
        self
    }

    /// Copy of this swap with a different fixed rate.
    pub fn with_fixed_rate(&self, fixed_rate: f64) -> Self {
        Self {
            fixed_rate,
            ..self.clone()
        }
    }

    /// Payer or receiver.
    #[inline]
    pub fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Fixed coupon rate.
    #[inline]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Spread over the floating forward.
    #[inline]
    pub fn float_spread(&self) -> f64 {
        self.float_spread
    }

    /// Fixed leg schedule.
    #[inline]
    pub fn fixed_schedule(&self) -> &Schedule {
        &self.fixed_schedule
    }

    /// Floating leg schedule.
    #[inline]
    pub fn float_schedule(&self) -> &Schedule {
        &self.float_schedule
    }

    /// Fixed leg day count.
    #[inline]
    pub fn fixed_day_count(&self) -> DayCountConvention {
        self.fixed_day_count
    }

    /// Floating leg day count.
    #[inline]
    pub fn float_day_count(&self) -> DayCountConvention {
        self.float_day_count
    }

    /// Bound curve, if any.
    #[inline]
    pub fn curve(&self) -> Option<&Arc<InterpolatedCurve<f64>>> {
        self.curve.as_ref()
    }

    fn require_curve(&self) -> Result<&InterpolatedCurve<f64>, InstrumentError> {
        self.curve
            .as_deref()
            .ok_or(InstrumentError::MissingDiscountCurve)
    }

    /// Σ τᵢ D(tᵢ) over the fixed leg, per unit notional.
    fn annuity_on(&self, curve: &InterpolatedCurve<f64>) -> f64 {
        let dc = self.fixed_day_count;
        let start = self.fixed_schedule.start();
        self.fixed_schedule
            .periods()
            .iter()
            .map(|p| p.year_fraction(dc) * curve.discount_factor(dc.year_fraction(start, p.end())))
            .sum()
    }

    /// Σ (f(t₁, t₂) + spread)(t₂ - t₁) D(t₂) over the floating leg, per unit notional.
    fn float_leg_on(&self, curve: &InterpolatedCurve<f64>, spread: f64) -> f64 {
        let dc = self.float_day_count;
        let start = self.float_schedule.start();
        self.float_schedule
            .periods()
            .iter()
            .map(|p| {
                let t1 = dc.year_fraction(start, p.start());
                let t2 = dc.year_fraction(start, p.end());
                (curve.forward_rate(t1, t2) + spread) * (t2 - t1) * curve.discount_factor(t2)
            })
            .sum()
    }

    /// Fixed leg annuity per unit notional.
    ///
    /// # Errors
    /// `InstrumentError::MissingDiscountCurve` when no curve is bound.
    pub fn annuity(&self) -> Result<f64, InstrumentError> {
        Ok(self.annuity_on(self.require_curve()?))
    }

    /// Present value of the fixed leg.
    pub fn fixed_leg_pv(&self) -> Result<f64, InstrumentError> {
        Ok(self.notional * self.fixed_rate * self.annuity()?)
    }

    /// Present value of the floating leg including the spread.
    pub fn float_leg_pv(&self) -> Result<f64, InstrumentError> {
        let curve = self.require_curve()?;
        Ok(self.notional * self.float_leg_on(curve, self.float_spread))
    }

    /// `sign · (fixed - float)`.
    ///
    /// # Errors
    /// `InstrumentError::MissingDiscountCurve` when no curve is bound.
    pub fn npv(&self) -> Result<f64, InstrumentError> {
        let fixed = self.fixed_leg_pv()?;
        let float = self.float_leg_pv()?;
        Ok(self.direction.sign() * (fixed - float))
    }

    /// Fixed rate that sets the NPV to zero.
    ///
    /// ```text
    /// fair = float_unit / annuity - spread
    /// ```
    /// where `float_unit` is the floating leg per unit notional without spread.
    ///
    /// # Errors
    /// * `InstrumentError::MissingDiscountCurve` - No curve is bound
    /// * `InstrumentError::ZeroAnnuity` - The fixed leg has no accrual
    pub fn fair_rate(&self) -> Result<f64, InstrumentError> {
        let curve = self.require_curve()?;
        let annuity = self.annuity_on(curve);
        if annuity == 0.0 {
            return Err(InstrumentError::ZeroAnnuity);
        }
        Ok(self.float_leg_on(curve, 0.0) / annuity - self.float_spread)
    }
}
