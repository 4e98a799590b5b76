//! Market shock definition.

/// A simultaneous shift of rates, volatility and spot.
///
/// - `rate_parallel_bp`: additive, in basis points, applied to every rate
/// - `vol_shift`: relative, volatility is multiplied by `1 + vol_shift`
/// - `spot_shift`: relative, spot is multiplied by `1 + spot_shift`
///
/// # Examples
/// ```
/// use pricer_risk::ScenarioShock;
///
/// let shock = ScenarioShock::rates(25.0);
/// assert_eq!(shock.rate_shift(), 0.0025);
/// assert!(!shock.is_zero());
/// assert!(ScenarioShock::default().is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioShock {
    /// Parallel rate shift in basis points.
    pub rate_parallel_bp: f64,
    /// Relative volatility shift (0.1 is +10%).
    pub vol_shift: f64,
    /// Relative spot shift (-0.2 is a 20% fall).
    pub spot_shift: f64,
}

impl ScenarioShock {
    /// Creates a shock from all three components.
    pub fn new(rate_parallel_bp: f64, vol_shift: f64, spot_shift: f64) -> Self {
        Self {
            rate_parallel_bp,
            vol_shift,
            spot_shift,
        }
    }

    /// Rates-only shock.
    pub fn rates(bp: f64) -> Self {
        Self {
            rate_parallel_bp: bp,
            ..Self::default()
        }
    }

    /// Volatility-only shock.
    pub fn vol(shift: f64) -> Self {
        Self {
            vol_shift: shift,
            ..Self::default()
        }
    }

    /// Spot-only shock.
    pub fn spot(shift: f64) -> Self {
        Self {
            spot_shift: shift,
            ..Self::default()
        }
    }

    /// `true` when no component moves the market.
    pub fn is_zero(&self) -> bool {
        self.rate_parallel_bp == 0.0 && self.vol_shift == 0.0 && self.spot_shift == 0.0
    }

    /// Rate shift as an absolute rate.
    #[inline]
    pub fn rate_shift(&self) -> f64 {
        self.rate_parallel_bp / 10_000.0
    }

    /// Shocked value of a spot.
    #[inline]
    pub fn shock_spot(&self, spot: f64) -> f64 {
        spot * (1.0 + self.spot_shift)
    }

    /// Shocked value of a volatility.
    #[inline]
    pub fn shock_vol(&self, vol: f64) -> f64 {
        vol * (1.0 + self.vol_shift)
    }

    /// Shocked value of a rate.
    #[inline]
    pub fn shock_rate(&self, rate: f64) -> f64 {
        rate + self.rate_shift()
    }
}
