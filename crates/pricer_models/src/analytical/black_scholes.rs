//! Black-Scholes closed form for European options with a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Inputs with `T <= 0` or `σ <= 0` are degenerate: the price is zero and
//! the Greeks are undefined.

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::OptionType;

/// Analytical sensitivities of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ (per unit of volatility)
    pub vega: f64,
    /// ∂V/∂t (per year of calendar time)
    pub theta: f64,
    /// ∂V/∂r (per unit of rate)
    pub rho: f64,
}

/// Inputs to the dividend-adjusted Black-Scholes formula.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesInputs;
/// use pricer_models::instruments::OptionType;
///
/// let inputs = BlackScholesInputs {
///     option_type: OptionType::Call,
///     spot: 100.0,
///     strike: 100.0,
///     maturity: 1.0,
///     rate: 0.05,
///     volatility: 0.2,
///     dividend: 0.0,
/// };
///
/// assert!((inputs.price() - 10.4506).abs() < 1e-4);
/// assert!((inputs.delta() - 0.6368).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesInputs {
    /// Call or put
    pub option_type: OptionType,
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Continuous dividend yield (q)
    pub dividend: f64,
}

impl BlackScholesInputs {
    /// `true` when `T <= 0` or `σ <= 0`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.maturity <= 0.0 || self.volatility <= 0.0
    }

    #[inline]
    fn vol_sqrt_t(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    #[inline]
    fn df(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    #[inline]
    fn qf(&self) -> f64 {
        (-self.dividend * self.maturity).exp()
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    pub fn d1(&self) -> f64 {
        let drift = self.rate - self.dividend + 0.5 * self.volatility * self.volatility;
        ((self.spot / self.strike).ln() + drift * self.maturity) / self.vol_sqrt_t()
    }

    /// d₂ = d₁ - σ√T
    pub fn d2(&self) -> f64 {
        self.d1() - self.vol_sqrt_t()
    }

    /// Option premium; exactly zero for degenerate inputs.
    pub fn price(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let d1 = self.d1();
        let d2 = d1 - self.vol_sqrt_t();
        let fwd_leg = self.spot * self.qf();
        let strike_leg = self.strike * self.df();
        match self.option_type {
            OptionType::Call => fwd_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
            OptionType::Put => strike_leg * norm_cdf(-d2) - fwd_leg * norm_cdf(-d1),
        }
    }

    /// Delta: e^(-qT)N(d₁) for calls, -e^(-qT)N(-d₁) for puts.
    pub fn delta(&self) -> f64 {
        let d1 = self.d1();
        match self.option_type {
            OptionType::Call => self.qf() * norm_cdf(d1),
            OptionType::Put => -self.qf() * norm_cdf(-d1),
        }
    }

    /// Gamma: e^(-qT)n(d₁) / (Sσ√T), identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        self.qf() * norm_pdf(self.d1()) / (self.spot * self.vol_sqrt_t())
    }

    /// Vega: S e^(-qT) n(d₁) √T, identical for calls and puts.
    pub fn vega(&self) -> f64 {
        self.spot * self.qf() * norm_pdf(self.d1()) * self.maturity.sqrt()
    }

    /// Theta in value per year.
    ///
    /// ```text
    /// call: -S e^(-qT) n(d1) σ / (2√T) - r K e^(-rT) N(d2) + q S e^(-qT) N(d1)
    /// put:  -S e^(-qT) n(d1) σ / (2√T) + r K e^(-rT) N(-d2) - q S e^(-qT) N(-d1)
    /// ```
    pub fn theta(&self) -> f64 {
        let d1 = self.d1();
        let d2 = d1 - self.vol_sqrt_t();
        let fwd_leg = self.spot * self.qf();
        let strike_leg = self.strike * self.df();
        let decay = -(fwd_leg * norm_pdf(d1) * self.volatility) / (2.0 * self.maturity.sqrt());
        match self.option_type {
            OptionType::Call => {
                decay - self.rate * strike_leg * norm_cdf(d2) + self.dividend * fwd_leg * norm_cdf(d1)
            }
            OptionType::Put => {
                decay + self.rate * strike_leg * norm_cdf(-d2)
                    - self.dividend * fwd_leg * norm_cdf(-d1)
            }
        }
    }

    /// Rho: T K e^(-rT) N(d₂) for calls, -T K e^(-rT) N(-d₂) for puts.
    pub fn rho(&self) -> f64 {
        let d2 = self.d2();
        let strike_leg = self.maturity * self.strike * self.df();
        match self.option_type {
            OptionType::Call => strike_leg * norm_cdf(d2),
            OptionType::Put => -strike_leg * norm_cdf(-d2),
        }
    }

    /// All five Greeks.
    pub fn greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(),
            rho: self.rho(),
        }
    }
}

/// Black-76 price on a forward, scaled by the discount factor `df`.
///
/// Returns zero when `maturity <= 0` or `vol <= 0`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_forward_price;
/// use pricer_models::instruments::OptionType;
///
/// let call = black_forward_price(OptionType::Call, 100.0, 100.0, 1.0, 0.2, 1.0);
/// assert!((call - 7.9656).abs() < 1e-4);
/// ```
pub fn black_forward_price(
    option_type: OptionType,
    forward: f64,
    strike: f64,
    maturity: f64,
    vol: f64,
    df: f64,
) -> f64 {
    if maturity <= 0.0 || vol <= 0.0 {
        return 0.0;
    }
    let vol_sqrt_t = vol * maturity.sqrt();
    let d1 = ((forward / strike).ln() + 0.5 * vol * vol * maturity) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let undiscounted = match option_type {
        OptionType::Call => forward * norm_cdf(d1) - strike * norm_cdf(d2),
        OptionType::Put => strike * norm_cdf(-d2) - forward * norm_cdf(-d1),
    };
    df * undiscounted
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm(option_type: OptionType) -> BlackScholesInputs {
        BlackScholesInputs {
            option_type,
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            dividend: 0.0,
        }
    }

    // ========================================
    // Prices
    // ========================================

    #[test]
    fn test_reference_call_put() {
        assert_relative_eq!(atm(OptionType::Call).price(), 10.450_583_572_185_565, epsilon = 1e-9);
        assert_relative_eq!(atm(OptionType::Put).price(), 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn test_put_call_parity_with_dividend() {
        let mut call = atm(OptionType::Call);
        call.dividend = 0.03;
        call.strike = 110.0;
        let put = BlackScholesInputs {
            option_type: OptionType::Put,
            ..call
        };
        let parity = 100.0 * (-0.03_f64).exp() - 110.0 * (-0.05_f64).exp();
        assert_relative_eq!(call.price() - put.price(), parity, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_price_is_zero() {
        let mut expired = atm(OptionType::Call);
        expired.maturity = 0.0;
        assert!(expired.is_degenerate());
        assert_eq!(expired.price(), 0.0);

        let mut no_vol = atm(OptionType::Put);
        no_vol.volatility = 0.0;
        assert_eq!(no_vol.price(), 0.0);
    }

    // ========================================
    // Greeks
    // ========================================

    #[test]
    fn test_reference_greeks() {
        let g = atm(OptionType::Call).greeks();
        assert_relative_eq!(g.delta, 0.636_830_651_175_619, epsilon = 1e-9);
        assert_relative_eq!(g.gamma, 0.018_762_017_345_846_9, epsilon = 1e-9);
        assert_relative_eq!(g.vega, 37.524_034_691_693_8, epsilon = 1e-7);
        assert_relative_eq!(g.theta, -6.414_027_546_438_2, epsilon = 1e-7);
        assert_relative_eq!(g.rho, 53.232_481_545_376_3, epsilon = 1e-7);
    }

    #[test]
    fn test_put_delta_is_call_delta_minus_one() {
        let call = atm(OptionType::Call);
        let put = atm(OptionType::Put);
        assert_relative_eq!(put.delta(), call.delta() - 1.0, epsilon = 1e-14);
        assert_relative_eq!(put.gamma(), call.gamma(), epsilon = 1e-14);
        assert_relative_eq!(put.vega(), call.vega(), epsilon = 1e-14);
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let mut inputs = atm(option_type);
            inputs.dividend = 0.02;
            let h = 1e-3;
            let up = BlackScholesInputs { spot: 100.0 + h, ..inputs };
            let dn = BlackScholesInputs { spot: 100.0 - h, ..inputs };
            let fd = (up.price() - dn.price()) / (2.0 * h);
            assert_relative_eq!(inputs.delta(), fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_theta_matches_finite_difference() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let mut inputs = atm(option_type);
            inputs.dividend = 0.01;
            let h = 1e-5;
            let longer = BlackScholesInputs { maturity: 1.0 + h, ..inputs };
            let shorter = BlackScholesInputs { maturity: 1.0 - h, ..inputs };
            // Theta is the derivative with respect to calendar time, i.e. -dV/dT
            let fd = -(longer.price() - shorter.price()) / (2.0 * h);
            assert_relative_eq!(inputs.theta(), fd, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rho_matches_finite_difference() {
        let inputs = atm(OptionType::Put);
        let h = 1e-6;
        let up = BlackScholesInputs { rate: 0.05 + h, ..inputs };
        let dn = BlackScholesInputs { rate: 0.05 - h, ..inputs };
        assert_relative_eq!(inputs.rho(), (up.price() - dn.price()) / (2.0 * h), epsilon = 1e-5);
    }

    // ========================================
    // Black-76
    // ========================================

    #[test]
    fn test_black_forward_matches_bs_on_forward() {
        let bs = atm(OptionType::Call);
        let df = (-0.05_f64).exp();
        let forward = 100.0 / df;
        let black = black_forward_price(OptionType::Call, forward, 100.0, 1.0, 0.2, df);
        assert_relative_eq!(black, bs.price(), epsilon = 1e-10);
    }

    #[test]
    fn test_black_forward_degenerate() {
        assert_eq!(black_forward_price(OptionType::Put, 100.0, 90.0, 0.0, 0.2, 1.0), 0.0);
        assert_eq!(black_forward_price(OptionType::Put, 100.0, 90.0, 1.0, 0.0, 1.0), 0.0);
    }
}
