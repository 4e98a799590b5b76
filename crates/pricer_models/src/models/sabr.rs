//! SABR stochastic volatility model.
//!
//! SABR (Stochastic Alpha, Beta, Rho) is described by the SDEs:
//! ```text
//! dF = alpha * F^beta * dW_F
//! d(alpha) = nu * alpha * dW_alpha
//! E[dW_F * dW_alpha] = rho * dt
//! ```
//! where:
//! - F = forward price
//! - alpha = initial volatility
//! - beta = CEV exponent (0: normal, 1: lognormal)
//! - nu = volatility of volatility
//! - rho = correlation between forward and volatility
//!
//! ## Hagan formula
//!
//! Implied Black volatilities use the Hagan et al. (2002) expansion, with a
//! dedicated at-the-money branch.
//!
//! ```
//! use pricer_models::models::sabr::SabrModel;
//!
//! let model = SabrModel::new(0.2, 1.0, 0.0, 0.0).unwrap();
//! // beta = 1 and nu = 0 is plain Black with vol alpha
//! assert!((model.implied_vol(100.0, 120.0, 2.0) - 0.2).abs() < 1e-12);
//! ```

use pricer_core::types::PricingError;
use thiserror::Error;

/// Below this |z| the ratio z / x(z) is replaced by its limit 1.
const Z_EPSILON: f64 = 1e-8;

/// SABR parameter validation errors.
///
/// # Examples
///
/// ```
/// use pricer_models::models::sabr::SabrError;
///
/// let err = SabrError::InvalidAlpha(-0.1);
/// assert!(format!("{}", err).contains("-0.1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SabrError {
    /// Initial volatility must be positive.
    #[error("Invalid SABR alpha: {0} (must be positive)")]
    InvalidAlpha(f64),

    /// Beta must lie in [0, 1].
    #[error("Invalid SABR beta: {0} (must lie in [0, 1])")]
    InvalidBeta(f64),

    /// Correlation must lie in (-1, 1).
    #[error("Invalid SABR rho: {0} (must lie in (-1, 1))")]
    InvalidRho(f64),

    /// Vol-of-vol must be non-negative.
    #[error("Invalid SABR nu: {0} (must be non-negative)")]
    InvalidNu(f64),
}

impl From<SabrError> for PricingError {
    fn from(err: SabrError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// SABR model parameters with the Hagan implied volatility approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SabrModel {
    alpha: f64,
    beta: f64,
    rho: f64,
    nu: f64,
}

impl SabrModel {
    /// Creates a validated SABR model.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Initial volatility (> 0)
    /// * `beta` - CEV exponent in [0, 1]
    /// * `rho` - Correlation in (-1, 1)
    /// * `nu` - Vol-of-vol (>= 0)
    ///
    /// # Errors
    ///
    /// The first parameter out of range, checked in the order above.
    /// NaN parameters are rejected.
    pub fn new(alpha: f64, beta: f64, rho: f64, nu: f64) -> Result<Self, SabrError> {
        if !(alpha > 0.0) {
            return Err(SabrError::InvalidAlpha(alpha));
        }
        if !(0.0..=1.0).contains(&beta) {
            return Err(SabrError::InvalidBeta(beta));
        }
        if !(rho > -1.0 && rho < 1.0) {
            return Err(SabrError::InvalidRho(rho));
        }
        if !(nu >= 0.0) {
            return Err(SabrError::InvalidNu(nu));
        }
        Ok(Self {
            alpha,
            beta,
            rho,
            nu,
        })
    }

    /// Initial volatility.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// CEV exponent.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Forward/volatility correlation.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Vol-of-vol.
    #[inline]
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Time-correction bracket shared by both branches.
    ///
    /// `fk_beta` is (F K)^((1-β)/2), which is F^(1-β) at the money.
    fn time_correction(&self, fk_beta: f64, maturity: f64) -> f64 {
        let one_minus_beta = 1.0 - self.beta;
        let t1 = one_minus_beta * one_minus_beta * self.alpha * self.alpha
            / (24.0 * fk_beta * fk_beta);
        let t2 = self.rho * self.beta * self.nu * self.alpha / (4.0 * fk_beta);
        let t3 = (2.0 - 3.0 * self.rho * self.rho) * self.nu * self.nu / 24.0;
        1.0 + (t1 + t2 + t3) * maturity
    }

    /// Hagan implied Black volatility for forward `forward`, strike `strike`
    /// and maturity `maturity`.
    ///
    /// Returns zero when the forward or strike is not positive.
    ///
    /// ```text
    /// ATM:   σ = α / F^(1-β) · [1 + (...)·T]
    /// other: σ = α / ((FK)^((1-β)/2) · D) · z/x(z) · [1 + (...)·T]
    /// z    = (ν/α) (FK)^((1-β)/2) ln(F/K)
    /// x(z) = ln[(√(1 - 2ρz + z²) + z - ρ) / (1 - ρ)]
    /// D    = 1 + (1-β)² ln²(F/K)/24 + (1-β)⁴ ln⁴(F/K)/1920
    /// ```
    pub fn implied_vol(&self, forward: f64, strike: f64, maturity: f64) -> f64 {
        if forward <= 0.0 || strike <= 0.0 {
            return 0.0;
        }

        let one_minus_beta = 1.0 - self.beta;

        if forward == strike {
            let f_beta = forward.powf(one_minus_beta);
            return self.alpha / f_beta * self.time_correction(f_beta, maturity);
        }

        let log_fk = (forward / strike).ln();
        let fk_beta = (forward * strike).powf(one_minus_beta / 2.0);
        let z = self.nu / self.alpha * fk_beta * log_fk;

        let z_over_x = if z.abs() < Z_EPSILON {
            1.0
        } else {
            let x = ((1.0 - 2.0 * self.rho * z + z * z).sqrt() + z - self.rho) / (1.0 - self.rho);
            z / x.ln()
        };

        let log2 = log_fk * log_fk;
        let b2 = one_minus_beta * one_minus_beta;
        let denominator = fk_beta * (1.0 + b2 * log2 / 24.0 + b2 * b2 * log2 * log2 / 1920.0);

        self.alpha / denominator * z_over_x * self.time_correction(fk_beta, maturity)
    }
}
