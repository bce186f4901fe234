//! Tagged density specification.
//!
//! A [`Density`] names one member of the closed family set
//! {Beta, Uniform, Normal, Cauchy, Binomial} together with its parameters.
//! Dispatch is a `match` over variants rather than a by-name lookup, so the
//! set of supported families is checked at compile time. The serde tag makes
//! the same enum usable directly in JSON analysis specs.

use serde::{Deserialize, Serialize};

use gs_core::Result;

use crate::{beta, binomial, cauchy, normal, uniform};

/// A density/mass function family with explicit parameters.
///
/// Immutable once constructed; evaluation is pure. `Binomial` evaluates at
/// `x = p` (success probability), which makes the enum double as a
/// single-parameter likelihood kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Density {
    /// Beta distribution with shape parameters `alpha > 0`, `beta > 0`.
    Beta {
        /// First shape parameter.
        alpha: f64,
        /// Second shape parameter.
        beta: f64,
    },
    /// Continuous uniform over `[lower, upper]`, `lower < upper`.
    Uniform {
        /// Lower bound of the support.
        lower: f64,
        /// Upper bound of the support.
        upper: f64,
    },
    /// Normal with mean `mu` and standard deviation `sigma > 0`.
    Normal {
        /// Mean.
        mu: f64,
        /// Standard deviation.
        sigma: f64,
    },
    /// Cauchy with location `location` and scale `scale > 0`.
    Cauchy {
        /// Location of the peak.
        location: f64,
        /// Half-width at half-maximum.
        scale: f64,
    },
    /// Binomial PMF for `successes` out of `trials`, evaluated at `x = p`.
    Binomial {
        /// Observed success count.
        successes: u64,
        /// Number of trials.
        trials: u64,
    },
}

impl Density {
    /// Check the fixed parameters once, without evaluating.
    ///
    /// Fails with `InvalidParameter` on non-positive scale/shape values,
    /// inverted uniform bounds, or `successes > trials`.
    pub fn validate(&self) -> Result<()> {
        // Evaluating at any point runs the same parameter checks; the
        // evaluation point itself can never fail (out-of-support is a
        // finite result, not an error).
        self.logpdf(0.5).map(|_| ())
    }

    /// Log-density (or log-mass) at `x`.
    pub fn logpdf(&self, x: f64) -> Result<f64> {
        match *self {
            Density::Beta { alpha, beta: b } => beta::logpdf(x, alpha, b),
            Density::Uniform { lower, upper } => uniform::logpdf(x, lower, upper),
            Density::Normal { mu, sigma } => normal::logpdf(x, mu, sigma),
            Density::Cauchy { location, scale } => cauchy::logpdf(x, location, scale),
            Density::Binomial { successes, trials } => binomial::logpmf(successes, trials, x),
        }
    }

    /// Density (or mass) at `x`; always non-negative.
    pub fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.logpdf(x)?.exp())
    }
}
