//! Beta distribution utilities.

use gs_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

#[inline]
fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// Log-PDF of a Beta(`a`, `b`) distribution at `x`.
///
/// Support: `0 <= x <= 1`; outside it the log-density is `NEG_INFINITY`.
/// At the endpoints the density is `0`, finite, or unbounded depending on
/// whether the corresponding shape parameter is above, at, or below 1.
pub fn logpdf(x: f64, a: f64, b: f64) -> Result<f64> {
    if !a.is_finite() || a <= 0.0 {
        return Err(Error::InvalidParameter(format!("alpha must be finite and > 0, got {}", a)));
    }
    if !b.is_finite() || b <= 0.0 {
        return Err(Error::InvalidParameter(format!("beta must be finite and > 0, got {}", b)));
    }
    if !(0.0..=1.0).contains(&x) {
        return Ok(f64::NEG_INFINITY);
    }

    let ln_norm = -ln_beta(a, b);
    if x == 0.0 {
        return Ok(match a.partial_cmp(&1.0).unwrap() {
            std::cmp::Ordering::Less => f64::INFINITY,
            std::cmp::Ordering::Equal => ln_norm,
            std::cmp::Ordering::Greater => f64::NEG_INFINITY,
        });
    }
    if x == 1.0 {
        return Ok(match b.partial_cmp(&1.0).unwrap() {
            std::cmp::Ordering::Less => f64::INFINITY,
            std::cmp::Ordering::Equal => ln_norm,
            std::cmp::Ordering::Greater => f64::NEG_INFINITY,
        });
    }

    Ok(ln_norm + (a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln())
}
