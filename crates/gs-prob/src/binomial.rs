//! Binomial distribution utilities.

use gs_core::{Error, Result};

use crate::math::ln_choose;

/// Log-PMF of a Binomial distribution `Binom(n, p)` at count `k`.
///
/// `p` is an evaluation point, not a fixed parameter: values outside `[0,1]`
/// are out of support and yield `NEG_INFINITY` rather than an error, so the
/// kernel can be swept across any grid.
pub fn logpmf(k: u64, n: u64, p: f64) -> Result<f64> {
    if k > n {
        return Err(Error::InvalidParameter(format!("k must be <= n, got k={} n={}", k, n)));
    }
    if p.is_nan() {
        return Err(Error::InvalidParameter("p must not be NaN".into()));
    }
    if !(0.0..=1.0).contains(&p) {
        return Ok(f64::NEG_INFINITY);
    }

    if p == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    if p == 1.0 {
        return Ok(if k == n { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    let nf = n as f64;
    Ok(ln_choose(n, k) + kf * p.ln() + (nf - kf) * (1.0 - p).ln())
}
