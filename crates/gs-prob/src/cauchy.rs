//! Cauchy distribution utilities.

use gs_core::{Error, Result};

/// Natural log of π.
const LN_PI: f64 = 1.144_729_885_849_400_2;

/// Log-PDF of a Cauchy distribution at `x` with location `x0` and scale `gamma`.
///
/// `log p(x) = -ln(π) - ln(gamma) - ln(1 + z^2)`, `z = (x - x0) / gamma`.
pub fn logpdf(x: f64, x0: f64, gamma: f64) -> Result<f64> {
    if !x0.is_finite() {
        return Err(Error::InvalidParameter(format!("location must be finite, got {}", x0)));
    }
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(Error::InvalidParameter(format!("scale must be finite and > 0, got {}", gamma)));
    }
    let z = (x - x0) / gamma;
    Ok(-LN_PI - gamma.ln() - (z * z).ln_1p())
}
