//! Continuous uniform distribution utilities.

use gs_core::{Error, Result};

/// Log-PDF of a Uniform distribution over `[lower, upper]` at `x`.
///
/// `-ln(upper - lower)` inside the interval, `NEG_INFINITY` outside.
pub fn logpdf(x: f64, lower: f64, upper: f64) -> Result<f64> {
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(Error::InvalidParameter(format!(
            "uniform bounds must be finite with lower < upper, got [{}, {}]",
            lower, upper
        )));
    }
    if x < lower || x > upper {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(-(upper - lower).ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval() {
        assert_eq!(logpdf(0.5, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(logpdf(0.0, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(logpdf(1.0, 0.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_density_value() {
        // Width 4 => density 0.25 everywhere inside.
        let lp = logpdf(1.0, -1.0, 3.0).unwrap();
        assert!((lp - 0.25f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_support() {
        assert_eq!(logpdf(-0.5, 0.0, 1.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(logpdf(1.5, 0.0, 1.0).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(logpdf(0.5, 1.0, 1.0).is_err());
        assert!(logpdf(0.5, 2.0, 1.0).is_err());
        assert!(logpdf(0.5, f64::NEG_INFINITY, 1.0).is_err());
    }
}
