//! Ready-made likelihood kernels.
//!
//! Each kernel owns its observed data and implements
//! [`LogLikelihood`](gs_core::LogLikelihood) over a parameter point. Zero
//! likelihood (a point outside the model's support, e.g. `sigma <= 0`) is
//! `NEG_INFINITY`; errors are reserved for wrong-dimension points.

use gs_core::{Error, LogLikelihood, Result};

use crate::{binomial, normal};
use crate::density::Density;

fn check_dim(expected: usize, point: &[f64]) -> Result<()> {
    if point.len() != expected {
        return Err(Error::InvalidParameter(format!(
            "expected a {}-dimensional point, got {}",
            expected,
            point.len()
        )));
    }
    Ok(())
}

/// Binomial likelihood kernel: `successes` out of `trials`, parameter θ.
#[derive(Debug, Clone)]
pub struct BinomialLikelihood {
    /// Observed success count.
    pub successes: u64,
    /// Number of trials.
    pub trials: u64,
}

impl LogLikelihood for BinomialLikelihood {
    fn dim(&self) -> usize {
        1
    }

    fn log_likelihood(&self, point: &[f64]) -> Result<f64> {
        check_dim(1, point)?;
        binomial::logpmf(self.successes, self.trials, point[0])
    }
}

/// Normal likelihood kernel over a vector of observations, parameters
/// `(mu, sigma)` — the joint location/scale estimation case.
#[derive(Debug, Clone)]
pub struct NormalLikelihood {
    /// Observed data points.
    pub observations: Vec<f64>,
}

impl LogLikelihood for NormalLikelihood {
    fn dim(&self) -> usize {
        2
    }

    fn log_likelihood(&self, point: &[f64]) -> Result<f64> {
        check_dim(2, point)?;
        let (mu, sigma) = (point[0], point[1]);
        // sigma is a grid coordinate here, so a non-positive value is out of
        // support rather than a parameter error.
        if sigma <= 0.0 || !sigma.is_finite() || !mu.is_finite() {
            return Ok(f64::NEG_INFINITY);
        }
        let mut total = 0.0;
        for &y in &self.observations {
            total += normal::logpdf(y, mu, sigma)?;
        }
        Ok(total)
    }
}

/// Adapter using any 1-D [`Density`] as a likelihood kernel.
#[derive(Debug, Clone)]
pub struct DensityLikelihood(pub Density);

impl LogLikelihood for DensityLikelihood {
    fn dim(&self) -> usize {
        1
    }

    fn log_likelihood(&self, point: &[f64]) -> Result<f64> {
        check_dim(1, point)?;
        self.0.logpdf(point[0])
    }
}

/// Closure adapter for caller-supplied models.
pub struct FnLikelihood<F> {
    dim: usize,
    f: F,
}

impl<F> FnLikelihood<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    /// Wrap a closure returning the log-likelihood at a `dim`-dimensional point.
    pub fn new(dim: usize, f: F) -> Self {
        Self { dim, f }
    }
}

impl<F> LogLikelihood for FnLikelihood<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn log_likelihood(&self, point: &[f64]) -> Result<f64> {
        check_dim(self.dim, point)?;
        (self.f)(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_kernel_matches_module() {
        let model = BinomialLikelihood { successes: 5, trials: 10 };
        let lp = model.log_likelihood(&[0.4]).unwrap();
        assert_eq!(lp, binomial::logpmf(5, 10, 0.4).unwrap());
        assert!(model.log_likelihood(&[0.4, 0.5]).is_err());
    }

    #[test]
    fn test_normal_kernel_sums_observations() {
        let obs = vec![1.0, 2.0, 3.0];
        let model = NormalLikelihood { observations: obs.clone() };
        let lp = model.log_likelihood(&[2.0, 1.5]).unwrap();
        let expected: f64 = obs.iter().map(|&y| normal::logpdf(y, 2.0, 1.5).unwrap()).sum();
        assert!((lp - expected).abs() < 1e-12);
    }

    #[test]
    fn test_normal_kernel_zero_outside_support() {
        let model = NormalLikelihood { observations: vec![1.0] };
        assert_eq!(model.log_likelihood(&[0.0, 0.0]).unwrap(), f64::NEG_INFINITY);
        assert_eq!(model.log_likelihood(&[0.0, -1.0]).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_fn_likelihood() {
        let model = FnLikelihood::new(1, |p: &[f64]| Ok(-p[0] * p[0]));
        assert_eq!(model.dim(), 1);
        assert_eq!(model.log_likelihood(&[2.0]).unwrap(), -4.0);
        assert!(model.log_likelihood(&[]).is_err());
    }
}
