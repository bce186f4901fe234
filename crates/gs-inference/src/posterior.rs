//! Posterior evaluation over parameter grids.
//!
//! [`evaluate`] computes `likelihood(data, p) × ∏ prior_i(p_i)` pointwise
//! over a joint grid and normalizes the result into a discrete probability
//! mass function. All per-point work happens in log space; normalization
//! shifts by the maximum log value before exponentiating, so products whose
//! magnitudes differ by hundreds of orders across the grid normalize
//! without underflow.

use rayon::prelude::*;
use serde::Serialize;

use gs_core::{Error, JointGrid, LogLikelihood, Result};
use gs_prob::Density;
use gs_prob::math::pairwise_sum;

/// Normalized posterior probability mass function over a joint grid.
///
/// Invariants: every entry is `>= 0` and the entries sum to 1 (within
/// floating-point tolerance). Entries are stored in the grid's row-major
/// flat order. Created by [`evaluate`]; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct PosteriorGrid {
    grid: JointGrid,
    probs: Vec<f64>,
    log_evidence: f64,
}

/// Evaluate the posterior PMF of `likelihood` under per-axis `priors` over `grid`.
///
/// `priors[i]` is the prior density for axis `i`; the joint prior is their
/// product (outer-product evaluation). The grid resolution is entirely the
/// caller's contract: the engine normalizes exactly over the supplied
/// points and makes no promise about discretization error, and does not
/// refine or warn on coarse grids.
///
/// Errors:
/// - `InvalidParameter` — prior count or likelihood dimension does not
///   match the grid, a prior has malformed parameters, or the likelihood
///   produced a NaN.
/// - `DegenerateGrid` — the joint density is zero at every grid point
///   (disjoint likelihood/prior supports on this discretization), or
///   unbounded (infinite density) at some grid point.
pub fn evaluate<L>(likelihood: &L, grid: &JointGrid, priors: &[Density]) -> Result<PosteriorGrid>
where
    L: LogLikelihood + ?Sized,
{
    let ndim = grid.ndim();
    if priors.len() != ndim {
        return Err(Error::InvalidParameter(format!(
            "got {} prior(s) for a {}-dimensional grid",
            priors.len(),
            ndim
        )));
    }
    if likelihood.dim() != ndim {
        return Err(Error::InvalidParameter(format!(
            "likelihood expects {} parameter(s) but the grid has {}",
            likelihood.dim(),
            ndim
        )));
    }
    for prior in priors {
        prior.validate()?;
    }

    // Per-point log joint density, collected in flat-index order so the
    // result does not depend on how rayon schedules the work.
    let log_joint: Vec<f64> = (0..grid.len())
        .into_par_iter()
        .map_init(
            || vec![0.0; ndim],
            |point, flat| -> Result<f64> {
                grid.fill_point(flat, point);
                let mut lp = likelihood.log_likelihood(point)?;
                for (prior, &x) in priors.iter().zip(point.iter()) {
                    lp += prior.logpdf(x)?;
                }
                if lp.is_nan() {
                    return Err(Error::InvalidParameter(format!(
                        "log joint density is NaN at grid point {:?}",
                        point
                    )));
                }
                Ok(lp)
            },
        )
        .collect::<Result<Vec<f64>>>()?;

    let max = log_joint.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return Err(Error::DegenerateGrid(
            "joint density is zero at every grid point; \
             likelihood and prior supports do not overlap on this grid"
                .into(),
        ));
    }
    if max == f64::INFINITY {
        // An unbounded density at a single point (e.g. Beta(a<1) evaluated
        // exactly at 0) has no meaningful discretized PMF.
        return Err(Error::DegenerateGrid(
            "joint density is unbounded at a grid point; the discretized PMF is undefined".into(),
        ));
    }

    let mut probs: Vec<f64> = log_joint.iter().map(|&lp| (lp - max).exp()).collect();
    let total = pairwise_sum(&probs);
    for p in probs.iter_mut() {
        *p /= total;
    }
    let log_evidence = max + total.ln();

    Ok(PosteriorGrid { grid: grid.clone(), probs, log_evidence })
}

impl PosteriorGrid {
    /// The joint grid the PMF is defined over.
    pub fn grid(&self) -> &JointGrid {
        &self.grid
    }

    /// Number of parameter dimensions.
    pub fn ndim(&self) -> usize {
        self.grid.ndim()
    }

    /// Number of joint grid points.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Always `false` for an evaluated posterior.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Probability mass at flat index `flat`, if in range.
    pub fn prob(&self, flat: usize) -> Option<f64> {
        self.probs.get(flat).copied()
    }

    /// All probability masses in row-major flat order.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Log of the normalizing constant `Σ_p L(data, p) · Pr(p)` over the grid.
    pub fn log_evidence(&self) -> f64 {
        self.log_evidence
    }

    /// Highest-probability grid point and its mass.
    pub fn mode(&self) -> (Vec<f64>, f64) {
        let (flat, &p) = self
            .probs
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .expect("posterior grid is never empty");
        (self.grid.point(flat), p)
    }

    /// Posterior mean of the parameter on `axis`.
    pub fn mean(&self, axis: usize) -> Result<f64> {
        Ok(self.marginal(axis)?.mean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_core::Grid;
    use gs_prob::{BinomialLikelihood, FnLikelihood};

    fn unit_grid() -> JointGrid {
        JointGrid::from(Grid::from_step(0.0, 1.0, 0.01).unwrap())
    }

    #[test]
    fn test_posterior_sums_to_one() {
        let model = BinomialLikelihood { successes: 5, trials: 10 };
        let grid = unit_grid();
        let priors = [Density::Beta { alpha: 2.0, beta: 2.0 }];
        let post = evaluate(&model, &grid, &priors).unwrap();

        let total: f64 = post.probs().iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "total={}", total);
        assert!(post.probs().iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_underflow_resistant_normalization() {
        // Log joint densities around -100000: naive exp underflows to zero
        // everywhere; the max-shift keeps the shape.
        let model = FnLikelihood::new(1, |p: &[f64]| Ok(-100_000.0 - p[0] * p[0]));
        let grid = JointGrid::from(Grid::from_step(-1.0, 1.0, 0.1).unwrap());
        let priors = [Density::Uniform { lower: -1.0, upper: 1.0 }];
        let post = evaluate(&model, &grid, &priors).unwrap();

        let total: f64 = post.probs().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        // Peak at 0.0, the grid midpoint.
        let (mode, _) = post.mode();
        assert!(mode[0].abs() < 1e-12, "mode={:?}", mode);
    }

    #[test]
    fn test_prior_count_mismatch() {
        let model = BinomialLikelihood { successes: 5, trials: 10 };
        let grid = unit_grid();
        let err = evaluate(&model, &grid, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_likelihood_dim_mismatch() {
        let model = FnLikelihood::new(2, |_: &[f64]| Ok(0.0));
        let grid = unit_grid();
        let priors = [Density::Uniform { lower: 0.0, upper: 1.0 }];
        let err = evaluate(&model, &grid, &priors).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_invalid_prior_rejected_before_evaluation() {
        let model = BinomialLikelihood { successes: 5, trials: 10 };
        let grid = unit_grid();
        let priors = [Density::Beta { alpha: -1.0, beta: 2.0 }];
        assert!(evaluate(&model, &grid, &priors).is_err());
    }

    #[test]
    fn test_nan_likelihood_rejected() {
        let model = FnLikelihood::new(1, |_: &[f64]| Ok(f64::NAN));
        let grid = unit_grid();
        let priors = [Density::Uniform { lower: 0.0, upper: 1.0 }];
        let err = evaluate(&model, &grid, &priors).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_unbounded_density_rejected() {
        // Beta(0.5, 0.5) is unbounded at 0 and 1, both on this grid.
        let model = FnLikelihood::new(1, |_: &[f64]| Ok(0.0));
        let grid = unit_grid();
        let priors = [Density::Beta { alpha: 0.5, beta: 0.5 }];
        let err = evaluate(&model, &grid, &priors).unwrap_err();
        assert!(matches!(err, Error::DegenerateGrid(_)));
    }

    #[test]
    fn test_deterministic_across_runs() {
        let model = BinomialLikelihood { successes: 7, trials: 20 };
        let grid = unit_grid();
        let priors = [Density::Beta { alpha: 2.0, beta: 2.0 }];
        let a = evaluate(&model, &grid, &priors).unwrap();
        let b = evaluate(&model, &grid, &priors).unwrap();
        assert_eq!(a.probs(), b.probs());
        assert_eq!(a.log_evidence(), b.log_evidence());
    }

    #[test]
    fn test_log_evidence_matches_direct_sum() {
        // Coarse grid with moderate magnitudes: direct linear-space sum is
        // exact enough to cross-check the log-space path.
        let model = BinomialLikelihood { successes: 3, trials: 8 };
        let grid = JointGrid::from(Grid::from_step(0.1, 0.9, 0.1).unwrap());
        let prior = Density::Uniform { lower: 0.0, upper: 1.0 };
        let post = evaluate(&model, &grid, std::slice::from_ref(&prior)).unwrap();

        let direct: f64 = grid
            .points()
            .map(|(_, p)| {
                gs_prob::binomial::logpmf(3, 8, p[0]).unwrap().exp() * prior.pdf(p[0]).unwrap()
            })
            .sum();
        assert!((post.log_evidence() - direct.ln()).abs() < 1e-12);
    }
}
