//! Weighted sampling with replacement from grid values.
//!
//! The generator is always an explicit handle: callers either pass their
//! own `&mut impl Rng` or use the `*_seeded` entry points, which build a
//! `StdRng` from a `u64` seed. Nothing global is touched, so concurrent
//! calls with independent generators stay reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gs_core::{Error, Result};

use crate::marginal::MarginalGrid;
use crate::posterior::PosteriorGrid;

/// Validated cumulative weights for inverse-CDF draws.
struct CumulativeWeights {
    cum: Vec<f64>,
    total: f64,
}

impl CumulativeWeights {
    fn new(weights: &[f64]) -> Result<Self> {
        let mut cum = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "weight [{}] must be finite and >= 0, got {}",
                    i, w
                )));
            }
            total += w;
            cum.push(total);
        }
        if total <= 0.0 {
            return Err(Error::DegenerateDistribution("every sampling weight is zero".into()));
        }
        Ok(Self { cum, total })
    }

    /// Index `i` is drawn with probability `weights[i] / total`: a uniform
    /// draw `u` in `[0, total)` selects the first index whose cumulative
    /// weight exceeds `u`, so zero-weight entries are never selected.
    fn draw(&self, rng: &mut impl Rng) -> usize {
        let u = rng.random::<f64>() * self.total;
        let idx = self.cum.partition_point(|&c| c <= u);
        // u can round up to exactly `total` when total is large; clamp the
        // one-past-the-end result that produces.
        idx.min(self.cum.len() - 1)
    }
}

/// Draw `count` values with replacement from `values`, where `values[i]` is
/// drawn with probability `weights[i] / Σ weights`.
///
/// Weights need not be normalized. Errors: `InvalidParameter` on a length
/// mismatch or a negative/non-finite weight, `DegenerateDistribution` when
/// every weight is zero.
pub fn sample_weighted(
    values: &[f64],
    weights: &[f64],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<f64>> {
    if values.len() != weights.len() {
        return Err(Error::InvalidParameter(format!(
            "got {} value(s) but {} weight(s)",
            values.len(),
            weights.len()
        )));
    }
    let cw = CumulativeWeights::new(weights)?;
    Ok((0..count).map(|_| values[cw.draw(rng)]).collect())
}

impl MarginalGrid {
    /// Draw `count` grid values according to the marginal PMF.
    pub fn sample(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<f64>> {
        sample_weighted(self.grid().points(), self.probs(), count, rng)
    }

    /// [`sample`](Self::sample) with a fresh `StdRng` seeded from `seed`.
    pub fn sample_seeded(&self, count: usize, seed: u64) -> Result<Vec<f64>> {
        self.sample(count, &mut StdRng::seed_from_u64(seed))
    }
}

impl PosteriorGrid {
    /// Draw `count` joint grid points according to the posterior PMF.
    pub fn sample(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<Vec<f64>>> {
        let cw = CumulativeWeights::new(self.probs())?;
        Ok((0..count).map(|_| self.grid().point(cw.draw(rng))).collect())
    }

    /// [`sample`](Self::sample) with a fresh `StdRng` seeded from `seed`.
    pub fn sample_seeded(&self, count: usize, seed: u64) -> Result<Vec<Vec<f64>>> {
        self.sample(count, &mut StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_count_zero_returns_empty() {
        let out = sample_weighted(&[0.0, 1.0], &[1.0, 1.0], 0, &mut rng(1)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_draws_come_from_values() {
        let values = [0.0, 1.0, 2.0];
        let out = sample_weighted(&values, &[1.0, 2.0, 3.0], 500, &mut rng(2)).unwrap();
        assert_eq!(out.len(), 500);
        assert!(out.iter().all(|v| values.contains(v)));
    }

    #[test]
    fn test_zero_weight_value_never_drawn() {
        let out = sample_weighted(&[0.0, 1.0, 2.0], &[1.0, 0.0, 1.0], 2000, &mut rng(3)).unwrap();
        assert!(out.iter().all(|&v| v != 1.0));
    }

    #[test]
    fn test_unnormalized_weights_accepted() {
        // Same ratios, different scales: identical seeds give identical draws.
        let a = sample_weighted(&[1.0, 2.0], &[1.0, 3.0], 100, &mut rng(7)).unwrap();
        let b = sample_weighted(&[1.0, 2.0], &[250.0, 750.0], 100, &mut rng(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_zero_weights() {
        let err = sample_weighted(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0], 5, &mut rng(4)).unwrap_err();
        assert!(matches!(err, Error::DegenerateDistribution(_)));
    }

    #[test]
    fn test_invalid_weights() {
        assert!(sample_weighted(&[0.0], &[-1.0], 1, &mut rng(5)).is_err());
        assert!(sample_weighted(&[0.0], &[f64::NAN], 1, &mut rng(5)).is_err());
        assert!(sample_weighted(&[0.0, 1.0], &[1.0], 1, &mut rng(5)).is_err());
    }

    #[test]
    fn test_seeded_draws_reproducible() {
        let values = [0.0, 0.5, 1.0];
        let weights = [0.2, 0.3, 0.5];
        let a = sample_weighted(&values, &weights, 50, &mut rng(42)).unwrap();
        let b = sample_weighted(&values, &weights, 50, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empirical_frequencies_track_weights() {
        let values = [0.0, 1.0, 2.0, 3.0];
        let weights = [0.1, 0.2, 0.3, 0.4];
        let n = 100_000;
        let out = sample_weighted(&values, &weights, n, &mut rng(42)).unwrap();
        for (i, &v) in values.iter().enumerate() {
            let freq = out.iter().filter(|&&x| x == v).count() as f64 / n as f64;
            // ~6 standard errors at n=100k.
            assert!(
                (freq - weights[i]).abs() < 0.01,
                "value {}: freq={} expected={}",
                v,
                freq,
                weights[i]
            );
        }
    }
}
