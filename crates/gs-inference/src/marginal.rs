//! Axis-wise marginalization of joint posterior grids.

use serde::Serialize;

use gs_core::{Error, Grid, Result};

use crate::posterior::PosteriorGrid;

/// 1-D marginal probability mass function over one axis of a joint grid.
///
/// Invariants: length equals the axis cardinality; entries sum to 1
/// whenever the source posterior does.
#[derive(Debug, Clone, Serialize)]
pub struct MarginalGrid {
    grid: Grid,
    probs: Vec<f64>,
}

impl PosteriorGrid {
    /// Marginal distribution of the parameter on `axis`, obtained by
    /// summing the joint PMF over every other axis.
    ///
    /// Fails with `InvalidAxis` when `axis >= ndim()`. For a 1-D posterior,
    /// `marginal(0)` is the identity projection.
    pub fn marginal(&self, axis: usize) -> Result<MarginalGrid> {
        let ndim = self.ndim();
        if axis >= ndim {
            return Err(Error::InvalidAxis { axis, ndim });
        }

        let shape = self.grid().shape();
        // Row-major layout: consecutive flat indices step the last axis, and
        // axis `i` repeats with period `stride = prod(shape[i+1..])`.
        let stride: usize = shape[axis + 1..].iter().product();
        let k = shape[axis];

        let mut probs = vec![0.0; k];
        for (flat, &p) in self.probs().iter().enumerate() {
            probs[(flat / stride) % k] += p;
        }

        let grid = self.grid().axis(axis).expect("axis validated above").clone();
        Ok(MarginalGrid { grid, probs })
    }
}

impl MarginalGrid {
    /// The axis grid the marginal is defined over.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Always `false` (the source axis has at least one point).
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Probability mass at index `i`, if in range.
    pub fn prob(&self, i: usize) -> Option<f64> {
        self.probs.get(i).copied()
    }

    /// All probability masses in axis order.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Mean of the marginal distribution.
    pub fn mean(&self) -> f64 {
        self.grid.points().iter().zip(self.probs.iter()).map(|(&x, &p)| x * p).sum()
    }

    /// Highest-probability grid value and its mass.
    pub fn mode(&self) -> (f64, f64) {
        let (i, &p) = self
            .probs
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .expect("marginal grid is never empty");
        (self.grid.points()[i], p)
    }
}
