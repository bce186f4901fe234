//! Parameter grids: ordered discretizations of continuous parameter domains.
//!
//! A [`Grid`] is a strictly increasing, finite sequence of candidate points
//! for one parameter. A [`JointGrid`] is the Cartesian product of several
//! 1-D grids, exposed as a row-major flat index space (last axis fastest)
//! so that axis-wise marginalization is well defined.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Relative tolerance (in units of one step) used when deciding whether
/// `stop` lands on a grid point in [`Grid::from_step`].
const STEP_TOL: f64 = 1e-9;

/// Ordered, finite sequence of candidate points for one parameter dimension.
///
/// Invariant: non-empty, all points finite, strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Grid {
    points: Vec<f64>,
}

impl Grid {
    /// Build a grid from an explicit point sequence.
    ///
    /// The sequence must be non-empty, finite, and strictly increasing.
    pub fn from_points(points: Vec<f64>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidGrid("grid must contain at least one point".into()));
        }
        for (i, &p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(Error::InvalidGrid(format!("point [{}] is not finite: {}", i, p)));
            }
        }
        for (i, w) in points.windows(2).enumerate() {
            if w[1] <= w[0] {
                return Err(Error::InvalidGrid(format!(
                    "points must be strictly increasing, but [{}]={} >= [{}]={}",
                    i, w[0], i + 1, w[1]
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build the grid `start, start + step, ... <= stop`.
    ///
    /// The point count is fixed up front from `(stop - start) / step` (with a
    /// relative tolerance of one part in 10^9 of a step) and each point is
    /// computed as `start + i * step`, so accumulation drift cannot drop or
    /// duplicate the endpoint.
    pub fn from_step(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(Error::InvalidGrid(format!(
                "bounds must be finite, got start={} stop={}",
                start, stop
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidGrid(format!("step must be finite and > 0, got {}", step)));
        }
        if start > stop {
            return Err(Error::InvalidGrid(format!(
                "start must be <= stop, got start={} stop={}",
                start, stop
            )));
        }

        let n_steps = ((stop - start) / step + STEP_TOL).floor();
        let n = n_steps as usize + 1;
        let points: Vec<f64> = (0..n).map(|i| start + (i as f64) * step).collect();
        Self::from_points(points)
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` (a validated grid has at least one point); kept for
    /// API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at index `i`, if in range.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.points.get(i).copied()
    }

    /// The full ordered point sequence.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Smallest grid point.
    pub fn min(&self) -> f64 {
        self.points[0]
    }

    /// Largest grid point.
    pub fn max(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}

impl TryFrom<Vec<f64>> for Grid {
    type Error = Error;

    fn try_from(points: Vec<f64>) -> Result<Self> {
        Self::from_points(points)
    }
}

impl From<Grid> for Vec<f64> {
    fn from(grid: Grid) -> Self {
        grid.points
    }
}

/// Cartesian product of N 1-D grids as a row-major flat index space.
///
/// Flat index `f` decodes to the multi-index `(i_0, ..., i_{N-1})` with the
/// last axis varying fastest; axis order follows construction order. The
/// row-major layout is part of the contract: the marginalizer's axis sums
/// depend on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointGrid {
    axes: Vec<Grid>,
    shape: Vec<usize>,
    len: usize,
}

impl JointGrid {
    /// Combine per-parameter grids into a joint grid.
    ///
    /// Fails with `InvalidGrid` if `axes` is empty or the total point count
    /// overflows `usize` (grid approximation is exponential in dimension;
    /// the product is checked rather than assumed).
    pub fn new(axes: Vec<Grid>) -> Result<Self> {
        if axes.is_empty() {
            return Err(Error::InvalidGrid("joint grid needs at least one axis".into()));
        }
        let shape: Vec<usize> = axes.iter().map(Grid::len).collect();
        let mut len: usize = 1;
        for &k in &shape {
            len = len
                .checked_mul(k)
                .ok_or_else(|| Error::InvalidGrid("joint grid point count overflows".into()))?;
        }
        Ok(Self { axes, shape, len })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Per-axis point counts.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of joint grid points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed joint grid.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The 1-D grid for axis `i`, if in range.
    pub fn axis(&self, i: usize) -> Option<&Grid> {
        self.axes.get(i)
    }

    /// All axes in construction order.
    pub fn axes(&self) -> &[Grid] {
        &self.axes
    }

    /// Decode a flat index into the joint point, writing one coordinate per
    /// axis into `out`.
    ///
    /// Panics if `flat` is out of range or `out.len() != ndim()`; both are
    /// internal-contract violations, not caller-input conditions.
    pub fn fill_point(&self, flat: usize, out: &mut [f64]) {
        assert!(flat < self.len, "flat index {} out of range {}", flat, self.len);
        assert_eq!(out.len(), self.ndim());
        let mut rem = flat;
        for i in (0..self.axes.len()).rev() {
            let k = self.shape[i];
            out[i] = self.axes[i].points()[rem % k];
            rem /= k;
        }
    }

    /// Decode a flat index into an owned joint point.
    pub fn point(&self, flat: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.ndim()];
        self.fill_point(flat, &mut out);
        out
    }

    /// Iterate over `(flat, point)` pairs in flat order.
    pub fn points(&self) -> impl Iterator<Item = (usize, Vec<f64>)> + '_ {
        (0..self.len).map(move |flat| (flat, self.point(flat)))
    }
}

impl From<Grid> for JointGrid {
    fn from(grid: Grid) -> Self {
        let len = grid.len();
        Self { shape: vec![len], axes: vec![grid], len }
    }
}
