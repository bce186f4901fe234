//! # gs-inference
//!
//! Grid-approximation posterior engine for GridStat.
//!
//! This crate provides:
//! - [`evaluate`]: likelihood × prior over a [`JointGrid`](gs_core::JointGrid),
//!   normalized in log space into a [`PosteriorGrid`].
//! - [`PosteriorGrid::marginal`]: axis-wise reduction of a joint posterior
//!   to per-parameter [`MarginalGrid`]s.
//! - [`sample_weighted`]: seedable weighted resampling from grid values.
//!
//! Every operation is a pure computation over its inputs; the only
//! parallelism is inside [`evaluate`], which joins into an index-ordered
//! buffer and reduces pairwise so results are identical across thread
//! counts.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Axis-wise marginalization of joint posterior grids.
pub mod marginal;
/// Posterior evaluation over parameter grids.
pub mod posterior;
/// Weighted sampling with replacement from grid values.
pub mod sampler;

pub use marginal::MarginalGrid;
pub use posterior::{PosteriorGrid, evaluate};
pub use sampler::sample_weighted;
