//! # gs-prob
//!
//! Probability building blocks for GridStat.
//!
//! This crate hosts the pure density/mass functions the posterior engine
//! evaluates over parameter grids:
//! - per-distribution `logpdf`/`logpmf` modules (binomial, beta, uniform,
//!   normal, Cauchy)
//! - the tagged [`Density`] specification used for priors and 1-D kernels
//! - ready-made [`LogLikelihood`](gs_core::LogLikelihood) implementations
//! - small numeric helpers (`logsumexp`, pairwise summation)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod beta;
pub mod binomial;
pub mod cauchy;
pub mod density;
pub mod likelihood;
pub mod math;
pub mod normal;
pub mod uniform;

pub use density::Density;
pub use likelihood::{BinomialLikelihood, DensityLikelihood, FnLikelihood, NormalLikelihood};
