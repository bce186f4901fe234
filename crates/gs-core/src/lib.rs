//! # gs-core
//!
//! Core data model for GridStat.
//!
//! This crate provides:
//! - The [`Error`] type shared by every GridStat crate.
//! - [`Grid`] and [`JointGrid`]: validated, ordered discretizations of one
//!   or more continuous parameter domains.
//! - The [`LogLikelihood`] trait: the seam between caller-supplied models
//!   and the posterior evaluator in `gs-inference`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod grid;
pub mod traits;

pub use error::{Error, Result};
pub use grid::{Grid, JointGrid};
pub use traits::LogLikelihood;
