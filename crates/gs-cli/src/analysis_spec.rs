//! Analysis spec (JSON) parsing + semantic validation.
//!
//! A single JSON file drives one or more grid-approximation analyses: each
//! analysis names its observed data (as a likelihood choice), one grid and
//! one prior per parameter, and is evaluated independently.

use serde::Deserialize;
use std::path::Path;

use gs_core::{Grid, JointGrid, LogLikelihood, Result};
use gs_prob::{BinomialLikelihood, Density, NormalLikelihood};

/// Top-level analysis file: a list of independent analyses.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisFile {
    /// Analyses to run, in order.
    pub analyses: Vec<AnalysisSpec>,
}

/// One grid-approximation analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSpec {
    /// Name used in logs and output.
    pub name: String,
    /// Observed data + likelihood kernel.
    pub likelihood: LikelihoodSpec,
    /// One entry per model parameter, in axis order.
    pub parameters: Vec<ParameterSpec>,
}

/// Likelihood kernel choice with its observed data inline.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LikelihoodSpec {
    /// Binomial count data: parameter θ (success probability).
    Binomial {
        /// Observed success count.
        successes: u64,
        /// Number of trials.
        trials: u64,
    },
    /// Normal observations: parameters (mu, sigma).
    Normal {
        /// Observed data points.
        observations: Vec<f64>,
    },
}

impl LikelihoodSpec {
    /// Number of parameters the kernel estimates.
    pub fn dim(&self) -> usize {
        match self {
            LikelihoodSpec::Binomial { .. } => 1,
            LikelihoodSpec::Normal { .. } => 2,
        }
    }

    /// Materialize the kernel.
    pub fn build(&self) -> Box<dyn LogLikelihood> {
        match self {
            LikelihoodSpec::Binomial { successes, trials } => {
                Box::new(BinomialLikelihood { successes: *successes, trials: *trials })
            }
            LikelihoodSpec::Normal { observations } => {
                Box::new(NormalLikelihood { observations: observations.clone() })
            }
        }
    }
}

/// One parameter: its name, grid discretization, and prior.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name used in output.
    pub name: String,
    /// Grid discretization for this parameter.
    pub grid: GridSpec,
    /// Prior density for this parameter.
    pub prior: Density,
}

/// Grid definition: a range with a step, or explicit points.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GridSpec {
    /// `start, start+step, ... <= stop`.
    Range {
        /// First grid point.
        start: f64,
        /// Upper bound (included when on the step lattice).
        stop: f64,
        /// Spacing between points.
        step: f64,
    },
    /// Explicit strictly increasing point sequence.
    Points(Vec<f64>),
}

impl GridSpec {
    /// Materialize and validate the 1-D grid.
    pub fn to_grid(&self) -> Result<Grid> {
        match self {
            GridSpec::Range { start, stop, step } => Grid::from_step(*start, *stop, *step),
            GridSpec::Points(points) => Grid::from_points(points.clone()),
        }
    }
}

impl AnalysisSpec {
    /// Build the joint grid and per-axis priors for this analysis.
    pub fn build_grid_and_priors(&self) -> Result<(JointGrid, Vec<Density>)> {
        let axes: Vec<Grid> =
            self.parameters.iter().map(|p| p.grid.to_grid()).collect::<Result<_>>()?;
        let grid = JointGrid::new(axes)?;
        let priors: Vec<Density> = self.parameters.iter().map(|p| p.prior.clone()).collect();
        Ok((grid, priors))
    }

    /// Parameter names in axis order.
    pub fn parameter_names(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.name.clone()).collect()
    }
}

/// Read and parse an analysis file.
pub fn read_analysis_file(path: &Path) -> anyhow::Result<AnalysisFile> {
    let bytes = std::fs::read(path)?;
    let file: AnalysisFile = serde_json::from_slice(&bytes)?;
    Ok(file)
}
