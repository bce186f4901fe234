//! GridStat CLI
//!
//! The reporting side of the engine: reads a JSON analysis spec, runs the
//! grid-approximation posterior engine once per analysis, and renders the
//! resulting grids and samples as JSON tables. A failing analysis is
//! reported and skipped; it never aborts the rest of the run.

mod analysis_spec;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use analysis_spec::{AnalysisSpec, read_analysis_file};
use gs_inference::{MarginalGrid, evaluate};

#[derive(Parser)]
#[command(name = "gridstat")]
#[command(about = "GridStat - Bayesian posteriors by grid approximation")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate posterior grids and marginals for every analysis in a spec
    Posterior {
        /// Input analysis spec (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Threads (0 = auto)
        #[arg(long, default_value = "0")]
        threads: usize,
    },

    /// Draw weighted posterior samples for every analysis in a spec
    Sample {
        /// Input analysis spec (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of draws per analysis
        #[arg(long)]
        count: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Draw from this axis's marginal instead of the joint grid
        #[arg(long)]
        axis: Option<usize>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Threads (0 = auto)
        #[arg(long, default_value = "0")]
        threads: usize,
    },
}

/// Rendered marginal for one parameter.
#[derive(Debug, Serialize)]
struct MarginalReport {
    name: String,
    points: Vec<f64>,
    probabilities: Vec<f64>,
    mean: f64,
    mode: f64,
}

impl MarginalReport {
    fn new(name: &str, marginal: &MarginalGrid) -> Self {
        Self {
            name: name.to_string(),
            points: marginal.grid().points().to_vec(),
            probabilities: marginal.probs().to_vec(),
            mean: marginal.mean(),
            mode: marginal.mode().0,
        }
    }
}

/// Rendered posterior for one analysis.
#[derive(Debug, Serialize)]
struct PosteriorReport {
    name: String,
    parameters: Vec<String>,
    shape: Vec<usize>,
    log_evidence: f64,
    probabilities: Vec<f64>,
    marginals: Vec<MarginalReport>,
}

/// Rendered sample set for one analysis.
#[derive(Debug, Serialize)]
struct SampleReport {
    name: String,
    parameters: Vec<String>,
    seed: u64,
    draws: Vec<Vec<f64>>,
}

/// Failure record for one analysis; the run continues past it.
#[derive(Debug, Serialize)]
struct FailureReport {
    name: String,
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum AnalysisOutcome<T: Serialize> {
    Ok(T),
    Failed(FailureReport),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Posterior { input, output, threads } => {
            cmd_posterior(&input, output.as_deref(), threads)
        }
        Commands::Sample { input, count, seed, axis, output, threads } => {
            cmd_sample(&input, count, seed, axis, output.as_deref(), threads)
        }
    }
}

fn init_threads(threads: usize) {
    if threads > 0 {
        let _ = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global();
    }
}

fn run_posterior(spec: &AnalysisSpec) -> gs_core::Result<PosteriorReport> {
    let (grid, priors) = spec.build_grid_and_priors()?;
    let likelihood = spec.likelihood.build();
    let post = evaluate(likelihood.as_ref(), &grid, &priors)?;

    let names = spec.parameter_names();
    let marginals = names
        .iter()
        .enumerate()
        .map(|(axis, name)| Ok(MarginalReport::new(name, &post.marginal(axis)?)))
        .collect::<gs_core::Result<Vec<_>>>()?;

    tracing::info!(
        analysis = %spec.name,
        points = post.len(),
        log_evidence = post.log_evidence(),
        "posterior evaluated"
    );

    Ok(PosteriorReport {
        name: spec.name.clone(),
        parameters: names,
        shape: post.grid().shape().to_vec(),
        log_evidence: post.log_evidence(),
        probabilities: post.probs().to_vec(),
        marginals,
    })
}

fn run_sample(
    spec: &AnalysisSpec,
    count: usize,
    seed: u64,
    axis: Option<usize>,
) -> gs_core::Result<SampleReport> {
    let (grid, priors) = spec.build_grid_and_priors()?;
    let likelihood = spec.likelihood.build();
    let post = evaluate(likelihood.as_ref(), &grid, &priors)?;

    let (parameters, draws) = match axis {
        Some(axis) => {
            let marginal = post.marginal(axis)?;
            let draws = marginal.sample_seeded(count, seed)?;
            (vec![spec.parameter_names()[axis].clone()], draws.into_iter().map(|v| vec![v]).collect())
        }
        None => (spec.parameter_names(), post.sample_seeded(count, seed)?),
    };

    tracing::info!(analysis = %spec.name, draws = count, seed, "samples drawn");

    Ok(SampleReport { name: spec.name.clone(), parameters, seed, draws })
}

fn cmd_posterior(input: &Path, output: Option<&Path>, threads: usize) -> Result<()> {
    init_threads(threads);
    let file = read_analysis_file(input)?;
    tracing::info!(path = %input.display(), analyses = file.analyses.len(), "spec loaded");

    let results: Vec<AnalysisOutcome<PosteriorReport>> = file
        .analyses
        .iter()
        .map(|spec| match run_posterior(spec) {
            Ok(report) => AnalysisOutcome::Ok(report),
            Err(err) => {
                tracing::error!(analysis = %spec.name, %err, "analysis failed");
                AnalysisOutcome::Failed(FailureReport {
                    name: spec.name.clone(),
                    error: err.to_string(),
                })
            }
        })
        .collect();

    write_output(&results, output)
}

fn cmd_sample(
    input: &Path,
    count: usize,
    seed: u64,
    axis: Option<usize>,
    output: Option<&Path>,
    threads: usize,
) -> Result<()> {
    init_threads(threads);
    let file = read_analysis_file(input)?;
    tracing::info!(path = %input.display(), analyses = file.analyses.len(), "spec loaded");

    let results: Vec<AnalysisOutcome<SampleReport>> = file
        .analyses
        .iter()
        .map(|spec| match run_sample(spec, count, seed, axis) {
            Ok(report) => AnalysisOutcome::Ok(report),
            Err(err) => {
                tracing::error!(analysis = %spec.name, %err, "analysis failed");
                AnalysisOutcome::Failed(FailureReport {
                    name: spec.name.clone(),
                    error: err.to_string(),
                })
            }
        })
        .collect();

    write_output(&results, output)
}

fn write_output<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}
