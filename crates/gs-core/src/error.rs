//! Error types for GridStat

use thiserror::Error;

/// GridStat error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed distribution or call parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Empty, non-monotonic, or non-finite grid definition
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Joint density is zero everywhere on the grid; normalization is impossible
    #[error("degenerate grid: {0}")]
    DegenerateGrid(String),

    /// Marginalization axis out of range
    #[error("invalid axis: {axis} (grid has {ndim} dimension(s))")]
    InvalidAxis {
        /// Requested axis index.
        axis: usize,
        /// Number of dimensions of the grid.
        ndim: usize,
    },

    /// Every sampling weight is zero
    #[error("degenerate distribution: {0}")]
    DegenerateDistribution(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
