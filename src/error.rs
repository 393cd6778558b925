//! Crate-wide error types

use crate::metrics::Metric;

/// Errors surfaced by resampling, classification, and metric computation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {name}: {value} (must be in {range})")]
    InvalidFraction {
        name: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("invalid iteration count: {0} (must be >= 1)")]
    InvalidIterations(usize),

    #[error("invalid neighbor count k: {0} (must be >= 1)")]
    InvalidNeighbors(usize),

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("degenerate confusion matrix: {0}")]
    DegenerateMatrix(String),

    #[error("metric {0} is undefined for this confusion matrix (zero denominator)")]
    UndefinedMetric(Metric),

    #[error("unknown metric: {0} (valid metrics are: {names})", names = Metric::valid_names())]
    UnknownMetric(String),

    #[error("invalid label: {0} (labels must be 0 or 1)")]
    InvalidLabel(f64),
}

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
