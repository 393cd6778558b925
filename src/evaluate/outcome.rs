//! Aggregated evaluation results

use crate::metrics::MetricSet;
use serde::Serialize;
use std::fmt;

/// Results of one evaluation run.
///
/// `per_split` is the side channel for the external reporting collaborators
/// (spreadsheet export, trend plots); `means` is the aggregated verdict. An
/// empty split list yields an empty outcome, not an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Evaluation {
    /// Metric set for each split, in split order.
    pub per_split: Vec<MetricSet>,
    /// Arithmetic mean of each metric across the splits. Metrics with no
    /// observations are omitted.
    pub means: MetricSet,
    /// Wall-clock time of the run in milliseconds.
    pub elapsed_ms: f64,
}

impl Evaluation {
    /// Number of evaluated splits.
    pub fn n_splits(&self) -> usize {
        self.per_split.len()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation over {} split(s):", self.n_splits())?;
        write!(f, "{}", self.means)?;
        write!(f, "Elapsed: {:.2}ms", self.elapsed_ms)
    }
}
