//! Evaluation configuration

use crate::error::{Error, Result};
use crate::metrics::Metric;
use crate::resample::SplitStrategy;
use serde::{Deserialize, Serialize};

/// Configuration for one evaluation run.
///
/// The excluded CLI/config layer builds this once at startup (typically via
/// serde) and hands it to [`crate::evaluate::Evaluator::new`], which calls
/// [`EvalConfig::validate`] eagerly so bad parameters never reach a split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Resampling strategy and its parameters.
    #[serde(flatten)]
    pub strategy: SplitStrategy,
    /// Neighbor count for the classifier.
    pub k: usize,
    /// Metrics to compute; empty means all eight.
    #[serde(default)]
    pub metrics: Vec<Metric>,
    /// Seed for the split generator. `None` draws from OS entropy, so
    /// repeated runs differ.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EvalConfig {
    /// Check every parameter range once.
    ///
    /// # Errors
    ///
    /// Returns the strategy's range errors or `InvalidNeighbors` for
    /// `k == 0`.
    pub fn validate(&self) -> Result<()> {
        self.strategy.validate()?;
        if self.k == 0 {
            return Err(Error::InvalidNeighbors(self.k));
        }
        Ok(())
    }
}
