//! Split-by-split evaluation loop

use super::outcome::Evaluation;
use crate::config::EvalConfig;
use crate::data::{Dataset, Split};
use crate::error::Result;
use crate::knn::{ConfusionMatrix, KnnClassifier};
use crate::metrics::{Metric, MetricSet, MetricsEngine};
use crate::resample::Splitter;
use std::collections::BTreeMap;
use std::time::Instant;

/// Runs "for each split: classify, score" and aggregates the results.
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator, validating the configuration eagerly.
    ///
    /// # Errors
    ///
    /// Returns the configuration's range errors; nothing is deferred to
    /// run time.
    pub fn new(config: EvalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Resample `data` per the configured strategy and evaluate every split.
    ///
    /// # Errors
    ///
    /// Propagates any classification or metric error; a failure on one
    /// split aborts the whole run.
    pub fn evaluate(&self, data: &Dataset) -> Result<Evaluation> {
        let mut splitter = match self.config.seed {
            Some(seed) => Splitter::with_seed(self.config.strategy, seed),
            None => Splitter::new(self.config.strategy),
        };
        let splits = splitter.split(data);
        self.evaluate_splits(&splits)
    }

    /// Evaluate pre-built splits in list order.
    ///
    /// Per split: predict with the configured classifier, build the
    /// confusion matrix against the test labels, compute the requested
    /// metrics, and fold each value into its running collection. After the
    /// loop every metric's collection is reduced to its arithmetic mean;
    /// metrics never observed are omitted (which only happens when the
    /// split list is empty).
    pub fn evaluate_splits(&self, splits: &[Split]) -> Result<Evaluation> {
        let start = Instant::now();
        let classifier = KnnClassifier::new(self.config.k)?;

        let mut per_split: Vec<MetricSet> = Vec::with_capacity(splits.len());
        let mut collected: BTreeMap<Metric, Vec<f64>> = BTreeMap::new();

        for split in splits {
            let predictions = classifier.predict(&split.train, &split.test)?;
            let y_true = split.test.labels();
            let cm = ConfusionMatrix::from_labels(y_true, &predictions)?;

            let engine = MetricsEngine::new(cm, &predictions, y_true)?;
            let set = engine.calculate(&self.config.metrics)?;

            for (metric, value) in set.iter() {
                collected.entry(metric).or_default().push(value);
            }
            per_split.push(set);
        }

        let means: MetricSet = collected
            .into_iter()
            .map(|(metric, values)| {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                (metric, mean)
            })
            .collect();

        Ok(Evaluation {
            per_split,
            means,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
