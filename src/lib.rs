//! valutare — resampling-based evaluation of a KNN classifier
//!
//! Evaluates the predictive quality of a k-nearest-neighbor classifier on a
//! binary-labeled feature table using repeated train/test resampling.
//!
//! ## Architecture
//!
//! - `data`: paired feature/label table with alignment enforced by
//!   construction
//! - `resample`: holdout, random subsampling, and bootstrap split strategies
//!   behind one seedable [`Splitter`]
//! - `knn`: brute-force Euclidean KNN with majority voting, and the binary
//!   confusion matrix
//! - `metrics`: the eight named quality metrics, including the
//!   threshold-swept ROC/AUC
//! - `evaluate`: the orchestrator that classifies and scores every split and
//!   reduces the results to per-metric means
//!
//! File parsing, column preprocessing, interactive prompts, plotting, and
//! spreadsheet export are external collaborators: they supply the cleaned
//! [`Dataset`] and consume the [`Evaluation`].
//!
//! ## Example
//!
//! ```
//! use valutare::{Dataset, EvalConfig, Evaluator, Metric, SplitStrategy};
//!
//! let data = Dataset::new(
//!     vec!["x".to_string(), "y".to_string()],
//!     vec![
//!         vec![0.0, 0.1], vec![0.1, 0.0], vec![0.2, 0.2], vec![0.1, 0.1],
//!         vec![9.0, 9.1], vec![9.1, 9.0], vec![9.2, 9.2], vec![9.1, 9.1],
//!     ],
//!     vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
//! )?;
//!
//! let config = EvalConfig {
//!     strategy: SplitStrategy::random_subsampling(0.25, 5)?,
//!     k: 3,
//!     metrics: vec![Metric::AccuracyRate, Metric::ErrorRate],
//!     seed: Some(42),
//! };
//!
//! let outcome = Evaluator::new(config)?.evaluate(&data)?;
//! println!("{outcome}");
//! # Ok::<(), valutare::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod evaluate;
pub mod knn;
pub mod metrics;
pub mod resample;

pub use config::EvalConfig;
pub use data::{Dataset, Split};
pub use error::{Error, Result};
pub use evaluate::{Evaluation, Evaluator};
pub use knn::{euclidean_distance, ConfusionMatrix, KnnClassifier};
pub use metrics::{Metric, MetricSet, MetricsEngine};
pub use resample::{SplitStrategy, Splitter};
