//! Resampling strategies for train/test partitioning
//!
//! Three strategies behind one interface: holdout (single shuffled split),
//! random subsampling (repeated independent holdouts), and bootstrap
//! (sampling with replacement, out-of-bag rows as the test set). The
//! [`Splitter`] owns a seedable generator so runs can be made deterministic.

mod splitter;
mod strategy;

pub use splitter::Splitter;
pub use strategy::{
    SplitStrategy, DEFAULT_ITERATIONS, DEFAULT_TEST_FRACTION, DEFAULT_TRAIN_FRACTION,
};
