//! Evaluation orchestration
//!
//! Drives the full pass: resample the dataset, classify each split, score
//! it, and reduce the per-split metric sets to per-metric means. Any error
//! on any split aborts the whole run; there is no partial-result mode.

mod evaluator;
mod outcome;

pub use evaluator::Evaluator;
pub use outcome::Evaluation;
