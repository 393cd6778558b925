//! Tabular data abstraction for evaluation
//!
//! A [`Dataset`] pairs a numeric feature table with its label column in one
//! struct, so row alignment between features and labels holds by
//! construction and survives every index selection.

mod dataset;

pub use dataset::{Dataset, Split};
