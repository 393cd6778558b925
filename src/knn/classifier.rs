//! Majority-vote KNN classifier

use crate::data::Dataset;
use crate::error::{Error, Result};

/// Euclidean distance between two equal-length feature vectors.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// K-nearest-neighbor classifier with majority voting.
#[derive(Clone, Copy, Debug)]
pub struct KnnClassifier {
    k: usize,
}

impl KnnClassifier {
    /// Create a classifier voting among `k` neighbors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNeighbors` if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidNeighbors(k));
        }
        Ok(Self { k })
    }

    /// The configured neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Predict a label for every test row, in test-row order.
    ///
    /// Distances to the training rows are sorted ascending with a stable
    /// sort, so equal distances keep the original training order and
    /// prediction is deterministic. Among the `k` nearest (all training
    /// rows, if `k` exceeds the training size), the label with the highest
    /// vote count wins; on a count tie, whichever tied label was seen first
    /// while scanning the sorted neighbors wins.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if train and test feature widths differ, or
    /// if the training set is empty.
    pub fn predict(&self, train: &Dataset, test: &Dataset) -> Result<Vec<f64>> {
        if train.n_features() != test.n_features() {
            return Err(Error::ShapeMismatch(format!(
                "train has {} features, test has {}",
                train.n_features(),
                test.n_features()
            )));
        }
        if train.is_empty() && !test.is_empty() {
            return Err(Error::ShapeMismatch(
                "cannot classify against an empty training set".to_string(),
            ));
        }

        let mut predictions = Vec::with_capacity(test.len());
        for test_row in test.rows() {
            let mut distances: Vec<(f64, f64)> = train
                .rows()
                .iter()
                .enumerate()
                .map(|(i, train_row)| (euclidean_distance(test_row, train_row), train.label(i)))
                .collect();
            distances.sort_by(|a, b| a.0.total_cmp(&b.0));

            let k = self.k.min(distances.len());
            predictions.push(majority_label(&distances[..k]));
        }
        Ok(predictions)
    }
}

/// First-seen-wins majority vote over (distance, label) pairs in sorted
/// order. Counts are tracked in encounter order so a strictly-greater
/// comparison resolves ties toward the earlier label.
fn majority_label(nearest: &[(f64, f64)]) -> f64 {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &(_, label) in nearest {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, c)) => *c += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best = counts[0];
    for &entry in &counts[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    best.0
}
