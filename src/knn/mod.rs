//! K-nearest-neighbor classification
//!
//! Brute-force KNN over the split's feature rows: Euclidean distance to
//! every training row, stable sort, majority vote among the `k` nearest.
//! No spatial index is built; cost is O(test × train × features) per
//! prediction pass, acceptable at the target dataset sizes.

mod classifier;
mod confusion;

pub use classifier::{euclidean_distance, KnnClassifier};
pub use confusion::ConfusionMatrix;
