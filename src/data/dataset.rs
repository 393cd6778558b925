//! Paired feature table and label column

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A feature table with named numeric columns and a row-aligned label column.
///
/// The upstream preprocessing collaborator supplies cleaned numeric features
/// and binary labels; this type only enforces shape. Label values are checked
/// against {0, 1} at the confusion-matrix boundary, not here.
///
/// Deserialization routes through [`Dataset::new`] so serialized input cannot
/// sidestep the shape checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    feature_names: Vec<String>,
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

#[derive(Deserialize)]
struct RawDataset {
    feature_names: Vec<String>,
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = Error;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.feature_names, raw.features, raw.labels)
    }
}

impl Dataset {
    /// Build a dataset from named columns, feature rows, and labels.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the label column length differs from the
    /// row count, or any row's width differs from the number of columns.
    pub fn new(
        feature_names: Vec<String>,
        features: Vec<Vec<f64>>,
        labels: Vec<f64>,
    ) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(Error::ShapeMismatch(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        let width = feature_names.len();
        for (i, row) in features.iter().enumerate() {
            if row.len() != width {
                return Err(Error::ShapeMismatch(format!(
                    "row {} has {} features, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }
        Ok(Self {
            feature_names,
            features,
            labels,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Column names, in column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Feature row at `index`.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.features[index]
    }

    /// Label at `index`.
    pub fn label(&self, index: usize) -> f64 {
        self.labels[index]
    }

    /// All feature rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// The full label column.
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Values of the named column, in row order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownColumn` if no column has that name.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .feature_names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))?;
        Ok(self.features.iter().map(|row| row[idx]).collect())
    }

    /// Select rows by index, labels traveling with their rows.
    ///
    /// Indices may repeat (bootstrap resampling draws with replacement), so
    /// the result can be larger than the source.
    pub fn take(&self, indices: &[usize]) -> Dataset {
        Dataset {
            feature_names: self.feature_names.clone(),
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }
}

/// One train/test partition produced by a resampling strategy.
///
/// Immutable after creation; each evaluation pass consumes splits in list
/// order and discards them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![1.0, 2.0],
                vec![3.0, 4.0],
                vec![5.0, 6.0],
            ],
            vec![0.0, 1.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn test_new_checks_label_alignment() {
        let result = Dataset::new(
            vec!["a".to_string()],
            vec![vec![1.0], vec![2.0]],
            vec![0.0],
        );
        assert!(matches!(result, Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn test_new_checks_row_width() {
        let result = Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 2.0], vec![3.0]],
            vec![0.0, 1.0],
        );
        assert!(matches!(result, Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn test_row_and_label_access() {
        let data = sample();
        assert_eq!(data.len(), 3);
        assert_eq!(data.n_features(), 2);
        assert_eq!(data.row(1), &[3.0, 4.0]);
        assert_eq!(data.label(1), 1.0);
    }

    #[test]
    fn test_column_by_name() {
        let data = sample();
        assert_eq!(data.column("b").unwrap(), vec![2.0, 4.0, 6.0]);
        assert!(matches!(
            data.column("missing"),
            Err(Error::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_take_preserves_pairing() {
        let data = sample();
        let subset = data.take(&[2, 0]);
        assert_eq!(subset.len(), 2);
        assert_eq!(subset.row(0), &[5.0, 6.0]);
        assert_eq!(subset.label(0), 1.0);
        assert_eq!(subset.row(1), &[1.0, 2.0]);
        assert_eq!(subset.label(1), 0.0);
    }

    #[test]
    fn test_deserialize_rejects_misaligned_shapes() {
        let json = r#"{
            "feature_names": ["a"],
            "features": [[1.0], [2.0], [3.0], [4.0]],
            "labels": [0.0]
        }"#;
        let result: std::result::Result<Dataset, _> = serde_json::from_str(json);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("4 feature rows but 1 labels"));

        let json = r#"{
            "feature_names": ["a", "b"],
            "features": [[1.0, 2.0], [3.0]],
            "labels": [0.0, 1.0]
        }"#;
        let result: std::result::Result<Dataset, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_accepts_aligned_shapes() {
        let data = sample();
        let json = serde_json::to_string(&data).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_take_allows_duplicates() {
        let data = sample();
        let subset = data.take(&[1, 1, 1]);
        assert_eq!(subset.len(), 3);
        assert_eq!(subset.labels(), &[1.0, 1.0, 1.0]);
    }
}
