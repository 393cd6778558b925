//! Binary confusion matrix

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confusion matrix for binary 0/1 classification.
///
/// Fields are named, so metric formulas bind unambiguously; the external
/// count order is the historical `(tn, tp, fn, fp)` permutation, honored by
/// [`ConfusionMatrix::to_array`] and the `from_*` constructors. Callers
/// exchanging raw counts must respect that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    tn: usize,
    tp: usize,
    fn_: usize,
    fp: usize,
}

impl ConfusionMatrix {
    /// Count agreements and disagreements between true and predicted labels.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the sequences differ in length, or
    /// `InvalidLabel` if any value is not exactly 0 or 1.
    pub fn from_labels(y_true: &[f64], y_pred: &[f64]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(Error::ShapeMismatch(format!(
                "{} true labels but {} predictions",
                y_true.len(),
                y_pred.len()
            )));
        }

        let mut cm = Self {
            tn: 0,
            tp: 0,
            fn_: 0,
            fp: 0,
        };
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            match (as_binary(t)?, as_binary(p)?) {
                (1, 1) => cm.tp += 1,
                (0, 0) => cm.tn += 1,
                (0, 1) => cm.fp += 1,
                _ => cm.fn_ += 1,
            }
        }
        Ok(cm)
    }

    /// Build from counts in `(tn, tp, fn, fp)` order.
    pub fn from_array(counts: [usize; 4]) -> Self {
        let [tn, tp, fn_, fp] = counts;
        Self { tn, tp, fn_, fp }
    }

    /// Build from a raw count slice in `(tn, tp, fn, fp)` order.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateMatrix` for a slice not of length 4 or containing
    /// a negative count.
    pub fn from_slice(counts: &[i64]) -> Result<Self> {
        if counts.len() != 4 {
            return Err(Error::DegenerateMatrix(format!(
                "expected 4 counts (tn, tp, fn, fp), got {}",
                counts.len()
            )));
        }
        if counts.iter().any(|&c| c < 0) {
            return Err(Error::DegenerateMatrix(
                "counts must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            tn: counts[0] as usize,
            tp: counts[1] as usize,
            fn_: counts[2] as usize,
            fp: counts[3] as usize,
        })
    }

    /// Counts in `(tn, tp, fn, fp)` order.
    pub fn to_array(&self) -> [usize; 4] {
        [self.tn, self.tp, self.fn_, self.fp]
    }

    /// True negatives.
    pub fn tn(&self) -> usize {
        self.tn
    }

    /// True positives.
    pub fn tp(&self) -> usize {
        self.tp
    }

    /// False negatives.
    pub fn fn_(&self) -> usize {
        self.fn_
    }

    /// False positives.
    pub fn fp(&self) -> usize {
        self.fp
    }

    /// Total number of classified rows.
    pub fn total(&self) -> usize {
        self.tn + self.tp + self.fn_ + self.fp
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "          Pred 0  Pred 1")?;
        writeln!(f, "True 0  {:>8} {:>7}", self.tn, self.fp)?;
        write!(f, "True 1  {:>8} {:>7}", self.fn_, self.tp)
    }
}

fn as_binary(value: f64) -> Result<u8> {
    if value == 0.0 {
        Ok(0)
    } else if value == 1.0 {
        Ok(1)
    } else {
        Err(Error::InvalidLabel(value))
    }
}
