//! Metric computation over a confusion matrix and raw prediction scores

use super::metric::Metric;
use super::report::MetricSet;
use crate::error::{Error, Result};
use crate::knn::ConfusionMatrix;

/// Number of equally spaced thresholds swept for the ROC curve.
///
/// The coarse 10-point sweep is kept on purpose: numeric outputs stay
/// compatible with the historical implementation. See DESIGN.md before
/// changing the granularity.
const ROC_THRESHOLDS: usize = 10;

/// Derives the eight named metrics from one split's results.
///
/// Holds the confusion matrix plus the raw prediction and truth sequences
/// the AUC sweep re-thresholds.
#[derive(Clone, Debug)]
pub struct MetricsEngine<'a> {
    cm: ConfusionMatrix,
    y_pred: &'a [f64],
    y_true: &'a [f64],
}

impl<'a> MetricsEngine<'a> {
    /// Create an engine for a split's confusion matrix and raw sequences.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateMatrix` for an all-zero matrix, or
    /// `ShapeMismatch` if predictions and truth differ in length.
    pub fn new(cm: ConfusionMatrix, y_pred: &'a [f64], y_true: &'a [f64]) -> Result<Self> {
        if cm.total() == 0 {
            return Err(Error::DegenerateMatrix(
                "all four counts are zero".to_string(),
            ));
        }
        if y_pred.len() != y_true.len() {
            return Err(Error::ShapeMismatch(format!(
                "{} predictions but {} true labels",
                y_pred.len(),
                y_true.len()
            )));
        }
        Ok(Self { cm, y_pred, y_true })
    }

    /// (tp + tn) / (tp + tn + fp + fn)
    pub fn accuracy_rate(&self) -> f64 {
        let correct = (self.cm.tp() + self.cm.tn()) as f64;
        correct / self.cm.total() as f64
    }

    /// 1 − accuracy rate
    pub fn error_rate(&self) -> f64 {
        1.0 - self.accuracy_rate()
    }

    /// tp / (tp + fn), the true positive rate.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedMetric` when the split has no positive rows.
    pub fn sensitivity(&self) -> Result<f64> {
        ratio(self.cm.tp(), self.cm.fn_(), Metric::Sensitivity)
    }

    /// tn / (tn + fp), the true negative rate.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedMetric` when the split has no negative rows.
    pub fn specificity(&self) -> Result<f64> {
        ratio(self.cm.tn(), self.cm.fp(), Metric::Specificity)
    }

    /// fp / (fp + tn), the false positive rate.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedMetric` when the split has no negative rows.
    pub fn false_alarm_rate(&self) -> Result<f64> {
        ratio(self.cm.fp(), self.cm.tn(), Metric::FalseAlarmRate)
    }

    /// fn / (fn + tp), the false negative rate.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedMetric` when the split has no positive rows.
    pub fn miss_rate(&self) -> Result<f64> {
        ratio(self.cm.fn_(), self.cm.tp(), Metric::MissRate)
    }

    /// sqrt(sensitivity × specificity)
    ///
    /// # Errors
    ///
    /// Fails if either factor is undefined.
    pub fn geometric_mean(&self) -> Result<f64> {
        Ok((self.sensitivity()? * self.specificity()?).sqrt())
    }

    /// ROC points `(fpr, tpr)` from the 10-threshold sweep, sorted by
    /// ascending FPR with the first point forced to the origin.
    ///
    /// At each threshold `m`, scores with `pred >= m` count as positive and
    /// a fresh confusion matrix is tallied against the true labels; a zero
    /// denominator yields 0 for that axis rather than an error. Constant or
    /// heavily tied scores can produce a non-monotonic curve; that matches
    /// the historical behavior.
    pub fn roc_points(&self) -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = (0..ROC_THRESHOLDS)
            .map(|i| {
                let m = i as f64 / (ROC_THRESHOLDS - 1) as f64;
                let mut tp = 0usize;
                let mut tn = 0usize;
                let mut fp = 0usize;
                let mut fn_ = 0usize;
                for (&y, &pred) in self.y_true.iter().zip(self.y_pred.iter()) {
                    if y == 1.0 {
                        if pred >= m {
                            tp += 1;
                        } else {
                            fn_ += 1;
                        }
                    } else if y == 0.0 {
                        if pred >= m {
                            fp += 1;
                        } else {
                            tn += 1;
                        }
                    }
                }
                let tpr = if tp + fn_ > 0 {
                    tp as f64 / (tp + fn_) as f64
                } else {
                    0.0
                };
                let fpr = if fp + tn > 0 {
                    fp as f64 / (fp + tn) as f64
                } else {
                    0.0
                };
                (fpr, tpr)
            })
            .collect();

        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        points[0] = (0.0, 0.0);
        points
    }

    /// Area under the swept ROC curve, by trapezoidal integration of TPR
    /// over FPR.
    pub fn area_under_curve(&self) -> f64 {
        let points = self.roc_points();
        points
            .windows(2)
            .map(|w| {
                let (x0, y0) = w[0];
                let (x1, y1) = w[1];
                (x1 - x0) * (y0 + y1) / 2.0
            })
            .sum()
    }

    /// Compute the requested metrics; an empty request means all eight.
    ///
    /// # Errors
    ///
    /// Propagates `UndefinedMetric` from any requested rate with a zero
    /// denominator. Nothing is silently reported as 0.
    pub fn calculate(&self, requested: &[Metric]) -> Result<MetricSet> {
        let metrics: &[Metric] = if requested.is_empty() {
            &Metric::ALL
        } else {
            requested
        };

        let mut set = MetricSet::new();
        for &metric in metrics {
            let value = match metric {
                Metric::AccuracyRate => self.accuracy_rate(),
                Metric::ErrorRate => self.error_rate(),
                Metric::Sensitivity => self.sensitivity()?,
                Metric::Specificity => self.specificity()?,
                Metric::FalseAlarmRate => self.false_alarm_rate()?,
                Metric::MissRate => self.miss_rate()?,
                Metric::GeometricMean => self.geometric_mean()?,
                Metric::AreaUnderCurve => self.area_under_curve(),
            };
            set.insert(metric, value);
        }
        Ok(set)
    }
}

fn ratio(numerator: usize, complement: usize, metric: Metric) -> Result<f64> {
    let denominator = numerator + complement;
    if denominator == 0 {
        return Err(Error::UndefinedMetric(metric));
    }
    Ok(numerator as f64 / denominator as f64)
}
