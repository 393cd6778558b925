//! Classification-quality metrics
//!
//! Eight named metrics derived from a binary confusion matrix, plus a
//! threshold-swept ROC/AUC over the raw prediction scores. Zero
//! denominators are hard failures by design: a pathological split surfaces
//! as an error instead of a silent zero.

mod engine;
mod metric;
mod report;

pub use engine::MetricsEngine;
pub use metric::Metric;
pub use report::MetricSet;
