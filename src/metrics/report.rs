//! Per-split metric results

use super::metric::Metric;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Ordered mapping from metric to its computed value.
///
/// Iteration follows the canonical [`Metric`] order regardless of request
/// order, which keeps reports and serialized output stable.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricSet {
    values: BTreeMap<Metric, f64>,
}

impl MetricSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a metric's value.
    pub fn insert(&mut self, metric: Metric, value: f64) {
        self.values.insert(metric, value);
    }

    /// Value for `metric`, if computed.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    /// Number of computed metrics.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing was computed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(metric, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.values.iter().map(|(&m, &v)| (m, v))
    }
}

impl FromIterator<(Metric, f64)> for MetricSet {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MetricSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (metric, value) in self.iter() {
            writeln!(f, "  {metric}: {value:.4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut set = MetricSet::new();
        set.insert(Metric::AccuracyRate, 0.9);
        assert_eq!(set.get(Metric::AccuracyRate), Some(0.9));
        assert_eq!(set.get(Metric::Sensitivity), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_canonical() {
        let mut set = MetricSet::new();
        set.insert(Metric::AreaUnderCurve, 0.5);
        set.insert(Metric::AccuracyRate, 0.9);
        set.insert(Metric::MissRate, 0.1);
        let order: Vec<Metric> = set.iter().map(|(m, _)| m).collect();
        assert_eq!(
            order,
            vec![Metric::AccuracyRate, Metric::MissRate, Metric::AreaUnderCurve]
        );
    }

    #[test]
    fn test_display() {
        let mut set = MetricSet::new();
        set.insert(Metric::AccuracyRate, 0.8571);
        let text = format!("{set}");
        assert!(text.contains("Accuracy Rate: 0.8571"));
    }

    #[test]
    fn test_serialize_uses_metric_names() {
        let mut set = MetricSet::new();
        set.insert(Metric::FalseAlarmRate, 0.25);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("False Alarm Rate"));
    }
}
