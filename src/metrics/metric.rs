//! Metric definitions

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The recognized classification metrics.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Metric {
    #[serde(rename = "Accuracy Rate")]
    AccuracyRate,
    #[serde(rename = "Error Rate")]
    ErrorRate,
    #[serde(rename = "Sensitivity")]
    Sensitivity,
    #[serde(rename = "Specificity")]
    Specificity,
    #[serde(rename = "False Alarm Rate")]
    FalseAlarmRate,
    #[serde(rename = "Miss Rate")]
    MissRate,
    #[serde(rename = "Geometric Mean")]
    GeometricMean,
    #[serde(rename = "Area Under the Curve")]
    AreaUnderCurve,
}

impl Metric {
    /// Every metric, in canonical order.
    pub const ALL: [Metric; 8] = [
        Metric::AccuracyRate,
        Metric::ErrorRate,
        Metric::Sensitivity,
        Metric::Specificity,
        Metric::FalseAlarmRate,
        Metric::MissRate,
        Metric::GeometricMean,
        Metric::AreaUnderCurve,
    ];

    /// Display name, matching the historical report labels.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::AccuracyRate => "Accuracy Rate",
            Metric::ErrorRate => "Error Rate",
            Metric::Sensitivity => "Sensitivity",
            Metric::Specificity => "Specificity",
            Metric::FalseAlarmRate => "False Alarm Rate",
            Metric::MissRate => "Miss Rate",
            Metric::GeometricMean => "Geometric Mean",
            Metric::AreaUnderCurve => "Area Under the Curve",
        }
    }

    /// Comma-separated list of all recognized names, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_eight_distinct_names() {
        let names: std::collections::HashSet<&str> =
            Metric::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_parse_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn test_parse_unknown_name_lists_valid_set() {
        let err = "Precision".parse::<Metric>().unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Precision"));
        for metric in Metric::ALL {
            assert!(msg.contains(metric.name()), "missing {}", metric.name());
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Metric::FalseAlarmRate).unwrap();
        assert_eq!(json, "\"False Alarm Rate\"");
        let metric: Metric = serde_json::from_str("\"Area Under the Curve\"").unwrap();
        assert_eq!(metric, Metric::AreaUnderCurve);
    }
}
