//! Resampling strategy definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default test-set fraction for holdout and random subsampling.
pub const DEFAULT_TEST_FRACTION: f64 = 0.25;
/// Default training-set fraction for bootstrap.
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.75;
/// Default iteration count for the repeated strategies.
pub const DEFAULT_ITERATIONS: usize = 5;

/// How a dataset is partitioned into train/test splits.
///
/// A closed set of tagged variants selected by configuration. Parameters are
/// validated at construction; values arriving through serde must be
/// re-checked with [`SplitStrategy::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SplitStrategy {
    /// One shuffled split; the last `floor(test_fraction * n)` shuffled rows
    /// form the test set.
    Holdout {
        #[serde(default = "default_test_fraction")]
        test_fraction: f64,
    },
    /// The holdout procedure repeated `iterations` times, each with a fresh
    /// shuffle.
    RandomSubsampling {
        #[serde(default = "default_test_fraction")]
        test_fraction: f64,
        #[serde(default = "default_iterations")]
        iterations: usize,
    },
    /// Per round, draw `floor(train_fraction * n)` rows with replacement;
    /// rows never drawn form the test set.
    Bootstrap {
        #[serde(default = "default_train_fraction")]
        train_fraction: f64,
        #[serde(default = "default_iterations")]
        iterations: usize,
    },
}

fn default_test_fraction() -> f64 {
    DEFAULT_TEST_FRACTION
}

fn default_train_fraction() -> f64 {
    DEFAULT_TRAIN_FRACTION
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl SplitStrategy {
    /// Holdout with the given test-set fraction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFraction` unless `0 < test_fraction < 1`.
    pub fn holdout(test_fraction: f64) -> Result<Self> {
        let strategy = Self::Holdout { test_fraction };
        strategy.validate()?;
        Ok(strategy)
    }

    /// Random subsampling: `iterations` independent holdout splits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFraction` unless `0 < test_fraction < 1`, or
    /// `InvalidIterations` if `iterations < 1`. Zero iterations is never
    /// corrected silently.
    pub fn random_subsampling(test_fraction: f64, iterations: usize) -> Result<Self> {
        let strategy = Self::RandomSubsampling {
            test_fraction,
            iterations,
        };
        strategy.validate()?;
        Ok(strategy)
    }

    /// Bootstrap with the given training-set fraction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFraction` unless `0 < train_fraction <= 1`, or
    /// `InvalidIterations` if `iterations < 1`.
    pub fn bootstrap(train_fraction: f64, iterations: usize) -> Result<Self> {
        let strategy = Self::Bootstrap {
            train_fraction,
            iterations,
        };
        strategy.validate()?;
        Ok(strategy)
    }

    /// Check parameter ranges. Serde bypasses the constructors, so
    /// deserialized strategies go through this before use.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Holdout { test_fraction } => {
                check_fraction("test fraction", test_fraction, false)
            }
            Self::RandomSubsampling {
                test_fraction,
                iterations,
            } => {
                check_fraction("test fraction", test_fraction, false)?;
                check_iterations(iterations)
            }
            Self::Bootstrap {
                train_fraction,
                iterations,
            } => {
                check_fraction("train fraction", train_fraction, true)?;
                check_iterations(iterations)
            }
        }
    }

    /// Number of splits this strategy will produce.
    pub fn n_splits(&self) -> usize {
        match *self {
            Self::Holdout { .. } => 1,
            Self::RandomSubsampling { iterations, .. }
            | Self::Bootstrap { iterations, .. } => iterations,
        }
    }
}

fn check_fraction(name: &'static str, value: f64, one_inclusive: bool) -> Result<()> {
    let ok = if one_inclusive {
        value > 0.0 && value <= 1.0
    } else {
        value > 0.0 && value < 1.0
    };
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidFraction {
            name,
            value,
            range: if one_inclusive { "(0, 1]" } else { "(0, 1)" },
        })
    }
}

fn check_iterations(iterations: usize) -> Result<()> {
    if iterations >= 1 {
        Ok(())
    } else {
        Err(Error::InvalidIterations(iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holdout_fraction_range() {
        assert!(SplitStrategy::holdout(0.25).is_ok());
        assert!(SplitStrategy::holdout(0.0).is_err());
        assert!(SplitStrategy::holdout(1.0).is_err());
        assert!(SplitStrategy::holdout(-0.1).is_err());
        assert!(SplitStrategy::holdout(1.5).is_err());
    }

    #[test]
    fn test_subsampling_rejects_zero_iterations() {
        assert!(SplitStrategy::random_subsampling(0.25, 5).is_ok());
        let result = SplitStrategy::random_subsampling(0.25, 0);
        assert!(matches!(result, Err(Error::InvalidIterations(0))));
    }

    #[test]
    fn test_bootstrap_train_fraction_includes_one() {
        assert!(SplitStrategy::bootstrap(1.0, 5).is_ok());
        assert!(SplitStrategy::bootstrap(0.75, 5).is_ok());
        assert!(SplitStrategy::bootstrap(0.0, 5).is_err());
        assert!(SplitStrategy::bootstrap(1.1, 5).is_err());
        assert!(SplitStrategy::bootstrap(0.75, 0).is_err());
    }

    #[test]
    fn test_n_splits() {
        assert_eq!(SplitStrategy::holdout(0.25).unwrap().n_splits(), 1);
        assert_eq!(
            SplitStrategy::random_subsampling(0.25, 7).unwrap().n_splits(),
            7
        );
        assert_eq!(SplitStrategy::bootstrap(0.75, 3).unwrap().n_splits(), 3);
    }

    #[test]
    fn test_serde_defaults() {
        let strategy: SplitStrategy =
            serde_json::from_str(r#"{"strategy": "random_subsampling"}"#).unwrap();
        assert_eq!(
            strategy,
            SplitStrategy::RandomSubsampling {
                test_fraction: DEFAULT_TEST_FRACTION,
                iterations: DEFAULT_ITERATIONS,
            }
        );
        strategy.validate().unwrap();
    }

    #[test]
    fn test_serde_bypasses_constructor_validate_catches() {
        let strategy: SplitStrategy =
            serde_json::from_str(r#"{"strategy": "holdout", "test_fraction": 2.0}"#).unwrap();
        assert!(strategy.validate().is_err());
    }
}
