//! Split generation

use super::strategy::SplitStrategy;
use crate::data::{Dataset, Split};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generates train/test splits for a dataset under a chosen strategy.
///
/// Owns its random generator: [`Splitter::new`] seeds from OS entropy
/// (repeated runs differ, as the original behavior), [`Splitter::with_seed`]
/// gives reproducible splits for testing.
#[derive(Clone, Debug)]
pub struct Splitter {
    strategy: SplitStrategy,
    rng: StdRng,
}

impl Splitter {
    /// Entropy-seeded splitter.
    pub fn new(strategy: SplitStrategy) -> Self {
        Self {
            strategy,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic splitter for a fixed seed.
    pub fn with_seed(strategy: SplitStrategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> &SplitStrategy {
        &self.strategy
    }

    /// Produce the strategy's splits for `data`, in iteration order.
    pub fn split(&mut self, data: &Dataset) -> Vec<Split> {
        match self.strategy {
            SplitStrategy::Holdout { test_fraction } => {
                vec![self.holdout_once(data, test_fraction)]
            }
            SplitStrategy::RandomSubsampling {
                test_fraction,
                iterations,
            } => (0..iterations)
                .map(|_| self.holdout_once(data, test_fraction))
                .collect(),
            SplitStrategy::Bootstrap {
                train_fraction,
                iterations,
            } => (0..iterations)
                .map(|_| self.bootstrap_once(data, train_fraction))
                .collect(),
        }
    }

    /// One shuffled holdout split: the last `floor(f * n)` shuffled indices
    /// become the test set, the remainder the training set. A zero-sized
    /// test set is allowed; the caller bears responsibility for a sane
    /// fraction.
    fn holdout_once(&mut self, data: &Dataset, test_fraction: f64) -> Split {
        let n = data.len();
        let n_test = (test_fraction * n as f64).floor() as usize;

        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut self.rng);

        let split_at = n - n_test;
        Split {
            train: data.take(&indices[..split_at]),
            test: data.take(&indices[split_at..]),
        }
    }

    /// One bootstrap round: draw `floor(f * n)` indices with replacement for
    /// training (duplicates kept); the test set is every index never drawn,
    /// in ascending order.
    fn bootstrap_once(&mut self, data: &Dataset, train_fraction: f64) -> Split {
        let n = data.len();
        let n_train = (train_fraction * n as f64).floor() as usize;

        let mut drawn = vec![false; n];
        let mut train_indices = Vec::with_capacity(n_train);
        for _ in 0..n_train {
            let i = self.rng.random_range(0..n);
            drawn[i] = true;
            train_indices.push(i);
        }
        let test_indices: Vec<usize> = (0..n).filter(|&i| !drawn[i]).collect();

        Split {
            train: data.take(&train_indices),
            test: data.take(&test_indices),
        }
    }
}
