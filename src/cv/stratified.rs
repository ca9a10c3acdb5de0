//! Stratified k-fold splitter

use crate::error::{EvaluarError, Result};
use crate::metrics::validate_binary;

/// Stratified k-fold cross-validation splitter.
///
/// Samples are bucketed by class and dealt round-robin across folds, so
/// every fold's positive-label proportion matches the whole dataset up to
/// one sample. Folds are disjoint and collectively exhaustive by
/// construction.
#[derive(Clone, Debug)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl StratifiedKFold {
    /// Create a new splitter with shuffling enabled and the default seed.
    pub fn new(n_splits: usize) -> Self {
        Self { n_splits, shuffle: true, seed: 42 }
    }

    /// Set the random seed for shuffling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable shuffling; buckets are dealt in dataset order.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Number of folds this splitter produces.
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Generate `(train_indices, test_indices)` for each fold.
    ///
    /// Index lists are sorted ascending so output is stable regardless of
    /// shuffle order. Errors when `n_splits` is outside `2..=y.len()` or
    /// labels are not binary.
    pub fn split(&self, y: &[u8]) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
        validate_binary(y)?;
        if self.n_splits < 2 {
            return Err(EvaluarError::InvalidParameter(format!(
                "n_splits must be at least 2, got {}",
                self.n_splits
            )));
        }
        if self.n_splits > y.len() {
            return Err(EvaluarError::InvalidParameter(format!(
                "n_splits ({}) exceeds sample count ({})",
                self.n_splits,
                y.len()
            )));
        }

        let mut negatives: Vec<usize> = Vec::new();
        let mut positives: Vec<usize> = Vec::new();
        for (i, &label) in y.iter().enumerate() {
            if label == 1 {
                positives.push(i);
            } else {
                negatives.push(i);
            }
        }

        if self.shuffle {
            // LCG-based shuffle for seed-stable reproducibility; one state
            // threaded through both buckets.
            let mut rng_state = self.seed;
            for bucket in [&mut negatives, &mut positives] {
                for i in (1..bucket.len()).rev() {
                    rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
                    let j = (rng_state >> 33) as usize % (i + 1);
                    bucket.swap(i, j);
                }
            }
        }

        // Deal each class bucket round-robin. The cursor carries over
        // between buckets so overall fold sizes stay balanced while each
        // class still lands floor-or-ceil(m/k) times per fold.
        let mut folds: Vec<Vec<usize>> = vec![Vec::new(); self.n_splits];
        let mut cursor = 0usize;
        for bucket in [&negatives, &positives] {
            for &idx in bucket.iter() {
                folds[cursor % self.n_splits].push(idx);
                cursor += 1;
            }
        }

        let mut splits = Vec::with_capacity(self.n_splits);
        for i in 0..self.n_splits {
            let mut test: Vec<usize> = folds[i].clone();
            let mut train: Vec<usize> = folds
                .iter()
                .enumerate()
                .filter(|(f, _)| *f != i)
                .flat_map(|(_, fold)| fold.iter().copied())
                .collect();
            test.sort_unstable();
            train.sort_unstable();
            splits.push((train, test));
        }

        Ok(splits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n_pos: usize, n_neg: usize) -> Vec<u8> {
        let mut y = vec![1u8; n_pos];
        y.extend(std::iter::repeat(0u8).take(n_neg));
        y
    }

    fn positive_fraction(indices: &[usize], y: &[u8]) -> f64 {
        let pos = indices.iter().filter(|&&i| y[i] == 1).count();
        pos as f64 / indices.len() as f64
    }

    #[test]
    fn test_partition_is_disjoint_and_exhaustive() {
        let y = labels(12, 8);
        let splits = StratifiedKFold::new(5).split(&y).unwrap();

        let mut seen: Vec<usize> = splits.iter().flat_map(|(_, test)| test.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_train_and_test_never_overlap() {
        let y = labels(12, 8);
        for (train, test) in StratifiedKFold::new(4).split(&y).unwrap() {
            for idx in &test {
                assert!(!train.contains(idx));
            }
            assert_eq!(train.len() + test.len(), 20);
        }
    }

    #[test]
    fn test_stratification_holds_for_all_k() {
        let y = labels(12, 8);
        let global = 12.0 / 20.0;

        for k in 2..=10 {
            let splits = StratifiedKFold::new(k).split(&y).unwrap();
            assert_eq!(splits.len(), k);
            for (_, test) in &splits {
                let bound = 1.0 / test.len() as f64;
                assert!(
                    (positive_fraction(test, &y) - global).abs() <= bound + 1e-12,
                    "fold proportion drifted beyond one sample for k={k}"
                );
            }
        }
    }

    #[test]
    fn test_seed_changes_assignment_but_not_invariants() {
        let y = labels(10, 10);
        let a = StratifiedKFold::new(5).with_seed(1).split(&y).unwrap();
        let b = StratifiedKFold::new(5).with_seed(2).split(&y).unwrap();
        assert_ne!(a, b);

        for (_, test) in &b {
            assert_eq!(test.iter().filter(|&&i| y[i] == 1).count(), 2);
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let y = labels(9, 11);
        let a = StratifiedKFold::new(5).with_seed(7).split(&y).unwrap();
        let b = StratifiedKFold::new(5).with_seed(7).split(&y).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_without_shuffle_deals_in_order() {
        let y = labels(4, 4);
        let splits = StratifiedKFold::new(2).without_shuffle().split(&y).unwrap();
        // Positives occupy indices 0..4, negatives 4..8; each fold takes
        // two of each.
        for (_, test) in &splits {
            assert_eq!(test.len(), 4);
            assert_eq!(test.iter().filter(|&&i| y[i] == 1).count(), 2);
        }
    }

    #[test]
    fn test_k_below_two_rejected() {
        let y = labels(3, 3);
        assert!(matches!(
            StratifiedKFold::new(1).split(&y),
            Err(EvaluarError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_k_above_sample_count_rejected() {
        let y = labels(2, 2);
        assert!(matches!(
            StratifiedKFold::new(5).split(&y),
            Err(EvaluarError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_fold_sizes_balanced() {
        let y = labels(13, 9);
        let splits = StratifiedKFold::new(5).split(&y).unwrap();
        let sizes: Vec<usize> = splits.iter().map(|(_, test)| test.len()).collect();
        let min = *sizes.iter().min().unwrap();
        let max = *sizes.iter().max().unwrap();
        assert!(max - min <= 2, "fold sizes {sizes:?} spread too far");
        assert_eq!(sizes.iter().sum::<usize>(), 22);
    }
}
