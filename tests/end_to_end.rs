//! End-to-end evaluation scenario
//!
//! Exercises the full path: synthetic CSV on disk -> loader -> stratified
//! harness -> metrics -> aggregate, with seeded determinism throughout.

use std::io::Write;

use evaluar::cv::{CrossValidator, Metric};
use evaluar::data::{ensure_dataset, load_csv};
use evaluar::model::{LogisticRegression, MajorityClass};
use evaluar::preprocess::Scaling;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

/// Write a 20-row synthetic passenger CSV with a fixed 60/40 class split.
///
/// One informative feature tracks the label; two carry seeded noise.
fn synthetic_csv(seed: u64) -> NamedTempFile {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut file = NamedTempFile::new().expect("temp file creation should succeed");

    writeln!(file, "PassengerId,Survived,Pclass,Age,Fare").expect("write should succeed");
    for i in 0..20 {
        let label = u8::from(i < 12);
        let signal = f64::from(label) * 2.0 - 1.0 + rng.random_range(-0.3..0.3);
        let age: f64 = rng.random_range(1.0..80.0);
        let fare: f64 = rng.random_range(5.0..100.0);
        writeln!(file, "{},{},{},{},{}", i + 1, label, signal, age, fare)
            .expect("write should succeed");
    }
    file
}

#[test]
fn test_load_then_cross_validate_known_split() {
    let file = synthetic_csv(42);
    let dataset = load_csv(file.path()).unwrap();

    assert_eq!(dataset.n_samples(), 20);
    assert_eq!(dataset.n_features(), 3);
    assert!((dataset.positive_rate() - 0.6).abs() < 1e-12);

    let cv = CrossValidator::new(5).with_seed(42);
    let run = cv
        .run(dataset.features(), dataset.labels(), || {
            LogisticRegression::new().with_learning_rate(0.5).with_max_iter(2000)
        })
        .unwrap();

    // Exactly 5 per-fold results, each from a held-out set of 4 rows
    // holding 2 or 3 of the 12 positives.
    assert_eq!(run.outcomes().len(), 5);
    for outcome in run.outcomes() {
        assert_eq!(outcome.test_size, 4);
        let rate = outcome.test.report.observed_positive_rate;
        assert!((rate - 0.5).abs() < 1e-12 || (rate - 0.75).abs() < 1e-12);
    }

    let mean = run.summary(Metric::Accuracy).mean.unwrap();
    assert!((0.0..=1.0).contains(&mean));
    // The informative feature dominates, so the model beats the baseline.
    assert!(mean > 0.6);
}

#[test]
fn test_repeated_runs_are_bit_for_bit_identical() {
    let file = synthetic_csv(7);
    let dataset = load_csv(file.path()).unwrap();

    let evaluate = || {
        let cv = CrossValidator::new(5).with_seed(123);
        let run = cv
            .run(dataset.features(), dataset.labels(), || {
                LogisticRegression::new().with_learning_rate(0.5).with_max_iter(1000)
            })
            .unwrap();
        run.summary(Metric::Accuracy).mean.unwrap()
    };

    let first = evaluate();
    let second = evaluate();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_different_seeds_may_move_fold_scores_but_not_invariants() {
    let file = synthetic_csv(11);
    let dataset = load_csv(file.path()).unwrap();

    for seed in [1u64, 2, 3] {
        let run = CrossValidator::new(5)
            .with_seed(seed)
            .run(dataset.features(), dataset.labels(), || {
                LogisticRegression::new().with_learning_rate(0.5).with_max_iter(1000)
            })
            .unwrap();

        // Stratification keeps each held-out fold within one sample of the
        // global 60/40 mix: 2 or 3 positives out of 4.
        for outcome in run.outcomes() {
            let rate = outcome.test.report.observed_positive_rate;
            assert!(
                (rate - 0.5).abs() < 1e-12 || (rate - 0.75).abs() < 1e-12,
                "held-out fold drifted from the global class balance: {rate}"
            );
        }
    }
}

#[test]
fn test_training_scores_expose_overfitting_gap() {
    let file = synthetic_csv(3);
    let dataset = load_csv(file.path()).unwrap();

    let run = CrossValidator::new(5)
        .with_seed(42)
        .run(dataset.features(), dataset.labels(), || {
            LogisticRegression::new().with_learning_rate(0.5).with_max_iter(2000)
        })
        .unwrap();

    // Train-side diagnostics are populated for every fold.
    for score in run.train_scores(Metric::Accuracy) {
        let s = score.unwrap();
        assert!((0.0..=1.0).contains(&s));
    }
}

#[test]
fn test_min_max_scaling_variant() {
    let file = synthetic_csv(5);
    let dataset = load_csv(file.path()).unwrap();

    let run = CrossValidator::new(5)
        .with_seed(42)
        .with_scaling(Scaling::MinMax)
        .run(dataset.features(), dataset.labels(), || {
            LogisticRegression::new().with_learning_rate(0.5).with_max_iter(2000)
        })
        .unwrap();

    assert_eq!(run.outcomes().len(), 5);
    assert!(run.summary(Metric::Accuracy).mean.unwrap() > 0.5);
}

#[test]
fn test_baseline_tracks_class_balance() {
    let file = synthetic_csv(13);
    let dataset = load_csv(file.path()).unwrap();

    let run = CrossValidator::new(5)
        .with_seed(42)
        .with_scaling(Scaling::None)
        .run(dataset.features(), dataset.labels(), MajorityClass::new)
        .unwrap();

    // Majority vote scores the held-out positive fraction on every fold.
    let mean = run.summary(Metric::Accuracy).mean.unwrap();
    assert!((mean - 0.6).abs() < 1e-12);
}

#[test]
fn test_ensure_dataset_reuses_existing_cache() {
    let file = synthetic_csv(21);
    // An existing file must be returned without touching the URL.
    let path = ensure_dataset(file.path(), "http://invalid.invalid/never-fetched.csv").unwrap();
    let dataset = load_csv(path).unwrap();
    assert_eq!(dataset.n_samples(), 20);
}
