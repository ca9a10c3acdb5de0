//! Cross-validation driver

use std::fmt;

use ndarray::{Array2, Axis};
use serde::Serialize;

use super::metric::Metric;
use super::stratified::StratifiedKFold;
use crate::error::{EvaluarError, Result};
use crate::metrics::{roc_auc, MetricsReport};
use crate::model::BinaryClassifier;
use crate::preprocess::Scaling;

/// Scores for one prediction set: the full metrics report plus the
/// ranking score computed from predicted probabilities.
#[derive(Clone, Debug, Serialize)]
pub struct FoldScore {
    /// Confusion-matrix derived rates
    pub report: MetricsReport,
    /// Threshold-independent ranking quality; `None` on one-class folds
    pub roc_auc: Option<f64>,
}

/// One fold's results: training-fold scores (over-fitting diagnostic)
/// alongside the held-out scores (the primary evaluation signal).
#[derive(Clone, Debug, Serialize)]
pub struct FoldOutcome {
    /// Fold index, 0-based
    pub fold: usize,
    /// Scores on the scaled training fold
    pub train: FoldScore,
    /// Scores on the scaled held-out fold
    pub test: FoldScore,
    /// Held-out sample count
    pub test_size: usize,
}

/// Mean and spread of one metric across folds.
///
/// Folds where the metric is undefined are excluded from the moments;
/// `defined` says how many folds contributed.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScoreSummary {
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Folds where the metric was defined
    pub defined: usize,
    /// Total folds evaluated
    pub folds: usize,
}

/// Drives repeated train/evaluate cycles over stratified folds.
///
/// ## Example
///
/// ```
/// use evaluar::cv::{CrossValidator, Metric};
/// use evaluar::model::LogisticRegression;
/// use ndarray::Array2;
///
/// let x = Array2::from_shape_fn((20, 1), |(i, _)| i as f64);
/// let y: Vec<u8> = (0..20).map(|i| u8::from(i >= 8)).collect();
///
/// let cv = CrossValidator::new(5).with_seed(7);
/// let run = cv.run(&x, &y, || LogisticRegression::new().with_learning_rate(0.5))?;
///
/// assert_eq!(run.outcomes().len(), 5);
/// let summary = run.summary(Metric::Accuracy);
/// assert!(summary.mean.unwrap() >= 0.0 && summary.mean.unwrap() <= 1.0);
/// # Ok::<(), evaluar::EvaluarError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CrossValidator {
    folds: usize,
    scaling: Scaling,
    seed: u64,
    shuffle: bool,
}

impl CrossValidator {
    /// Create a validator with the given fold count, standardization
    /// scaling, and the default seed.
    pub fn new(folds: usize) -> Self {
        Self { folds, scaling: Scaling::Standard, seed: 42, shuffle: true }
    }

    /// Choose the feature-scaling strategy fitted per training fold.
    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set the fold-assignment seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal folds in dataset order instead of shuffling.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Run one full cross-validation pass.
    ///
    /// `build` constructs a fresh classifier for every fold. Per fold: the
    /// scaler is fitted on the training rows only, both slices are
    /// transformed with it, the classifier is fitted, and predictions on
    /// both slices are scored. A classifier error aborts the remaining
    /// folds and propagates.
    pub fn run<M, F>(&self, x: &Array2<f64>, y: &[u8], build: F) -> Result<CvRun>
    where
        M: BinaryClassifier,
        F: Fn() -> M,
    {
        if x.nrows() != y.len() {
            return Err(EvaluarError::ShapeMismatch { rows: x.nrows(), labels: y.len() });
        }

        let mut splitter = StratifiedKFold::new(self.folds).with_seed(self.seed);
        if !self.shuffle {
            splitter = splitter.without_shuffle();
        }
        let splits = splitter.split(y)?;

        let mut outcomes = Vec::with_capacity(splits.len());
        for (fold, (train_idx, test_idx)) in splits.iter().enumerate() {
            let x_train = x.select(Axis(0), train_idx);
            let x_test = x.select(Axis(0), test_idx);
            let y_train: Vec<u8> = train_idx.iter().map(|&i| y[i]).collect();
            let y_test: Vec<u8> = test_idx.iter().map(|&i| y[i]).collect();

            let scaler = self.scaling.fit(&x_train);
            let xs_train = scaler.transform(&x_train);
            let xs_test = scaler.transform(&x_test);

            let mut model = build();
            model.fit(&xs_train, &y_train)?;

            let train = score_predictions(&model, &xs_train, &y_train)?;
            let test = score_predictions(&model, &xs_test, &y_test)?;

            outcomes.push(FoldOutcome { fold, train, test, test_size: test_idx.len() });
        }

        Ok(CvRun { outcomes })
    }
}

fn score_predictions<M: BinaryClassifier>(
    model: &M,
    x: &Array2<f64>,
    y: &[u8],
) -> Result<FoldScore> {
    let probas = model.predict_proba(x);
    let predictions = model.predict(x);
    Ok(FoldScore {
        report: MetricsReport::from_labels(y, &predictions)?,
        roc_auc: roc_auc(y, &probas)?,
    })
}

/// Ordered per-fold results of one cross-validation pass.
///
/// Individual fold variance is load-bearing on small datasets, so the
/// full outcome list is exposed alongside the aggregate moments.
#[derive(Clone, Debug, Serialize)]
pub struct CvRun {
    outcomes: Vec<FoldOutcome>,
}

impl CvRun {
    /// All per-fold outcomes, in fold order.
    pub fn outcomes(&self) -> &[FoldOutcome] {
        &self.outcomes
    }

    /// The chosen metric on each held-out fold.
    pub fn test_scores(&self, metric: Metric) -> Vec<Option<f64>> {
        self.outcomes.iter().map(|o| metric.extract(&o.test)).collect()
    }

    /// The chosen metric on each training fold.
    pub fn train_scores(&self, metric: Metric) -> Vec<Option<f64>> {
        self.outcomes.iter().map(|o| metric.extract(&o.train)).collect()
    }

    /// Mean and spread of the held-out metric across folds.
    pub fn summary(&self, metric: Metric) -> ScoreSummary {
        summarize(&self.test_scores(metric), self.outcomes.len())
    }

    /// Mean and spread of the training metric across folds.
    pub fn train_summary(&self, metric: Metric) -> ScoreSummary {
        summarize(&self.train_scores(metric), self.outcomes.len())
    }
}

fn summarize(scores: &[Option<f64>], folds: usize) -> ScoreSummary {
    let defined: Vec<f64> = scores.iter().filter_map(|&s| s).collect();
    if defined.is_empty() {
        return ScoreSummary { mean: None, std: None, min: None, max: None, defined: 0, folds };
    }

    let n = defined.len() as f64;
    let mean = defined.iter().sum::<f64>() / n;
    let std = if defined.len() > 1 {
        let variance =
            defined.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (defined.len() - 1) as f64;
        Some(variance.sqrt())
    } else {
        Some(0.0)
    };
    let min = defined.iter().copied().fold(f64::INFINITY, f64::min);
    let max = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    ScoreSummary {
        mean: Some(mean),
        std,
        min: Some(min),
        max: Some(max),
        defined: defined.len(),
        folds,
    }
}

impl fmt::Display for CvRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>5} {:>10} {:>10} {:>10} {:>10}",
            "fold", "train acc", "test acc", "test f1", "test auc"
        )?;
        for outcome in &self.outcomes {
            let fmt_opt = |v: Option<f64>| match v {
                Some(v) => format!("{v:.4}"),
                None => "undef".to_string(),
            };
            writeln!(
                f,
                "{:>5} {:>10.4} {:>10.4} {:>10} {:>10}",
                outcome.fold,
                outcome.train.report.accuracy,
                outcome.test.report.accuracy,
                fmt_opt(outcome.test.report.f1),
                fmt_opt(outcome.test.roc_auc),
            )?;
        }

        let summary = self.summary(Metric::Accuracy);
        if let (Some(mean), Some(std)) = (summary.mean, summary.std) {
            writeln!(f, "mean test accuracy: {mean:.4} ± {std:.4}")?;
        }
        Ok(())
    }
}
