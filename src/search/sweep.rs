//! Hyperparameter sweep over a fixed candidate list

use serde::Serialize;

use crate::cv::{CrossValidator, Metric};
use crate::data::Dataset;
use crate::error::Result;
use crate::model::BinaryClassifier;

/// Cross-validated result for one candidate hyperparameter value.
#[derive(Clone, Debug, Serialize)]
pub struct SweepPoint {
    /// The hyperparameter value evaluated
    pub value: f64,
    /// Per-fold held-out scores, in fold order
    pub scores: Vec<Option<f64>>,
    /// Mean over the defined per-fold scores
    pub mean: Option<f64>,
}

/// Evaluate every caller-supplied hyperparameter value with the same
/// cross-validation setup.
///
/// Unlike the selection loops there is no elimination: each value is
/// evaluated and reported in input order, and the caller ranks them.
pub fn sweep<M, F>(
    data: &Dataset,
    cv: &CrossValidator,
    metric: Metric,
    values: &[f64],
    build_with: F,
) -> Result<Vec<SweepPoint>>
where
    M: BinaryClassifier,
    F: Fn(f64) -> M,
{
    let mut points = Vec::with_capacity(values.len());
    for &value in values {
        let run = cv.run(data.features(), data.labels(), || build_with(value))?;
        let scores = run.test_scores(metric);
        let mean = run.summary(metric).mean;
        points.push(SweepPoint { value, scores, mean });
    }
    Ok(points)
}
