//! Greedy feature-selection loops

use serde::Serialize;

use crate::cv::{CrossValidator, Metric};
use crate::data::Dataset;
use crate::error::Result;
use crate::model::BinaryClassifier;

/// One step of a selection search: the feature added (forward) or removed
/// (backward), the cross-validated score of the resulting set, and the set
/// itself.
#[derive(Clone, Debug, Serialize)]
pub struct SelectionStep {
    /// Column index in the original dataset
    pub feature: usize,
    /// Column name in the original dataset
    pub name: String,
    /// Mean held-out metric of the feature set after this step
    pub score: Option<f64>,
    /// Selected feature set after this step, ascending
    pub selected: Vec<usize>,
}

/// Does `challenger` strictly beat `incumbent`? Undefined scores rank
/// below any defined score; two undefined scores keep the incumbent, so
/// ties resolve by iteration order.
fn beats(challenger: Option<f64>, incumbent: Option<f64>) -> bool {
    match (challenger, incumbent) {
        (Some(c), Some(i)) => c > i,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn mean_score<M, F>(
    data: &Dataset,
    columns: &[usize],
    cv: &CrossValidator,
    metric: Metric,
    build: &F,
) -> Result<Option<f64>>
where
    M: BinaryClassifier,
    F: Fn() -> M,
{
    let subset = data.select_features(columns)?;
    let run = cv.run(subset.features(), subset.labels(), build)?;
    Ok(run.summary(metric).mean)
}

/// Forward selection: start empty, greedily add the feature whose
/// addition yields the highest mean held-out score, until every feature
/// is selected.
///
/// The recorded score sequence is not guaranteed monotone; the search is
/// greedy, not exhaustive. Ties break toward the lowest feature index.
pub fn forward_selection<M, F>(
    data: &Dataset,
    cv: &CrossValidator,
    metric: Metric,
    build: F,
) -> Result<Vec<SelectionStep>>
where
    M: BinaryClassifier,
    F: Fn() -> M,
{
    let mut selected: Vec<usize> = Vec::new();
    let mut steps = Vec::with_capacity(data.n_features());

    while selected.len() < data.n_features() {
        let mut best: Option<(usize, Option<f64>)> = None;

        for candidate in 0..data.n_features() {
            if selected.contains(&candidate) {
                continue;
            }
            let mut columns = selected.clone();
            columns.push(candidate);
            columns.sort_unstable();

            let score = mean_score(data, &columns, cv, metric, &build)?;
            if best.is_none() || beats(score, best.as_ref().and_then(|(_, s)| *s)) {
                best = Some((candidate, score));
            }
        }

        let (feature, score) = best.expect("loop runs only while candidates remain");
        selected.push(feature);
        selected.sort_unstable();
        steps.push(SelectionStep {
            feature,
            name: data.feature_names()[feature].clone(),
            score,
            selected: selected.clone(),
        });
    }

    Ok(steps)
}

/// Backward elimination: start with every feature, greedily remove the
/// feature whose removal costs the least score, until one remains.
pub fn backward_elimination<M, F>(
    data: &Dataset,
    cv: &CrossValidator,
    metric: Metric,
    build: F,
) -> Result<Vec<SelectionStep>>
where
    M: BinaryClassifier,
    F: Fn() -> M,
{
    let mut selected: Vec<usize> = (0..data.n_features()).collect();
    let mut steps = Vec::new();

    while selected.len() > 1 {
        let mut best: Option<(usize, Option<f64>)> = None;

        for &candidate in &selected {
            let columns: Vec<usize> =
                selected.iter().copied().filter(|&c| c != candidate).collect();

            let score = mean_score(data, &columns, cv, metric, &build)?;
            if best.is_none() || beats(score, best.as_ref().and_then(|(_, s)| *s)) {
                best = Some((candidate, score));
            }
        }

        let (feature, score) = best.expect("loop runs only while removals remain");
        selected.retain(|&c| c != feature);
        steps.push(SelectionStep {
            feature,
            name: data.feature_names()[feature].clone(),
            score,
            selected: selected.clone(),
        });
    }

    Ok(steps)
}
