//! ROC-AUC from predicted probabilities

use super::confusion::validate_binary;
use crate::error::{EvaluarError, Result};

/// Area under the ROC curve, computed from ranking rather than an explicit
/// curve sweep (Mann-Whitney U formulation with midrank tie handling).
///
/// Returns `Ok(None)` when either class is absent: a ranking score is
/// undefined without both positives and negatives to separate.
pub fn roc_auc(observed: &[u8], scores: &[f64]) -> Result<Option<f64>> {
    if observed.len() != scores.len() {
        return Err(EvaluarError::LengthMismatch {
            observed: observed.len(),
            predicted: scores.len(),
        });
    }
    if observed.is_empty() {
        return Err(EvaluarError::EmptyDataset);
    }
    validate_binary(observed)?;

    let n_pos = observed.iter().filter(|&&y| y == 1).count();
    let n_neg = observed.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Ok(None);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[a].partial_cmp(&scores[b]).unwrap_or(std::cmp::Ordering::Equal)
    });

    // Midranks: tied scores all receive the average of their rank range.
    let mut ranks = vec![0.0_f64; scores.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        let midrank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = midrank;
        }
        i = j + 1;
    }

    let positive_rank_sum: f64 = observed
        .iter()
        .zip(ranks.iter())
        .filter(|(&y, _)| y == 1)
        .map(|(_, &r)| r)
        .sum();

    let u = positive_rank_sum - (n_pos * (n_pos + 1)) as f64 / 2.0;
    Ok(Some(u / (n_pos * n_neg) as f64))
}
