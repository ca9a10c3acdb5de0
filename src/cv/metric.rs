//! Fold-score selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::harness::FoldScore;
use crate::error::EvaluarError;

/// The scalar a harness run or search loop reduces each fold to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Fraction of correct predictions
    Accuracy,
    /// TP / predicted positives
    Precision,
    /// TP / observed positives
    Recall,
    /// TN / observed negatives
    Specificity,
    /// Harmonic mean of precision and recall
    F1,
    /// Area under the ROC curve, from predicted probabilities
    RocAuc,
}

impl Metric {
    /// Pull this metric out of a fold score; `None` when undefined there.
    pub fn extract(&self, score: &FoldScore) -> Option<f64> {
        match self {
            Metric::Accuracy => Some(score.report.accuracy),
            Metric::Precision => score.report.precision,
            Metric::Recall => score.report.recall,
            Metric::Specificity => score.report.specificity,
            Metric::F1 => score.report.f1,
            Metric::RocAuc => score.roc_auc,
        }
    }

    /// Metric name as shown in tables.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Accuracy => "accuracy",
            Metric::Precision => "precision",
            Metric::Recall => "recall",
            Metric::Specificity => "specificity",
            Metric::F1 => "f1",
            Metric::RocAuc => "roc_auc",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = EvaluarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accuracy" => Ok(Metric::Accuracy),
            "precision" | "positive_predictive_value" => Ok(Metric::Precision),
            "recall" | "sensitivity" | "true_positive_rate" => Ok(Metric::Recall),
            "specificity" | "true_negative_rate" => Ok(Metric::Specificity),
            "f1" => Ok(Metric::F1),
            "auc" | "roc_auc" => Ok(Metric::RocAuc),
            other => Err(EvaluarError::InvalidParameter(format!(
                "unknown metric '{other}' (expected accuracy, precision, recall, specificity, f1, or auc)"
            ))),
        }
    }
}
