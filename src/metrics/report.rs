//! Named classification-performance statistics

use std::fmt;

use serde::Serialize;

use super::confusion::BinaryConfusion;
use crate::error::Result;

/// Every metric name resolvable through [`MetricsReport::get`], aliases included.
pub const METRIC_NAMES: &[&str] = &[
    "observed_positive_rate",
    "observed_negative_rate",
    "predicted_positive_rate",
    "predicted_negative_rate",
    "accuracy",
    "precision",
    "positive_predictive_value",
    "recall",
    "sensitivity",
    "true_positive_rate",
    "specificity",
    "true_negative_rate",
    "f1",
    "positive_likelihood",
    "negative_likelihood",
    "false_positive_rate",
    "false_negative_rate",
    "negative_predictive_value",
];

/// Named rates derived from the 2x2 confusion matrix.
///
/// Ratios whose denominator can be zero are `Option<f64>`: `None` means the
/// rate is undefined for this batch (e.g. no observed positives). Callers
/// decide how to display or aggregate undefined entries.
///
/// `precision` and `positive_predictive_value` are two names for the same
/// value, as are `recall`/`sensitivity`/`true_positive_rate` and
/// `specificity`/`true_negative_rate`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricsReport {
    /// mean(observed == 1)
    pub observed_positive_rate: f64,
    /// mean(observed == 0)
    pub observed_negative_rate: f64,
    /// mean(predicted == 1)
    pub predicted_positive_rate: f64,
    /// mean(predicted == 0)
    pub predicted_negative_rate: f64,
    /// mean(predicted == observed)
    pub accuracy: f64,
    /// TP / (TP + FP); undefined when nothing is predicted positive
    pub precision: Option<f64>,
    /// TP / (TP + FN); undefined when nothing is observed positive
    pub recall: Option<f64>,
    /// TN / (TN + FP); undefined when nothing is observed negative
    pub specificity: Option<f64>,
    /// 2 * precision * recall / (precision + recall)
    pub f1: Option<f64>,
    /// sensitivity / (1 - specificity)
    pub positive_likelihood: Option<f64>,
    /// (1 - sensitivity) / specificity
    pub negative_likelihood: Option<f64>,
    /// 1 - specificity
    pub false_positive_rate: Option<f64>,
    /// 1 - sensitivity
    pub false_negative_rate: Option<f64>,
    /// TN / (TN + FN); undefined when nothing is predicted negative
    pub negative_predictive_value: Option<f64>,
}

/// Ratio that is `None` when its denominator is zero.
fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

impl MetricsReport {
    /// Score a prediction vector against ground truth.
    ///
    /// Accepts any 0/1 label slice; `Vec<u8>`, arrays, and slices all
    /// produce identical results. Errors on length mismatch, empty input,
    /// or values outside {0, 1}.
    pub fn from_labels(observed: &[u8], predicted: &[u8]) -> Result<Self> {
        let cm = BinaryConfusion::from_labels(observed, predicted)?;
        Ok(Self::from_confusion(&cm))
    }

    /// Derive the full report from an already-computed confusion matrix.
    pub fn from_confusion(cm: &BinaryConfusion) -> Self {
        let n = cm.total() as f64;

        let precision = ratio(cm.true_positives(), cm.predicted_positives());
        let recall = ratio(cm.true_positives(), cm.observed_positives());
        let specificity = ratio(cm.true_negatives(), cm.observed_negatives());

        let f1 = match (precision, recall) {
            (Some(p), Some(r)) if p + r > 0.0 => Some(2.0 * p * r / (p + r)),
            _ => None,
        };

        // Likelihood ratios compound two denominators: undefined whenever
        // either source rate is undefined or the outer denominator is zero.
        let positive_likelihood = match (recall, specificity) {
            (Some(sens), Some(spec)) if spec < 1.0 => Some(sens / (1.0 - spec)),
            _ => None,
        };
        let negative_likelihood = match (recall, specificity) {
            (Some(sens), Some(spec)) if spec > 0.0 => Some((1.0 - sens) / spec),
            _ => None,
        };

        Self {
            observed_positive_rate: cm.observed_positives() as f64 / n,
            observed_negative_rate: cm.observed_negatives() as f64 / n,
            predicted_positive_rate: cm.predicted_positives() as f64 / n,
            predicted_negative_rate: cm.predicted_negatives() as f64 / n,
            accuracy: cm.accuracy(),
            precision,
            recall,
            specificity,
            f1,
            positive_likelihood,
            negative_likelihood,
            false_positive_rate: specificity.map(|s| 1.0 - s),
            false_negative_rate: recall.map(|s| 1.0 - s),
            negative_predictive_value: ratio(cm.true_negatives(), cm.predicted_negatives()),
        }
    }

    /// Look up a metric by name.
    ///
    /// Returns `None` for an unknown name, `Some(None)` for a known metric
    /// that is undefined on this batch, and `Some(Some(v))` otherwise.
    pub fn get(&self, name: &str) -> Option<Option<f64>> {
        let value = match name {
            "observed_positive_rate" => Some(self.observed_positive_rate),
            "observed_negative_rate" => Some(self.observed_negative_rate),
            "predicted_positive_rate" => Some(self.predicted_positive_rate),
            "predicted_negative_rate" => Some(self.predicted_negative_rate),
            "accuracy" => Some(self.accuracy),
            "precision" | "positive_predictive_value" => self.precision,
            "recall" | "sensitivity" | "true_positive_rate" => self.recall,
            "specificity" | "true_negative_rate" => self.specificity,
            "f1" => self.f1,
            "positive_likelihood" => self.positive_likelihood,
            "negative_likelihood" => self.negative_likelihood,
            "false_positive_rate" => self.false_positive_rate,
            "false_negative_rate" => self.false_negative_rate,
            "negative_predictive_value" => self.negative_predictive_value,
            _ => return None,
        };
        Some(value)
    }

    /// Iterate over every `(name, value)` pair, aliases included.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        METRIC_NAMES.iter().map(|&name| {
            (name, self.get(name).expect("METRIC_NAMES entries must resolve"))
        })
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            match value {
                Some(v) => writeln!(f, "{name:>26}: {v:.4}")?,
                None => writeln!(f, "{name:>26}: undefined")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_some_eq(value: Option<f64>, expected: f64) {
        let v = value.expect("metric should be defined");
        assert!((v - expected).abs() < 1e-12, "expected {expected}, got {v}");
    }

    #[test]
    fn test_half_right_half_wrong() {
        // TP=1, FN=1, TN=1, FP=1: every rate lands on 0.5.
        let report = MetricsReport::from_labels(&[1, 1, 0, 0], &[1, 0, 0, 1]).unwrap();

        assert!((report.accuracy - 0.5).abs() < 1e-12);
        assert_some_eq(report.precision, 0.5);
        assert_some_eq(report.recall, 0.5);
        assert_some_eq(report.specificity, 0.5);
        assert_some_eq(report.f1, 0.5);
        assert_some_eq(report.false_positive_rate, 0.5);
        assert_some_eq(report.false_negative_rate, 0.5);
        assert_some_eq(report.negative_predictive_value, 0.5);
        assert_some_eq(report.positive_likelihood, 1.0);
        assert_some_eq(report.negative_likelihood, 1.0);
    }

    #[test]
    fn test_perfect_prediction_leaves_positive_likelihood_undefined() {
        let y = [1, 0, 1, 0, 1];
        let report = MetricsReport::from_labels(&y, &y).unwrap();

        assert!((report.accuracy - 1.0).abs() < 1e-12);
        assert_some_eq(report.precision, 1.0);
        assert_some_eq(report.recall, 1.0);
        assert_some_eq(report.specificity, 1.0);
        assert_some_eq(report.f1, 1.0);
        // specificity == 1 makes the denominator 1 - specificity zero;
        // the undefined value is reported as None, never as infinity.
        assert_eq!(report.positive_likelihood, None);
        assert_some_eq(report.negative_likelihood, 0.0);
    }

    #[test]
    fn test_all_positive_observed_leaves_specificity_undefined() {
        let report = MetricsReport::from_labels(&[1, 1, 1], &[1, 0, 1]).unwrap();

        assert_eq!(report.specificity, None);
        assert_eq!(report.false_positive_rate, None);
        assert_eq!(report.positive_likelihood, None);
        assert_eq!(report.negative_likelihood, None);
        assert_some_eq(report.recall, 2.0 / 3.0);
    }

    #[test]
    fn test_nothing_predicted_positive_leaves_precision_undefined() {
        let report = MetricsReport::from_labels(&[1, 0, 1], &[0, 0, 0]).unwrap();

        assert_eq!(report.precision, None);
        assert_eq!(report.f1, None);
        assert_some_eq(report.recall, 0.0);
        assert_some_eq(report.negative_predictive_value, 1.0 / 3.0);
    }

    #[test]
    fn test_vec_and_array_inputs_agree() {
        let observed_vec: Vec<u8> = vec![1, 1, 0, 0, 1];
        let predicted_vec: Vec<u8> = vec![1, 0, 0, 1, 1];
        let observed_arr: [u8; 5] = [1, 1, 0, 0, 1];
        let predicted_arr: [u8; 5] = [1, 0, 0, 1, 1];

        let from_vec = MetricsReport::from_labels(&observed_vec, &predicted_vec).unwrap();
        let from_arr = MetricsReport::from_labels(&observed_arr, &predicted_arr).unwrap();

        assert_eq!(from_vec, from_arr);
    }

    #[test]
    fn test_precision_alias_matches() {
        let report = MetricsReport::from_labels(&[1, 1, 0, 0], &[1, 0, 0, 1]).unwrap();
        assert_eq!(report.get("precision"), report.get("positive_predictive_value"));
        assert_eq!(report.get("recall"), report.get("sensitivity"));
        assert_eq!(report.get("recall"), report.get("true_positive_rate"));
        assert_eq!(report.get("specificity"), report.get("true_negative_rate"));
    }

    #[test]
    fn test_get_unknown_name() {
        let report = MetricsReport::from_labels(&[1, 0], &[0, 1]).unwrap();
        assert_eq!(report.get("brier_score"), None);
    }

    #[test]
    fn test_iter_covers_all_names() {
        let report = MetricsReport::from_labels(&[1, 0], &[1, 0]).unwrap();
        let names: Vec<&str> = report.iter().map(|(name, _)| name).collect();
        assert_eq!(names.len(), METRIC_NAMES.len());
    }

    #[test]
    fn test_observed_and_predicted_rates_sum_to_one() {
        let report = MetricsReport::from_labels(&[1, 1, 0], &[0, 1, 1]).unwrap();
        assert!((report.observed_positive_rate + report.observed_negative_rate - 1.0).abs() < 1e-12);
        assert!((report.predicted_positive_rate + report.predicted_negative_rate - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_marks_undefined() {
        let y = [1, 1, 1];
        let report = MetricsReport::from_labels(&y, &y).unwrap();
        let rendered = report.to_string();
        assert!(rendered.contains("undefined"));
        assert!(rendered.contains("accuracy"));
    }
}
