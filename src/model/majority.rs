//! Majority-class baseline

use ndarray::Array2;

use super::BinaryClassifier;
use crate::error::{EvaluarError, Result};
use crate::metrics::validate_binary;

/// Baseline classifier predicting the training-set majority label.
///
/// Probability output is the training positive rate, so thresholding at
/// 0.5 reproduces the majority vote (ties resolve to class 1). Useful as
/// the floor any real model must beat.
#[derive(Debug, Clone, Default)]
pub struct MajorityClass {
    positive_rate: Option<f64>,
}

impl MajorityClass {
    /// Create an unfitted baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Training positive rate, if fitted.
    pub fn positive_rate(&self) -> Option<f64> {
        self.positive_rate
    }
}

impl BinaryClassifier for MajorityClass {
    fn fit(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(EvaluarError::ShapeMismatch { rows: x.nrows(), labels: y.len() });
        }
        if y.is_empty() {
            return Err(EvaluarError::EmptyDataset);
        }
        validate_binary(y)?;

        let positives = y.iter().filter(|&&label| label == 1).count();
        self.positive_rate = Some(positives as f64 / y.len() as f64);
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Vec<f64> {
        let rate = self.positive_rate.expect("model must be fitted before predicting");
        vec![rate; x.nrows()]
    }
}
