//! Injected classifier capability
//!
//! The evaluation harness is polymorphic over classifier type: anything
//! honoring [`BinaryClassifier`] can be driven through cross-validation,
//! feature selection, or a hyperparameter sweep. Two reference models are
//! provided; external model families plug in through the same trait.

mod logistic;
mod majority;

use ndarray::Array2;

use crate::error::Result;

pub use logistic::LogisticRegression;
pub use majority::MajorityClass;

/// A fittable binary classifier.
///
/// `fit` consumes training features and 0/1 labels; `predict_proba`
/// returns the probability of class 1 per row. The default `predict`
/// thresholds probabilities at 0.5.
pub trait BinaryClassifier {
    /// Fit the model to training data.
    fn fit(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<()>;

    /// Probability of class 1 for each row of `x`.
    fn predict_proba(&self, x: &Array2<f64>) -> Vec<f64>;

    /// Hard 0/1 predictions at the 0.5 decision boundary.
    fn predict(&self, x: &Array2<f64>) -> Vec<u8> {
        self.predict_proba(x).iter().map(|&p| u8::from(p >= 0.5)).collect()
    }
}

impl BinaryClassifier for Box<dyn BinaryClassifier> {
    fn fit(&mut self, x: &Array2<f64>, y: &[u8]) -> Result<()> {
        (**self).fit(x, y)
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Vec<f64> {
        (**self).predict_proba(x)
    }

    fn predict(&self, x: &Array2<f64>) -> Vec<u8> {
        (**self).predict(x)
    }
}
