//! Column-wise scaling strategies

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Scaling strategy applied per feature column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scaling {
    /// Leave features untouched
    None,
    /// Subtract the column mean, divide by the column standard deviation
    #[default]
    Standard,
    /// Map the column range onto [0, 1]
    MinMax,
}

impl Scaling {
    /// Fit per-column parameters from `x` (the training rows only).
    pub fn fit(&self, x: &Array2<f64>) -> FittedScaler {
        let params = match self {
            Scaling::None => vec![(0.0, 1.0); x.ncols()],
            Scaling::Standard => x
                .columns()
                .into_iter()
                .map(|col| {
                    let n = col.len() as f64;
                    let mean = col.sum() / n;
                    let variance = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
                    let std = variance.sqrt();
                    // Constant columns scale to 0 rather than dividing by zero.
                    (mean, if std > 0.0 { std } else { 1.0 })
                })
                .collect(),
            Scaling::MinMax => x
                .columns()
                .into_iter()
                .map(|col| {
                    let min = col.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = col.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    let range = max - min;
                    (min, if range > 0.0 { range } else { 1.0 })
                })
                .collect(),
        };
        FittedScaler { params }
    }
}

/// Frozen per-column `(offset, divisor)` pairs.
///
/// Each value transforms as `(v - offset) / divisor`.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedScaler {
    params: Vec<(f64, f64)>,
}

impl FittedScaler {
    /// Apply the fitted transform to any matrix with the same column count.
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut out = x.clone();
        for (j, &(offset, divisor)) in self.params.iter().enumerate() {
            for v in out.column_mut(j) {
                *v = (*v - offset) / divisor;
            }
        }
        out
    }

    /// The fitted `(offset, divisor)` pair for each column.
    pub fn params(&self) -> &[(f64, f64)] {
        &self.params
    }
}
