//! In-memory labeled dataset

use ndarray::{Array2, Axis};

use crate::error::{EvaluarError, Result};
use crate::metrics::validate_binary;

/// A feature matrix with aligned binary labels and column names.
///
/// Features and labels are read-only after construction; evaluation code
/// derives index-based slices rather than mutating the dataset.
#[derive(Clone, Debug)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Vec<u8>,
    feature_names: Vec<String>,
}

impl Dataset {
    /// Assemble a dataset, validating shapes and label values.
    pub fn new(
        features: Array2<f64>,
        labels: Vec<u8>,
        feature_names: Vec<String>,
    ) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(EvaluarError::ShapeMismatch {
                rows: features.nrows(),
                labels: labels.len(),
            });
        }
        if labels.is_empty() {
            return Err(EvaluarError::EmptyDataset);
        }
        if features.ncols() != feature_names.len() {
            return Err(EvaluarError::InvalidParameter(format!(
                "feature matrix has {} columns but {} names were given",
                features.ncols(),
                feature_names.len()
            )));
        }
        validate_binary(&labels)?;

        Ok(Self { features, labels, feature_names })
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// The feature matrix.
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    /// The label vector.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Feature column names, in matrix order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Fraction of samples labeled 1.
    pub fn positive_rate(&self) -> f64 {
        let positives = self.labels.iter().filter(|&&y| y == 1).count();
        positives as f64 / self.labels.len() as f64
    }

    /// Project onto a column subset, keeping labels aligned.
    pub fn select_features(&self, columns: &[usize]) -> Result<Dataset> {
        for &col in columns {
            if col >= self.n_features() {
                return Err(EvaluarError::InvalidParameter(format!(
                    "feature index {col} out of range (dataset has {} features)",
                    self.n_features()
                )));
            }
        }
        let features = self.features.select(Axis(1), columns);
        let feature_names = columns.iter().map(|&c| self.feature_names[c].clone()).collect();
        Dataset::new(features, self.labels.clone(), feature_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> Dataset {
        Dataset::new(
            array![[1.0, 10.0, 0.5], [2.0, 20.0, 0.6], [3.0, 30.0, 0.7], [4.0, 40.0, 0.8]],
            vec![0, 1, 1, 0],
            vec!["age".into(), "fare".into(), "pclass".into()],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let ds = sample();
        assert_eq!(ds.n_samples(), 4);
        assert_eq!(ds.n_features(), 3);
        assert_eq!(ds.positive_rate(), 0.5);
        assert_eq!(ds.feature_names()[1], "fare");
    }

    #[test]
    fn test_select_features_projects_columns() {
        let ds = sample();
        let sub = ds.select_features(&[2, 0]).unwrap();

        assert_eq!(sub.n_features(), 2);
        assert_eq!(sub.feature_names(), &["pclass".to_string(), "age".to_string()]);
        assert_eq!(sub.features()[[1, 0]], 0.6);
        assert_eq!(sub.features()[[1, 1]], 2.0);
        assert_eq!(sub.labels(), ds.labels());
    }

    #[test]
    fn test_select_out_of_range_rejected() {
        let ds = sample();
        assert!(matches!(
            ds.select_features(&[0, 3]),
            Err(EvaluarError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let result = Dataset::new(array![[1.0], [2.0]], vec![0], vec!["x".into()]);
        assert!(matches!(result, Err(EvaluarError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_name_count_mismatch_rejected() {
        let result = Dataset::new(array![[1.0], [2.0]], vec![0, 1], vec![]);
        assert!(matches!(result, Err(EvaluarError::InvalidParameter(_))));
    }

    #[test]
    fn test_non_binary_labels_rejected() {
        let result = Dataset::new(array![[1.0], [2.0]], vec![0, 7], vec!["x".into()]);
        assert!(matches!(result, Err(EvaluarError::InvalidLabel { .. })));
    }
}
