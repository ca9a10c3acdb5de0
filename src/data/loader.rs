//! CSV loading for the passenger dataset

use std::path::Path;

use ndarray::Array2;

use super::frame::Dataset;
use crate::error::{EvaluarError, Result};

/// Label column name.
const LABEL_COLUMN: &str = "Survived";
/// Identifier column, dropped before modeling.
const ID_COLUMN: &str = "PassengerId";

/// Load a preprocessed passenger CSV into a [`Dataset`].
///
/// Expects one header row, a 0/1 `Survived` label column, and
/// already-encoded numeric feature columns. `PassengerId` is dropped.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EvaluarError::DatasetNotFound { path: path.to_path_buf() });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| EvaluarError::CsvParsing {
        path: path.to_path_buf(),
        row: 0,
        message: e.to_string(),
    })?;

    let headers = reader
        .headers()
        .map_err(|e| EvaluarError::CsvParsing {
            path: path.to_path_buf(),
            row: 0,
            message: e.to_string(),
        })?
        .clone();

    let label_col = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .ok_or_else(|| EvaluarError::MissingColumn { name: LABEL_COLUMN.to_string() })?;
    let id_col = headers.iter().position(|h| h == ID_COLUMN);

    let feature_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != label_col && Some(*i) != id_col)
        .map(|(_, h)| h.to_string())
        .collect();

    let mut labels: Vec<u8> = Vec::new();
    let mut values: Vec<f64> = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        // Header is row 1 in user-facing messages.
        let row = row_idx + 2;
        let record = record.map_err(|e| EvaluarError::CsvParsing {
            path: path.to_path_buf(),
            row,
            message: e.to_string(),
        })?;

        for (col, field) in record.iter().enumerate() {
            if Some(col) == id_col {
                continue;
            }
            let parsed: f64 = field.trim().parse().map_err(|_| EvaluarError::CsvParsing {
                path: path.to_path_buf(),
                row,
                message: format!("'{field}' in column '{}' is not numeric", &headers[col]),
            })?;
            if col == label_col {
                if parsed == 0.0 {
                    labels.push(0);
                } else if parsed == 1.0 {
                    labels.push(1);
                } else {
                    return Err(EvaluarError::InvalidLabel { index: row_idx, value: parsed });
                }
            } else {
                values.push(parsed);
            }
        }
    }

    if labels.is_empty() {
        return Err(EvaluarError::EmptyDataset);
    }

    let n_features = feature_names.len();
    let features = Array2::from_shape_vec((labels.len(), n_features), values).map_err(|e| {
        EvaluarError::CsvParsing {
            path: path.to_path_buf(),
            row: 0,
            message: format!("ragged rows: {e}"),
        }
    })?;

    Dataset::new(features, labels, feature_names)
}
