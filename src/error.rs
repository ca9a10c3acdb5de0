//! Error types with actionable diagnostics.
//!
//! All errors include enough context to resolve the problem without
//! consulting external documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for evaluar operations.
pub type Result<T> = std::result::Result<T, EvaluarError>;

/// Errors that can occur while loading data or running an evaluation.
#[derive(Error, Debug)]
pub enum EvaluarError {
    /// Dataset file not found at the expected path.
    #[error("Dataset file not found: {path}\n  → Run `evaluar fetch` first, or point --data at an existing CSV")]
    DatasetNotFound { path: PathBuf },

    /// CSV row could not be parsed.
    #[error("CSV parse error in {path} at row {row}: {message}")]
    CsvParsing { path: PathBuf, row: usize, message: String },

    /// A required column is absent from the CSV header.
    #[error("Required column '{name}' missing from header\n  → The label column must be named 'Survived'")]
    MissingColumn { name: String },

    /// A label value other than 0 or 1 was encountered.
    #[error("Label at index {index} is {value}, expected 0 or 1")]
    InvalidLabel { index: usize, value: f64 },

    /// Observed and predicted vectors have different lengths.
    #[error("Length mismatch: observed has {observed} entries, predicted has {predicted}")]
    LengthMismatch { observed: usize, predicted: usize },

    /// Feature matrix and label vector disagree on sample count.
    #[error("Shape mismatch: feature matrix has {rows} rows but label vector has {labels}")]
    ShapeMismatch { rows: usize, labels: usize },

    /// Operation requires at least one sample.
    #[error("Empty dataset: at least one sample is required")]
    EmptyDataset,

    /// A configuration value is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// HTTP fetch failure.
    #[error("HTTP error: {message}\n  → Check the URL and network connection")]
    Http { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl EvaluarError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::DatasetNotFound { .. }
                | Self::CsvParsing { .. }
                | Self::MissingColumn { .. }
                | Self::InvalidParameter(_)
                | Self::Http { .. }
        )
    }
}
