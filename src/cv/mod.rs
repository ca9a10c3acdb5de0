//! Stratified k-fold evaluation harness
//!
//! Partitions a labeled dataset into class-balanced folds, trains an
//! injected classifier on each fold's training portion, evaluates on the
//! held-out portion, and collects comparable per-fold scores. Scaling is
//! fitted on training rows only, so held-out statistics never leak into
//! the transform.
//!
//! ## Example
//!
//! ```ignore
//! use evaluar::cv::{CrossValidator, Metric};
//! use evaluar::model::LogisticRegression;
//!
//! let run = CrossValidator::new(5)
//!     .with_seed(42)
//!     .run(dataset.features(), dataset.labels(), || {
//!         LogisticRegression::new().with_learning_rate(0.5)
//!     })?;
//! println!("{run}");
//! let summary = run.summary(Metric::Accuracy);
//! ```

mod harness;
mod metric;
mod stratified;

pub use harness::{CrossValidator, CvRun, FoldOutcome, FoldScore, ScoreSummary};
pub use metric::Metric;
pub use stratified::StratifiedKFold;
