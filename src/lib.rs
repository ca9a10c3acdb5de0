//! Evaluation toolkit for binary classifiers
//!
//! Provides the two pieces of logic every classifier comparison needs and
//! the loops that drive them:
//!
//! - `metrics`: confusion-matrix rates and ROC-AUC with undefined values
//!   surfaced as `Option` rather than non-finite floats
//! - `cv`: stratified k-fold cross-validation with per-training-fold
//!   scaling and an injected classifier
//! - `search`: forward/backward feature selection and hyperparameter
//!   sweeps over the harness
//! - `data`: CSV loading and a memoized dataset fetch
//!
//! ## Example
//!
//! ```no_run
//! use evaluar::cv::{CrossValidator, Metric};
//! use evaluar::data::load_csv;
//! use evaluar::model::LogisticRegression;
//!
//! let dataset = load_csv("data/titanic.csv")?;
//! let run = CrossValidator::new(5).run(dataset.features(), dataset.labels(), || {
//!     LogisticRegression::new().with_learning_rate(0.5)
//! })?;
//! println!("{run}");
//! # Ok::<(), evaluar::EvaluarError>(())
//! ```

pub mod cli;
pub mod cv;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model;
pub mod preprocess;
pub mod search;

pub use cv::{CrossValidator, CvRun, FoldOutcome, FoldScore, Metric, ScoreSummary, StratifiedKFold};
pub use data::{ensure_dataset, load_csv, Dataset};
pub use error::{EvaluarError, Result};
pub use metrics::{roc_auc, BinaryConfusion, MetricsReport};
pub use model::{BinaryClassifier, LogisticRegression, MajorityClass};
pub use preprocess::{FittedScaler, Scaling};
pub use search::{backward_elimination, forward_selection, sweep, SelectionStep, SweepPoint};
