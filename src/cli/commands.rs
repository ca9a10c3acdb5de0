//! CLI command definitions and handlers

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use super::logging::{log, LogLevel};
use crate::cv::{CrossValidator, Metric};
use crate::data::{ensure_dataset, load_csv, Dataset};
use crate::error::{EvaluarError, Result};
use crate::model::{BinaryClassifier, LogisticRegression, MajorityClass};
use crate::preprocess::Scaling;
use crate::search::{backward_elimination, forward_selection, sweep};

/// Default raw-content URL for the preprocessed passenger dataset.
const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/MichaelAllen1966/2004_titanic/master/jupyter_notebooks/data/processed_data.csv";

/// Default local cache path.
const DEFAULT_DATA_PATH: &str = "data/titanic.csv";

/// Cross-validated evaluation of binary classifiers
#[derive(Parser)]
#[command(name = "evaluar", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress non-result output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Print per-fold details
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the dataset into the local cache if absent
    Fetch {
        /// Source URL
        #[arg(long, default_value = DEFAULT_DATA_URL)]
        url: String,
        /// Destination path
        #[arg(long, default_value = DEFAULT_DATA_PATH)]
        out: PathBuf,
    },
    /// Run stratified k-fold cross-validation on a dataset
    Evaluate {
        /// Path to the preprocessed CSV
        #[arg(default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
        #[command(flatten)]
        eval: EvalArgs,
        /// Emit the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Greedy feature selection driven by cross-validated scores
    Select {
        /// Path to the preprocessed CSV
        #[arg(default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
        /// Search direction: forward or backward
        #[arg(long, default_value = "forward")]
        direction: String,
        #[command(flatten)]
        eval: EvalArgs,
    },
    /// Evaluate a list of L2 regularization strengths
    Sweep {
        /// Path to the preprocessed CSV
        #[arg(default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
        /// Candidate L2 strengths
        #[arg(long, value_delimiter = ',', default_value = "0.0,0.001,0.01,0.1,1.0")]
        values: Vec<f64>,
        #[command(flatten)]
        eval: EvalArgs,
    },
}

/// Shared evaluation knobs
#[derive(clap::Args)]
pub struct EvalArgs {
    /// Number of cross-validation folds
    #[arg(long, default_value_t = 5)]
    pub folds: usize,

    /// Classifier: logistic or majority
    #[arg(long, default_value = "logistic")]
    pub model: String,

    /// Metric to aggregate: accuracy, precision, recall, specificity, f1, auc
    #[arg(long, default_value = "accuracy")]
    pub metric: String,

    /// Feature scaling: standard, minmax, or none
    #[arg(long, default_value = "standard")]
    pub scaling: String,

    /// Fold-assignment seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl EvalArgs {
    fn metric(&self) -> Result<Metric> {
        self.metric.parse()
    }

    fn scaling(&self) -> Result<Scaling> {
        match self.scaling.to_ascii_lowercase().as_str() {
            "standard" => Ok(Scaling::Standard),
            "minmax" => Ok(Scaling::MinMax),
            "none" => Ok(Scaling::None),
            other => Err(EvaluarError::InvalidParameter(format!(
                "unknown scaling '{other}' (expected standard, minmax, or none)"
            ))),
        }
    }

    fn validator(&self) -> Result<CrossValidator> {
        Ok(CrossValidator::new(self.folds).with_scaling(self.scaling()?).with_seed(self.seed))
    }

    fn build_model(&self, l2: f64) -> Result<Box<dyn BinaryClassifier>> {
        match self.model.to_ascii_lowercase().as_str() {
            "logistic" => Ok(Box::new(
                LogisticRegression::new()
                    .with_learning_rate(0.5)
                    .with_max_iter(2000)
                    .with_l2(l2),
            )),
            "majority" => Ok(Box::new(MajorityClass::new())),
            other => Err(EvaluarError::InvalidParameter(format!(
                "unknown model '{other}' (expected logistic or majority)"
            ))),
        }
    }
}

/// Dispatch a parsed CLI invocation.
pub fn run_command(cli: Cli) -> Result<()> {
    let level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Fetch { url, out } => {
            let path = ensure_dataset(&out, &url)?;
            log(level, LogLevel::Normal, &format!("dataset available at {}", path.display()));
            Ok(())
        }
        Command::Evaluate { data, eval, json } => run_evaluate(&data, &eval, json, level),
        Command::Select { data, direction, eval } => run_select(&data, &direction, &eval, level),
        Command::Sweep { data, values, eval } => run_sweep(&data, &values, &eval, level),
    }
}

fn load(path: &Path, level: LogLevel) -> Result<Dataset> {
    let dataset = load_csv(path)?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "loaded {} samples, {} features, positive rate {:.3}",
            dataset.n_samples(),
            dataset.n_features(),
            dataset.positive_rate()
        ),
    );
    Ok(dataset)
}

fn run_evaluate(path: &Path, eval: &EvalArgs, json: bool, level: LogLevel) -> Result<()> {
    let dataset = load(path, level)?;
    let metric = eval.metric()?;
    let cv = eval.validator()?;

    // Fail on a bad model name before folds run, not inside the closure.
    eval.build_model(0.0)?;

    let run = cv.run(dataset.features(), dataset.labels(), || {
        eval.build_model(0.0).expect("model name validated before the fold loop")
    })?;

    if json {
        let summary = run.summary(metric);
        println!(
            "{}",
            serde_json::json!({
                "metric": metric.name(),
                "summary": summary,
                "test_scores": run.test_scores(metric),
                "train_scores": run.train_scores(metric),
            })
        );
        return Ok(());
    }

    log(level, LogLevel::Normal, &run.to_string());
    let summary = run.summary(metric);
    let train = run.train_summary(metric);
    if let (Some(test_mean), Some(train_mean)) = (summary.mean, train.mean) {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "{}: test {:.4}, train {:.4} ({} of {} folds defined)",
                metric, test_mean, train_mean, summary.defined, summary.folds
            ),
        );
    }
    Ok(())
}

fn run_select(path: &Path, direction: &str, eval: &EvalArgs, level: LogLevel) -> Result<()> {
    let dataset = load(path, level)?;
    let metric = eval.metric()?;
    let cv = eval.validator()?;
    eval.build_model(0.0)?;
    let build = || eval.build_model(0.0).expect("model name validated before the search loop");

    let steps = match direction.to_ascii_lowercase().as_str() {
        "forward" => forward_selection(&dataset, &cv, metric, build)?,
        "backward" => backward_elimination(&dataset, &cv, metric, build)?,
        other => {
            return Err(EvaluarError::InvalidParameter(format!(
                "unknown direction '{other}' (expected forward or backward)"
            )))
        }
    };

    for (i, step) in steps.iter().enumerate() {
        let score = step
            .score
            .map_or_else(|| "undefined".to_string(), |s| format!("{s:.4}"));
        log(
            level,
            LogLevel::Normal,
            &format!("step {:>2}: {:<24} {} = {}", i + 1, step.name, metric, score),
        );
    }
    Ok(())
}

fn run_sweep(path: &Path, values: &[f64], eval: &EvalArgs, level: LogLevel) -> Result<()> {
    let dataset = load(path, level)?;
    let metric = eval.metric()?;
    let cv = eval.validator()?;
    eval.build_model(0.0)?;

    let points = sweep(&dataset, &cv, metric, values, |l2| {
        eval.build_model(l2).expect("model name validated before the sweep loop")
    })?;

    for point in &points {
        let mean = point
            .mean
            .map_or_else(|| "undefined".to_string(), |m| format!("{m:.4}"));
        log(
            level,
            LogLevel::Normal,
            &format!("l2 = {:<10} mean {} = {}", point.value, metric, mean),
        );
    }
    Ok(())
}
