//! Evaluar CLI
//!
//! Cross-validated evaluation entry point for the evaluar library.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the dataset cache
//! evaluar fetch
//!
//! # Cross-validate logistic regression
//! evaluar evaluate data/titanic.csv --folds 10
//!
//! # Greedy feature selection
//! evaluar select data/titanic.csv --direction forward
//!
//! # Regularization sweep
//! evaluar sweep data/titanic.csv --values 0.0,0.01,0.1
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
