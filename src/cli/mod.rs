//! CLI module for evaluar
//!
//! Command definitions, handlers, and output-level gating.

mod commands;
mod logging;

pub use commands::{run_command, Cli};
pub use logging::LogLevel;
