//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all non-result output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with per-fold details
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the global CLI flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert!(matches!(LogLevel::from_flags(true, true), LogLevel::Quiet));
    }

    #[test]
    fn test_default_is_normal() {
        assert!(matches!(LogLevel::from_flags(false, false), LogLevel::Normal));
    }

    #[test]
    fn test_verbose_flag() {
        assert!(matches!(LogLevel::from_flags(false, true), LogLevel::Verbose));
    }
}
