//! Logging setup
//!
//! Installs a `tracing` subscriber. `RUST_LOG` takes precedence over the
//! configured level. While the TUI owns the terminal, events are appended
//! to a log file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::ExpenseError;

/// Where log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the event filter from `RUST_LOG` or the fallback level
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
pub fn init_logging(level: &str, target: LogTarget<'_>) -> Result<(), ExpenseError> {
    let filter = build_filter(level);

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| ExpenseError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_invalid_level_falls_back() {
        // Must not panic on a bad directive
        let filter = build_filter("==not a filter==");
        assert!(!filter.to_string().is_empty());
    }
}
