//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Platform config directory (`~/.config/expense-tracker` on Linux,
//!    `~/Library/Application Support/expense-tracker` on macOS,
//!    `%APPDATA%\expense-tracker\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for settings, the default store and logs
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the expense store
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Get the path of the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine home directory".into()))
}
