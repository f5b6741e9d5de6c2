//! User settings for the expense tracker
//!
//! Manages the currency symbol, suggested categories, store location,
//! malformed-row handling and log level.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::SuggestedCategory;

/// What to do with a persisted row that cannot be read back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRowPolicy {
    /// Drop the row and log a warning (default)
    #[default]
    Skip,
    /// Fail the whole load
    Strict,
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Categories suggested in prompts (not enforced)
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Explicit store location; defaults to `expenses.csv` in the base dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses_file: Option<PathBuf>,

    /// Handling of malformed rows on load
    #[serde(default)]
    pub malformed_rows: MalformedRowPolicy,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_categories() -> Vec<String> {
    SuggestedCategory::names()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            categories: default_categories(),
            expenses_file: None,
            malformed_rows: MalformedRowPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Resolve the store location.
    ///
    /// An explicit override (command line or environment) wins over the
    /// settings file, which wins over the default in the base directory.
    pub fn resolve_expenses_file(
        &self,
        paths: &ExpensePaths,
        override_path: Option<&Path>,
    ) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }
        self.expenses_file
            .clone()
            .unwrap_or_else(|| paths.expenses_file())
    }

    /// Category prompt text, e.g. "Food, Transportation, Other"
    pub fn category_hint(&self) -> String {
        self.categories.join(", ")
    }
}
