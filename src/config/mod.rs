//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::{MalformedRowPolicy, Settings};
