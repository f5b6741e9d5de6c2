//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for the text
//! menu and the one-shot subcommands.

pub mod expense;
pub mod report;

pub use expense::format_expense_table;
pub use report::{format_bar, format_bar_chart};
