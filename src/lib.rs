//! Expense Tracker - a personal expense logger for the terminal
//!
//! Expenses are appended to a flat CSV file as `date,category,amount` rows
//! and reloaded on demand to list them or total them per category. The same
//! add, list and summarize operations are offered through a text menu, a
//! ratatui form interface and one-shot subcommands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, user settings and logging setup
//! - `error`: Custom error types
//! - `models`: The expense record and raw form input
//! - `storage`: CSV record store behind the `RecordStore` trait
//! - `reports`: Per-category aggregation
//! - `services`: Add, list and summarize on top of a store
//! - `display`: Tables and ASCII charts for terminal output
//! - `cli`: Subcommand handlers and the interactive text menu
//! - `tui`: The ratatui form interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::ExpenseInput;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::CsvExpenseStore;
//!
//! let service = ExpenseService::new(CsvExpenseStore::new("expenses.csv"));
//! service.add(&ExpenseInput::new("2024-01-01", "Food", "12.50"))?;
//! let summary = service.summarize()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
