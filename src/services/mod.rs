//! Service layer for the expense tracker
//!
//! The service layer is the narrow interface every presentation layer
//! drives: it validates raw input, persists through a [`RecordStore`] and
//! builds summaries from reloaded records.
//!
//! [`RecordStore`]: crate::storage::RecordStore

pub mod expense;

pub use expense::ExpenseService;
