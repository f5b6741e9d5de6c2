//! Dialog modules for the TUI
//!
//! Modal popups drawn over the expense table

pub mod expense;
pub mod help;
pub mod summary;
