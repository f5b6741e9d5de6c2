//! Reports module for the expense tracker
//!
//! Provides the per-category summary computed from the full record set.

pub mod summary;

pub use summary::{CategorySummary, CategoryTotal};
