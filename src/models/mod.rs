//! Core data models for the expense tracker
//!
//! An expense is a flat `date,category,amount` record. Categories are free
//! text; the suggested list only drives prompts and hints.

pub mod category;
pub mod expense;

pub use category::SuggestedCategory;
pub use expense::{Expense, ExpenseInput};
