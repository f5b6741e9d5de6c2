//! Storage layer for the expense tracker
//!
//! Presentation code reaches persistence only through [`RecordStore`], so
//! the CSV file can be swapped for anything that can append and reload.

pub mod expenses;
pub mod file_io;

pub use expenses::CsvExpenseStore;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Append-only persistence for expense records
pub trait RecordStore {
    /// Append one record to the end of the store
    fn append(&self, expense: &Expense) -> ExpenseResult<()>;

    /// Reload every record in insertion order; an absent store is empty
    fn load_all(&self) -> ExpenseResult<Vec<Expense>>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn append(&self, expense: &Expense) -> ExpenseResult<()> {
        (**self).append(expense)
    }

    fn load_all(&self) -> ExpenseResult<Vec<Expense>> {
        (**self).load_all()
    }
}
