//! Expense service
//!
//! Add, list and summarize on top of any record store.

use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseInput};
use crate::reports::CategorySummary;
use crate::storage::RecordStore;

/// Service for adding, listing and summarizing expenses
pub struct ExpenseService<S> {
    store: S,
}

impl<S: RecordStore> ExpenseService<S> {
    /// Create a new expense service over a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add an expense from raw input, validating only the amount.
    ///
    /// Nothing is written when the amount does not parse.
    pub fn add(&self, input: &ExpenseInput) -> ExpenseResult<Expense> {
        let expense = input.to_expense()?;
        self.persist(expense)
    }

    /// Add an expense from a form, rejecting empty fields as well
    pub fn add_required(&self, input: &ExpenseInput) -> ExpenseResult<Expense> {
        let expense = input.to_expense_required()?;
        self.persist(expense)
    }

    fn persist(&self, expense: Expense) -> ExpenseResult<Expense> {
        self.store.append(&expense)?;
        info!(category = %expense.category, amount = expense.amount, "expense added");
        Ok(expense)
    }

    /// Reload every expense in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load_all()
    }

    /// Reload and summarize; `None` means there is nothing to summarize.
    ///
    /// Fails with `AmountOverflow` rather than reporting an infinite total.
    pub fn summarize(&self) -> ExpenseResult<Option<CategorySummary>> {
        let expenses = self.store.load_all()?;
        let summary = CategorySummary::summarize(&expenses);
        if let Some(category) = summary.as_ref().and_then(|s| s.overflowed()) {
            warn!(category = %category.category, "category total overflowed");
            return Err(ExpenseError::AmountOverflow(category.category.clone()));
        }
        debug!(
            records = expenses.len(),
            categories = summary.as_ref().map_or(0, |s| s.len()),
            "summary computed"
        );
        Ok(summary)
    }
}
