//! Expense record model
//!
//! An expense is created once from user input, appended to the store and
//! never changed afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// A single expense as persisted in the store.
///
/// Field order matters: it is the column order of the CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-text date, conventionally YYYY-MM-DD
    pub date: String,

    /// Free-text category
    pub category: String,

    /// Amount spent
    pub amount: f64,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }

    /// Amount in the plain form used for confirmations, e.g. `10.0` or `12.5`
    pub fn amount_display(&self) -> String {
        format!("{:?}", self.amount)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ${}", self.date, self.category, self.amount_display())
    }
}

/// Parse a user-entered amount.
///
/// Surrounding whitespace is ignored. Non-finite values are rejected.
pub fn parse_amount(raw: &str) -> ExpenseResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExpenseError::InvalidAmount(raw.to_string())),
    }
}

/// The three raw strings a presentation layer collects for an add
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
}

impl ExpenseInput {
    /// Create a new input from raw strings
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Build an expense, validating only the amount (menu and CLI path)
    pub fn to_expense(&self) -> ExpenseResult<Expense> {
        let amount = parse_amount(&self.amount)?;
        Ok(Expense::new(self.date.clone(), self.category.clone(), amount))
    }

    /// Build an expense, also requiring every field to be filled (form path)
    pub fn to_expense_required(&self) -> ExpenseResult<Expense> {
        self.check_required()?;
        self.to_expense()
    }

    /// Fail with the first empty field, if any
    pub fn check_required(&self) -> ExpenseResult<()> {
        if self.date.is_empty() {
            return Err(ExpenseError::MissingField("Date"));
        }
        if self.category.is_empty() {
            return Err(ExpenseError::MissingField("Category"));
        }
        if self.amount.is_empty() {
            return Err(ExpenseError::MissingField("Amount"));
        }
        Ok(())
    }
}
