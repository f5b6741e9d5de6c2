//! Expense display formatting
//!
//! Renders the full record set as a table for the menu and `list`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format all expenses as a table, or `None` if there are none
pub fn format_expense_table(expenses: &[Expense]) -> Option<String> {
    if expenses.is_empty() {
        return None;
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: &e.date,
        category: &e.category,
        amount: format!("{:.2}", e.amount),
    });

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string();

    Some(table)
}
