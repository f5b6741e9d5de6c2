//! Expense CLI commands
//!
//! Handlers shared by the one-shot subcommands and the text menu. Output
//! goes to any writer so both paths can be tested.

use std::io::Write;

use crate::config::Settings;
use crate::display::report::format_bar_chart;
use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseInput};
use crate::services::ExpenseService;
use crate::storage::RecordStore;

/// Width of the ASCII bars in the summary chart
const CHART_WIDTH: usize = 40;

/// Add an expense and print the confirmation
pub fn handle_add<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    input: &ExpenseInput,
    out: &mut W,
) -> ExpenseResult<Expense> {
    let expense = service.add(input)?;
    writeln!(out, "Expense added: {}", expense)?;
    Ok(expense)
}

/// Print every expense, or a notice when there are none
pub fn handle_list<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    out: &mut W,
) -> ExpenseResult<()> {
    let expenses = service.list()?;
    match format_expense_table(&expenses) {
        Some(table) => writeln!(out, "{}", table)?,
        None => writeln!(out, "No expenses found.")?,
    }
    Ok(())
}

/// Print the category summary, optionally followed by a bar chart
pub fn handle_summary<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    settings: &Settings,
    chart: bool,
    out: &mut W,
) -> ExpenseResult<()> {
    let Some(summary) = service.summarize()? else {
        writeln!(out, "No expenses to summarize.")?;
        return Ok(());
    };

    writeln!(out, "{}", summary.format_terminal(&settings.currency_symbol))?;
    if chart {
        writeln!(out)?;
        write!(
            out,
            "{}",
            format_bar_chart(&summary, &settings.currency_symbol, CHART_WIDTH)
        )?;
    }
    Ok(())
}
