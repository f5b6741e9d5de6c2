//! Interactive text menu
//!
//! A prompt loop over any reader and writer. Invalid amounts are reported
//! and the loop continues; end of input behaves like choosing Exit.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseInput;
use crate::services::ExpenseService;
use crate::storage::RecordStore;

use super::expense::{handle_add, handle_list, handle_summary};

/// Interface picked at the start-up prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceChoice {
    Cli,
    Tui,
    Exit,
}

/// Print a prompt and read one line, without its line ending.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> ExpenseResult<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}

/// Ask which interface to run
pub fn choose_interface<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> ExpenseResult<InterfaceChoice> {
    loop {
        writeln!(out, "Choose Interface:")?;
        writeln!(out, "1. Command-Line Interface (CLI)")?;
        writeln!(out, "2. Terminal Form Interface (TUI)")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            return Ok(InterfaceChoice::Exit);
        };

        match choice.trim() {
            "1" => return Ok(InterfaceChoice::Cli),
            "2" => return Ok(InterfaceChoice::Tui),
            "3" => return Ok(InterfaceChoice::Exit),
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

/// Run the text menu until the user exits or input ends
pub fn run_menu<S: RecordStore, R: BufRead, W: Write>(
    service: &ExpenseService<S>,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> ExpenseResult<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Expense Tracker")?;
        writeln!(out, "1. Add Expense")?;
        writeln!(out, "2. View Expenses")?;
        writeln!(out, "3. Generate Report")?;
        writeln!(out, "4. Exit")?;

        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            return Ok(());
        };
        debug!(choice = %choice, "menu selection");

        match choice.trim() {
            "1" => {
                if !add_from_prompts(service, settings, input, out)? {
                    return Ok(());
                }
            }
            "2" => handle_list(service, out)?,
            "3" => match handle_summary(service, settings, true, out) {
                Ok(()) => {}
                Err(e @ ExpenseError::AmountOverflow(_)) => writeln!(out, "{}", e)?,
                Err(e) => return Err(e),
            },
            "4" => return Ok(()),
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

/// Collect the three fields and add the expense.
///
/// Returns `false` if input ended mid-way.
fn add_from_prompts<S: RecordStore, R: BufRead, W: Write>(
    service: &ExpenseService<S>,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> ExpenseResult<bool> {
    let Some(date) = prompt(input, out, "Enter date (YYYY-MM-DD): ")? else {
        return Ok(false);
    };
    let category_prompt = format!("Enter category ({}): ", settings.category_hint());
    let Some(category) = prompt(input, out, &category_prompt)? else {
        return Ok(false);
    };
    let amount_prompt = format!("Enter amount: {}", settings.currency_symbol);
    let Some(amount) = prompt(input, out, &amount_prompt)? else {
        return Ok(false);
    };

    match handle_add(service, &ExpenseInput::new(date, category, amount), out) {
        Ok(_) => {}
        Err(ExpenseError::InvalidAmount(_)) => {
            writeln!(out, "Invalid amount. Please enter a number.")?;
        }
        Err(e) => return Err(e),
    }
    Ok(true)
}
