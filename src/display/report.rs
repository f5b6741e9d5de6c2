//! Report formatting utilities for terminal output
//!
//! Draws the category summary as a horizontal bar chart for the text menu
//! and the `summary` subcommand.

use crate::reports::CategorySummary;

/// Title shown above every expense chart
pub const CHART_TITLE: &str = "Expenses by Category";

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the summary as a labelled horizontal bar chart
pub fn format_bar_chart(summary: &CategorySummary, currency: &str, width: usize) -> String {
    let label_width = summary
        .categories()
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    let max_value = summary.max_amount();

    let mut output = String::new();
    output.push_str(CHART_TITLE);
    output.push('\n');
    output.push_str(&"─".repeat(label_width + width + 16));
    output.push('\n');

    for category in summary.categories() {
        output.push_str(&format!(
            "{:<label_width$} │{}│ {}{:.2}\n",
            category.category,
            format_bar(category.amount, max_value, width),
            currency,
            category.amount,
            label_width = label_width,
        ));
    }

    output.push_str(&format!(
        "{:<label_width$}  Amount ({})\n",
        "Category",
        currency,
        label_width = label_width,
    ));

    output
}
