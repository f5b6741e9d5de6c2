//! Expense table view
//!
//! Every stored expense in file order, with the selected row highlighted.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::SuggestedCategory;
use crate::tui::app::App;

/// Free-form categories are dimmed so typos stand out against the suggested ones
fn category_style(name: &str) -> Style {
    if SuggestedCategory::classify(name).as_str() == name {
        Style::default()
    } else {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }
}

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.expenses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.expenses.is_empty() {
        let text = Paragraph::new("No expenses found. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let currency = &app.settings.currency_symbol;
    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from(Text::from("Amount").right_aligned()),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app.expenses.iter().map(|e| {
        Row::new(vec![
            Cell::from(e.date.clone()),
            Cell::from(e.category.clone()).style(category_style(&e.category)),
            Cell::from(Text::from(format!("{}{:.2}", currency, e.amount)).right_aligned()),
        ])
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Expense;
    use crate::storage::CsvExpenseStore;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_category_style() {
        assert_eq!(category_style("Food"), Style::default());
        assert_eq!(category_style("Other"), Style::default());
        assert!(category_style("food")
            .add_modifier
            .contains(Modifier::ITALIC));
        assert!(category_style("Groceries")
            .add_modifier
            .contains(Modifier::ITALIC));
    }

    #[test]
    fn test_renders_empty_message() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let settings = Settings::default();
        let app = App::new(&store, &settings);

        let screen = draw(&app);
        assert!(screen.contains("Expenses (0)"));
        assert!(screen.contains("No expenses found"));
    }

    #[test]
    fn test_renders_rows() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvExpenseStore::new(temp_dir.path().join("expenses.csv"));
        let settings = Settings::default();
        let mut app = App::new(&store, &settings);
        app.expenses = vec![
            Expense::new("2024-01-01", "Food", 10.0),
            Expense::new("2024-01-02", "Groceries", 4.5),
        ];

        let screen = draw(&app);
        assert!(screen.contains("Expenses (2)"));
        assert!(screen.contains("Category"));
        assert!(screen.contains("2024-01-01"));
        assert!(screen.contains("Groceries"));
        assert!(screen.contains("$4.50"));
        assert!(!screen.contains("No expenses found"));
    }
}
