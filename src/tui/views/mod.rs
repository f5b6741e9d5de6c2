//! TUI views
//!
//! The expense table and status bar, with the active dialog drawn on top.

pub mod expense_table;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let header = Line::from(vec![
        Span::styled(
            " Expense Tracker ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.source.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);

    expense_table::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::Summary => dialogs::summary::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
