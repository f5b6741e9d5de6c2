//! Help dialog
//!
//! Shows the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let lines = help_lines();
    let area = centered_rect_fixed(50, lines.len() as u16 + 2, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Expenses"),
        Line::from(""),
        key_line("a", "Add expense"),
        key_line("v", "Reload expenses"),
        key_line("s", "Show summary and chart"),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Go to top/bottom"),
        Line::from(""),
        section("Add Form"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Shift+Tab", "Previous field"),
        key_line("Enter", "Save expense"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
