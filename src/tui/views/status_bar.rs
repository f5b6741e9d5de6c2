//! Status bar view
//!
//! Shows the store location, the latest notification and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " a:Add  s:Summary  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} records ", app.expenses.len()),
        Style::default().fg(Color::White),
    )];

    if let Some(notification) = app.notifications.current() {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            notification.message.clone(),
            Style::default().fg(notification.notification_type.color()),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
