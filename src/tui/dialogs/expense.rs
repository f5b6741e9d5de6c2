//! Add expense dialog
//!
//! Modal form with Date, Category and Amount fields, tab navigation and
//! save/cancel handling.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ExpenseInput;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

const LABEL_WIDTH: usize = 10;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Category,
    Amount,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the add expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub date_input: TextInput,
    pub category_input: TextInput,
    pub amount_input: TextInput,
    /// Error message to display
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create a form with today's date filled in and the given category hint
    pub fn new(category_hint: &str) -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: ExpenseField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            category_input: TextInput::new()
                .label("Category")
                .placeholder(category_hint),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Clear the form back to its initial state, keeping the category hint
    pub fn reset(&mut self) {
        let hint = std::mem::take(&mut self.category_input.placeholder);
        *self = Self::new(&hint);
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.category_input.focused = self.focused_field == ExpenseField::Category;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Date => &mut self.date_input,
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Amount => &mut self.amount_input,
        }
    }

    /// Raw field values as entered
    pub fn input(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.date_input.value(),
            self.category_input.value(),
            self.amount_input.value(),
        )
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(Paragraph::new(form.date_input.to_line(LABEL_WIDTH)), chunks[0]);
    frame.render_widget(
        Paragraph::new(form.category_input.to_line(LABEL_WIDTH)),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(form.amount_input.to_line(LABEL_WIDTH)),
        chunks[2],
    );

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Shift+Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Prev  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Handle key input for the add expense dialog.
///
/// Returns true if the key was handled.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Enter => app.submit_expense(),
        KeyCode::Backspace => {
            form.clear_error();
            form.focused_input().backspace();
        }
        KeyCode::Delete => {
            form.clear_error();
            form.focused_input().delete();
        }
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Char(c) => {
            form.clear_error();
            form.focused_input().insert(c);
        }
        _ => return false,
    }

    true
}
