//! Text input widget
//!
//! A single-line text field with a cursor. The cursor is a byte offset that
//! always sits on a character boundary.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if let Some(c) = self.content[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.content.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if let Some(c) = self.content[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as a `Label: value` line, with the cursor highlighted when focused
    pub fn to_line(&self, label_width: usize) -> Line<'static> {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled(
            format!("{:>width$}: ", self.label, width = label_width),
            label_style,
        )];

        if !self.focused {
            if self.content.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(
                    self.content.clone(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            return Line::from(spans);
        }

        let value_style = Style::default().fg(Color::White);
        let (before, after) = self.content.split_at(self.cursor);
        spans.push(Span::styled(before.to_string(), value_style));

        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(rest.as_str().to_string(), value_style));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.5");

        input.backspace();
        assert_eq!(input.value(), "12.");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_cursor_movement_and_delete() {
        let mut input = TextInput::new().content("Food");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "ood");

        input.move_right();
        input.insert('x');
        assert_eq!(input.value(), "oxod");

        input.move_end();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "oxd");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        input.insert('€');
        input.insert('5');
        assert_eq!(input.cursor, "€5".len());

        input.move_left();
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.move_right();
        input.backspace();
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("abc");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_to_line_shows_placeholder_when_unfocused() {
        let input = TextInput::new().label("Date").placeholder("YYYY-MM-DD");
        let line = input.to_line(8);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "    Date: YYYY-MM-DD");
    }
}
