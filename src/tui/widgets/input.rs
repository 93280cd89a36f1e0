//! Text input widget
//!
//! A single-line text field with a character-based cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, counted in characters
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

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
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
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let showing_placeholder = self.content.is_empty() && !self.focused;
        let (display_text, text_style) = if showing_placeholder {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (self.content.as_str(), Style::default().fg(Color::White))
        } else {
            (self.content.as_str(), Style::default().fg(Color::Yellow))
        };

        buf.set_string(input_start, area.y, display_text, text_style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut input = TextInput::new();
        for c in "4.5".chars() {
            input.insert(c);
        }
        input.insert('0');
        assert_eq!(input.value(), "4.50");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), ".50");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), ".5");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        input.set_content("Café");
        input.backspace();
        assert_eq!(input.value(), "Caf");

        input.insert('é');
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "Cafxé");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().label("Amount").placeholder("0.00");
        input.set_content("12");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
        assert_eq!(input.label, "Amount");
    }
}
