//! Single-line text input state with cursor management

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line text input. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_count();
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Insert text at cursor position. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.insert_char(' '),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Delete from cursor to end of line (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.truncate(at);
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let chars: Vec<char> = self.input.chars().collect();
        let end = self.cursor;
        let mut start = end;
        while start > 0 && chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && chars[start - 1] != ' ' {
            start -= 1;
        }
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.input.drain(from..to);
        self.cursor = start;
    }

    /// Render with placeholder text when empty, and a block cursor when
    /// `focused`. Long input scrolls so the cursor stays visible.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: Option<(&str, Style)>,
        focused: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let before_cursor: String = self.input.chars().take(self.cursor).collect();
        let cursor_col = before_cursor.width() as u16;
        let scroll = cursor_col.saturating_sub(area.width.saturating_sub(1));

        match placeholder {
            Some((text, placeholder_style)) if self.input.is_empty() => {
                Paragraph::new(text).style(placeholder_style).render(area, buf);
            }
            _ => {
                Paragraph::new(self.input.as_str())
                    .style(style)
                    .scroll((0, scroll))
                    .render(area, buf);
            }
        }

        if focused {
            let cursor_x = area.x + cursor_col - scroll;
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}
