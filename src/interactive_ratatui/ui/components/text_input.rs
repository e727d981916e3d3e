use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Single-line editable text with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the text and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_position = self.char_len();
    }

    pub(crate) fn set_cursor_position(&mut self, position: usize) {
        self.cursor_position = position.min(self.char_len());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    fn prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Remove the characters in `start..end`, leaving the cursor at `start`
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_len() {
            return false;
        }
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_forward(&mut self) -> bool {
        let cursor = self.cursor_position;
        self.delete_range(cursor, cursor + 1)
    }

    fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor_position);
        self.text.insert(offset, c);
        self.cursor_position += 1;
    }

    /// Text with the cursor cell highlighted
    pub fn render_cursor_spans(&self) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let split = self.byte_offset(self.cursor_position);
        let (before, rest) = self.text.split_at(split);

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        match rest.chars().next() {
            Some(c) => {
                let width = c.len_utf8();
                spans.push(Span::styled(&rest[..width], cursor_style));
                if rest.len() > width {
                    spans.push(Span::raw(&rest[width..]));
                }
            }
            None => spans.push(Span::styled(" ", cursor_style)),
        }
        spans
    }

    /// Apply an editing key. Returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_len();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.set_cursor_position(self.cursor_position + 1);
                    false
                }
                KeyCode::Char('h') => self.backspace(),
                KeyCode::Char('d') => self.delete_forward(),
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_len()),
                _ => false,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.set_cursor_position(self.cursor_position + 1);
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = self.char_len();
                false
            }
            _ => false,
        }
    }
}
