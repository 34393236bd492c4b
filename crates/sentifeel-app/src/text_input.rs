//! Editable text buffer behind the input area
//!
//! The cursor is a char index (not a byte offset) so multi-byte input never
//! splits a character.

/// Multi-line text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a char index into the text
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Replace the whole text; cursor moves to the end.
    /// Returns true if the text changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = text != self.text;
        self.text = text;
        self.cursor = self.char_len();
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.set_text(String::new())
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the char before the cursor
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the char under the cursor
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Move to the start of the current line
    pub fn move_home(&mut self) {
        let (_, column) = self.cursor_line_col();
        self.cursor -= column;
    }

    /// Move to the end of the current line
    pub fn move_end(&mut self) {
        let rest = self
            .text
            .chars()
            .skip(self.cursor)
            .take_while(|&c| c != '\n')
            .count();
        self.cursor += rest;
    }

    /// (line, column) of the cursor, both zero-based and counted in chars
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut column = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> TextInput {
        let mut input = TextInput::new();
        input.set_text(text);
        input
    }

    #[test]
    fn test_insert_at_end() {
        let mut input = TextInput::new();
        input.insert_char('h');
        input.insert_char('i');
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = input("hllo");
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = input("café");
        assert!(input.delete_backward());
        assert_eq!(input.text(), "caf");
        input.insert_char('é');
        input.insert_char('🎉');
        assert_eq!(input.text(), "café🎉");
        input.move_left();
        assert!(input.delete_forward());
        assert_eq!(input.text(), "café");
    }

    #[test]
    fn test_delete_at_edges_is_noop() {
        let mut input = input("ab");
        assert!(!input.delete_forward());
        input.move_home();
        assert!(!input.delete_backward());
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_set_text_reports_change() {
        let mut input = input("same");
        assert!(!input.set_text("same"));
        assert!(input.set_text("other"));
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_clear() {
        let mut input = input("text");
        assert!(input.clear());
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
        assert!(!input.clear());
    }

    #[test]
    fn test_home_end_work_per_line() {
        let mut input = input("first\nsecond");
        input.move_home();
        assert_eq!(input.cursor_line_col(), (1, 0));
        input.move_end();
        assert_eq!(input.cursor_line_col(), (1, 6));
        for _ in 0..7 {
            input.move_left();
        }
        assert_eq!(input.cursor_line_col(), (0, 5));
        input.move_home();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut input = input("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }
}
