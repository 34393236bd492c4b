//! Character and word counters shown under the text area

/// Counts displayed under the input box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Unicode scalar values, newlines included
    pub characters: usize,
    /// Whitespace-separated, non-empty tokens
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }
}

/// True when the text contains nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
