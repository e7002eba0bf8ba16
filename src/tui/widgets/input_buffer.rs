//! Text buffer behind the search field.
//!
//! The cursor always sits at the end: Left/Right stay bound to carousel
//! navigation while typing, so only appending and erasing are supported.

/// A single-line text input with an end-anchored cursor.
#[derive(Debug, Default)]
pub struct InputBuffer {
    content: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.push(c);
    }

    /// Remove the last character. Returns `false` if already empty.
    pub fn backspace(&mut self) -> bool {
        self.content.pop().is_some()
    }

    /// Remove the trailing word, like readline's Ctrl+W.
    pub fn delete_word(&mut self) -> bool {
        if self.content.is_empty() {
            return false;
        }
        let trimmed = self.content.trim_end().len();
        let start = self.content[..trimmed]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.content.truncate(start);
        true
    }

    /// Returns `false` if there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.content.is_empty() {
            return false;
        }
        self.content.clear();
        true
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Cursor column in characters.
    pub fn cursor_position(&self) -> usize {
        self.content.chars().count()
    }
}
