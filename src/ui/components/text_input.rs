//! Single-line text input with a character cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::INPUT_CURSOR;

/// Editable single-line buffer.
///
/// The cursor counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the contents and move the cursor to the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    /// Replace the contents only if they differ, keeping the cursor otherwise
    pub fn sync(&mut self, value: &str) {
        if self.value != value {
            self.set_value(value);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.value.len())
    }

    /// Apply an editing key. Returns `true` when the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let byte_pos = self.byte_index(self.cursor);
                self.value.insert(byte_pos, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let byte_pos = self.byte_index(self.cursor - 1);
                self.value.remove(byte_pos);
                self.cursor -= 1;
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.value.chars().count() {
                    return false;
                }
                let byte_pos = self.byte_index(self.cursor);
                self.value.remove(byte_pos);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                false
            }
            _ => false,
        }
    }

    /// Text to draw, optionally masked, with the cursor shown when focused
    pub fn display(&self, mask: Option<char>, focused: bool) -> String {
        let mut shown: String = match mask {
            Some(mask) => std::iter::repeat(mask).take(self.value.chars().count()).collect(),
            None => self.value.clone(),
        };

        if focused {
            let byte_pos = shown
                .char_indices()
                .nth(self.cursor)
                .map(|(byte, _)| byte)
                .unwrap_or(shown.len());
            shown.insert(byte_pos, INPUT_CURSOR);
        }
        shown
    }
}
