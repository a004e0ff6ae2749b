use crate::todo::store::MAX_TODO_LEN;

pub struct InputState {
    pub buffer: String,
    pub cursor_position: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor_position: 0,
        }
    }

    pub fn set(&mut self, content: String) {
        self.cursor_position = content.len();
        self.buffer = content;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        // Input mask: the field never holds more than MAX_TODO_LEN characters
        if self.buffer.chars().count() >= MAX_TODO_LEN {
            return;
        }
        self.buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_char_boundary() {
            self.buffer.remove(prev);
            self.cursor_position = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.buffer.len() {
            self.buffer.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_char_boundary() {
            self.cursor_position = prev;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.buffer.len();
    }

    // Byte offset of the character left of the cursor
    fn prev_char_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_new() {
        let input = InputState::new();
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor_position, 0);
    }

    #[test]
    fn test_set_places_cursor_at_end() {
        let mut input = InputState::new();
        input.set("Hello".to_string());
        assert_eq!(input.buffer, "Hello");
        assert_eq!(input.cursor_position, 5);
    }

    #[test]
    fn test_insert_char() {
        let mut input = InputState::new();
        input.set("Hello".to_string());
        input.insert_char('!');
        assert_eq!(input.buffer, "Hello!");
        assert_eq!(input.cursor_position, 6);
    }

    #[test]
    fn test_insert_char_in_middle() {
        let mut input = InputState::new();
        input.set("Hllo".to_string());
        input.cursor_position = 1;
        input.insert_char('e');
        assert_eq!(input.buffer, "Hello");
        assert_eq!(input.cursor_position, 2);
    }

    #[test]
    fn test_mask_refuses_char_beyond_limit() {
        let mut input = InputState::new();
        input.set("a".repeat(MAX_TODO_LEN));
        input.insert_char('b');
        assert_eq!(input.buffer, "a".repeat(MAX_TODO_LEN));
    }

    #[test]
    fn test_mask_counts_characters_not_bytes() {
        let mut input = InputState::new();
        input.set("ä".repeat(MAX_TODO_LEN - 1));
        input.insert_char('ö');
        assert_eq!(input.buffer.chars().count(), MAX_TODO_LEN);
        input.insert_char('ü');
        assert_eq!(input.buffer.chars().count(), MAX_TODO_LEN);
    }

    #[test]
    fn test_backspace() {
        let mut input = InputState::new();
        input.set("Hello".to_string());
        input.backspace();
        assert_eq!(input.buffer, "Hell");
        assert_eq!(input.cursor_position, 4);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.set("Hi".to_string());
        input.cursor_position = 0;
        input.backspace();
        assert_eq!(input.buffer, "Hi");
        assert_eq!(input.cursor_position, 0);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = InputState::new();
        input.set("aä".to_string());
        input.backspace();
        assert_eq!(input.buffer, "a");
        assert_eq!(input.cursor_position, 1);
    }

    #[test]
    fn test_delete() {
        let mut input = InputState::new();
        input.set("Hello".to_string());
        input.cursor_position = 0;
        input.delete();
        assert_eq!(input.buffer, "ello");
        assert_eq!(input.cursor_position, 0);
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = InputState::new();
        input.set("Hello".to_string());

        input.move_cursor_left();
        assert_eq!(input.cursor_position, 4);

        input.move_cursor_right();
        assert_eq!(input.cursor_position, 5);

        input.move_cursor_right();
        assert_eq!(input.cursor_position, 5);

        input.move_cursor_home();
        assert_eq!(input.cursor_position, 0);

        input.move_cursor_left();
        assert_eq!(input.cursor_position, 0);

        input.move_cursor_end();
        assert_eq!(input.cursor_position, 5);
    }

    #[test]
    fn test_cursor_movement_multibyte() {
        let mut input = InputState::new();
        input.set("äöü".to_string());
        assert_eq!(input.cursor_position, 6);

        input.move_cursor_left();
        assert_eq!(input.cursor_position, 4);

        input.move_cursor_left();
        assert_eq!(input.cursor_position, 2);

        input.move_cursor_right();
        assert_eq!(input.cursor_position, 4);
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.set("Hello".to_string());
        input.clear();
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor_position, 0);
    }
}
