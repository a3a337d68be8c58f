use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line editable text with a grapheme-aware cursor.
///
/// `cursor` is a byte offset that always sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `text`, cursor at the end
    pub fn from_text(text: &str) -> Self {
        LineBuffer {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor in terminal cells
    pub fn cursor_col(&self) -> usize {
        UnicodeWidthStr::width(&self.text[..self.cursor])
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces
    pub fn insert_str(&mut self, s: &str) {
        let clean = s.replace("\r\n", " ").replace(['\n', '\r'], " ");
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    /// Delete from the start of the previous word to the cursor
    pub fn delete_word_left(&mut self) {
        let start = self.word_boundary_left();
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn move_word_left(&mut self) {
        self.cursor = self.word_boundary_left();
    }

    pub fn move_word_right(&mut self) {
        self.cursor = self.word_boundary_right();
    }

    fn next_boundary(&self) -> Option<usize> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let rest = &self.text[self.cursor..];
        Some(
            rest.grapheme_indices(true)
                .nth(1)
                .map_or(self.text.len(), |(i, _)| self.cursor + i),
        )
    }

    fn prev_boundary(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    /// Whitespace-delimited word start at or before the cursor
    fn word_boundary_left(&self) -> usize {
        let graphemes: Vec<(usize, &str)> =
            self.text[..self.cursor].grapheme_indices(true).collect();
        let mut idx = graphemes.len();
        while idx > 0 && is_space(graphemes[idx - 1].1) {
            idx -= 1;
        }
        while idx > 0 && !is_space(graphemes[idx - 1].1) {
            idx -= 1;
        }
        graphemes.get(idx).map_or(0, |(i, _)| *i)
    }

    /// Whitespace-delimited word end at or after the cursor
    fn word_boundary_right(&self) -> usize {
        let rest = &self.text[self.cursor..];
        let graphemes: Vec<(usize, &str)> = rest.grapheme_indices(true).collect();
        let mut idx = 0;
        while idx < graphemes.len() && is_space(graphemes[idx].1) {
            idx += 1;
        }
        while idx < graphemes.len() && !is_space(graphemes[idx].1) {
            idx += 1;
        }
        graphemes
            .get(idx)
            .map_or(self.text.len(), |(i, _)| self.cursor + i)
    }
}

fn is_space(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut buf = LineBuffer::new();
        for c in "milk".chars() {
            buf.insert_char(c);
        }
        assert_eq!(buf.text(), "milk");
        buf.backspace();
        assert_eq!(buf.text(), "mil");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn from_text_puts_cursor_at_end() {
        let buf = LineBuffer::from_text("Buy milk");
        assert_eq!(buf.cursor(), 8);
        assert_eq!(buf.cursor_col(), 8);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut buf = LineBuffer::from_text("Buy milk");
        buf.move_word_left();
        buf.insert_str("oat ");
        assert_eq!(buf.text(), "Buy oat milk");
        assert_eq!(buf.cursor(), 8);
    }

    #[test]
    fn newlines_are_flattened() {
        let mut buf = LineBuffer::new();
        buf.insert_char('\n');
        assert!(buf.is_empty());
        buf.insert_str("a\nb\r\nc");
        assert_eq!(buf.text(), "a b c");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut buf = LineBuffer::from_text("cafe\u{0301}");
        buf.backspace();
        assert_eq!(buf.text(), "caf");

        let mut buf = LineBuffer::from_text("hi 👋🏽");
        buf.backspace();
        assert_eq!(buf.text(), "hi ");
    }

    #[test]
    fn cursor_movement_is_grapheme_aware() {
        let mut buf = LineBuffer::from_text("日本");
        assert_eq!(buf.cursor_col(), 4);
        buf.move_left();
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.cursor_col(), 2);
        buf.delete();
        assert_eq!(buf.text(), "日");
        buf.move_right();
        assert_eq!(buf.cursor(), 3);
        buf.move_right();
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn home_end_and_boundaries() {
        let mut buf = LineBuffer::from_text("abc");
        buf.move_home();
        buf.backspace();
        assert_eq!(buf.text(), "abc");
        buf.move_end();
        buf.delete();
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn word_motions() {
        let mut buf = LineBuffer::from_text("one two  three");
        buf.move_word_left();
        assert_eq!(buf.cursor(), 9);
        buf.move_word_left();
        assert_eq!(buf.cursor(), 4);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 7);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 14);
    }

    #[test]
    fn delete_word_left_eats_trailing_space() {
        let mut buf = LineBuffer::from_text("buy oat ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "buy ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut buf = LineBuffer::from_text("x");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }
}
