use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::line_buffer::LineBuffer;

/// Drop SHIFT from character keys: the char already carries the case
/// (`Shift+g` arrives as `Char('G')`).
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
    {
        if c.is_ascii_lowercase() {
            key.code = KeyCode::Char(c.to_ascii_uppercase());
        }
        key.modifiers.remove(KeyModifiers::SHIFT);
    }
    key
}

/// Apply a line-editing key to `buf`. Returns false if the key is not an
/// editing key, so the caller can handle it.
pub(super) fn edit_line(buf: &mut LineBuffer, key: KeyEvent) -> bool {
    let word_mod = key.modifiers.contains(KeyModifiers::CONTROL)
        || key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            buf.delete_word_left()
        }
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => buf.move_home(),
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => buf.move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => buf.clear(),
        KeyCode::Char(c) if !word_mod => buf.insert_char(c),
        KeyCode::Backspace if word_mod => buf.delete_word_left(),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete(),
        KeyCode::Left if word_mod => buf.move_word_left(),
        KeyCode::Right if word_mod => buf.move_word_right(),
        KeyCode::Left => buf.move_left(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.move_home(),
        KeyCode::End => buf.move_end(),
        _ => return false,
    }
    true
}

/// Text buffer of the row being renamed
pub(super) fn editing_buffer(app: &mut App) -> Option<&mut LineBuffer> {
    let id = app.editing_id()?;
    app.rows.get_mut(&id)?.buffer_mut()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn normalize_strips_shift_from_chars() {
        let k = normalize_key(key(KeyCode::Char('g'), KeyModifiers::SHIFT));
        assert_eq!(k.code, KeyCode::Char('G'));
        assert_eq!(k.modifiers, KeyModifiers::NONE);

        let k = normalize_key(key(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert_eq!(k.code, KeyCode::Char('?'));
        assert_eq!(k.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn edit_line_handles_editing_keys() {
        let mut buf = LineBuffer::from_text("buy oat milk");
        assert!(edit_line(&mut buf, key(KeyCode::Char('w'), KeyModifiers::CONTROL)));
        assert_eq!(buf.text(), "buy oat ");
        assert!(edit_line(&mut buf, key(KeyCode::Left, KeyModifiers::ALT)));
        assert_eq!(buf.cursor(), 4);
        assert!(edit_line(&mut buf, key(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert_eq!(buf.cursor(), 0);
        assert!(edit_line(&mut buf, key(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(buf.is_empty());
    }

    #[test]
    fn edit_line_ignores_other_keys() {
        let mut buf = LineBuffer::new();
        assert!(!edit_line(&mut buf, key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!edit_line(&mut buf, key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!edit_line(&mut buf, key(KeyCode::Char('x'), KeyModifiers::CONTROL)));
        assert!(buf.is_empty());
    }
}
