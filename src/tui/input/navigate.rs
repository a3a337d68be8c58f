use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if key.modifiers != KeyModifiers::NONE {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_to(0),
        KeyCode::Char('G') | KeyCode::End => app.cursor_to(usize::MAX),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::PageUp => app.move_cursor(-10),

        // Row actions
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => app.toggle_cursor_task(),
        KeyCode::Char('e') | KeyCode::Char('r') | KeyCode::F(2) => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_remove(),

        // Focus the input bar
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('o') | KeyCode::Tab => {
            app.mode = Mode::Compose;
        }
        _ => {}
    }
}
