use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

/// Input bar: typing builds the new task's title, Enter adds it
pub(super) fn handle_compose(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new_task(),
        // Leave the bar but keep what was typed
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.mode = Mode::Navigate,
        _ => {
            edit_line(&mut app.input, key);
        }
    }
}
