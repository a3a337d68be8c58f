use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::*;

/// Row rename: Enter commits, Esc discards
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        _ => {
            if let Some(buf) = editing_buffer(app) {
                edit_line(buf, key);
            }
        }
    }
}
