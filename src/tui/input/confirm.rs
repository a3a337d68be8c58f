use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::ConfirmOutcome;
use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => app.resolve_confirm(ConfirmOutcome::Accept),
        // Decline: n
        (KeyModifiers::NONE, KeyCode::Char('n')) => app.resolve_confirm(ConfirmOutcome::Decline),
        // Close without answering
        (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.resolve_confirm(ConfirmOutcome::Dismissed)
        }
        // Move between the two buttons
        (_, KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab)
        | (KeyModifiers::NONE, KeyCode::Char('h' | 'l')) => {
            if let Some(prompt) = &mut app.confirm {
                prompt.toggle_selection();
            }
        }
        (_, KeyCode::Enter) => {
            let outcome = app
                .confirm
                .as_ref()
                .map_or(ConfirmOutcome::Dismissed, |p| p.selected_outcome());
            app.resolve_confirm(outcome);
        }
        _ => {}
    }
}

/// Any dismiss key closes the notice; everything else is swallowed
pub(super) fn handle_notice(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
    ) {
        app.dismiss_notice();
    }
}
