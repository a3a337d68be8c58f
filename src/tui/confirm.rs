use crate::model::confirm::ConfirmOutcome;
use crate::model::task::TaskId;
use crate::ops::task_ops::TaskError;

use super::app::Mode;

/// What to do if the user accepts a confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveTask { id: TaskId },
}

/// Which of the two buttons is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Decline,
    Accept,
}

/// A pending yes/no question; the action it guards has not run yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub decline_label: String,
    pub accept_label: String,
    pub action: ConfirmAction,
    pub selected: Choice,
}

impl ConfirmPrompt {
    pub fn remove_task(id: TaskId) -> Self {
        ConfirmPrompt {
            title: "Remove item".into(),
            message: "Are you sure you want to remove this item?".into(),
            decline_label: "No".into(),
            accept_label: "Yes".into(),
            action: ConfirmAction::RemoveTask { id },
            selected: Choice::Decline,
        }
    }

    pub fn toggle_selection(&mut self) {
        self.selected = match self.selected {
            Choice::Decline => Choice::Accept,
            Choice::Accept => Choice::Decline,
        };
    }

    /// Outcome of pressing Enter on the highlighted button
    pub fn selected_outcome(&self) -> ConfirmOutcome {
        match self.selected {
            Choice::Decline => ConfirmOutcome::Decline,
            Choice::Accept => ConfirmOutcome::Accept,
        }
    }
}

/// Blocking informational popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    /// Mode to go back to once dismissed
    pub return_to: Mode,
}

impl Notice {
    /// Describe a rejected store operation to the user
    pub fn for_error(err: &TaskError, return_to: Mode) -> Self {
        let (title, message) = match err {
            TaskError::DuplicateTitle(_) => (
                "Task already exists",
                "You can't have two tasks with the same name.",
            ),
            TaskError::EmptyTitle => ("Empty task", "A task needs a name."),
            TaskError::NotFound(_) => ("Task not found", "That task no longer exists."),
        };
        Notice {
            title: title.into(),
            message: message.into(),
            return_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_prompt_defaults_to_decline() {
        let prompt = ConfirmPrompt::remove_task(TaskId(3));
        assert_eq!(prompt.selected, Choice::Decline);
        assert_eq!(prompt.selected_outcome(), ConfirmOutcome::Decline);
        assert_eq!(prompt.action, ConfirmAction::RemoveTask { id: TaskId(3) });
    }

    #[test]
    fn toggle_selection_flips_outcome() {
        let mut prompt = ConfirmPrompt::remove_task(TaskId(1));
        prompt.toggle_selection();
        assert_eq!(prompt.selected_outcome(), ConfirmOutcome::Accept);
        prompt.toggle_selection();
        assert_eq!(prompt.selected_outcome(), ConfirmOutcome::Decline);
    }

    #[test]
    fn notice_for_duplicate() {
        let notice = Notice::for_error(&TaskError::DuplicateTitle("A".into()), Mode::Compose);
        assert_eq!(notice.title, "Task already exists");
        assert_eq!(notice.return_to, Mode::Compose);
    }
}
