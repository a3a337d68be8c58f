use tracing::debug;

use crate::model::config::TaskPolicy;
use crate::model::task::{Task, TaskId, TaskStore};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("a task named \"{0}\" already exists")]
    DuplicateTitle(String),
    #[error("task title cannot be empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// A store operation, as issued by the UI or a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { title: String },
    Toggle { id: TaskId },
    Rename { id: TaskId, title: String },
    /// Only issued after the user accepted the removal prompt
    Remove { id: TaskId },
}

/// Apply an action to a snapshot, producing the next snapshot.
/// On `Err` nothing was applied and `store` is still current.
pub fn reduce(store: &TaskStore, action: &Action, policy: TaskPolicy) -> Result<TaskStore, TaskError> {
    match action {
        Action::Add { title } => add_task(store, title),
        Action::Toggle { id } => toggle_task(store, *id),
        Action::Rename { id, title } => rename_task(store, *id, title, policy),
        Action::Remove { id } => remove_task(store, *id),
    }
}

// ---------------------------------------------------------------------------
// Reducers
// ---------------------------------------------------------------------------

/// Append a new task. Rejects empty titles and titles already in the store.
pub fn add_task(store: &TaskStore, title: &str) -> Result<TaskStore, TaskError> {
    let title = normalize_title(title)?;
    if store.has_title(&title) {
        return Err(TaskError::DuplicateTitle(title));
    }

    let mut next = store.clone();
    let id = next.take_next_id();
    debug!(%id, title = %title, "task added");
    next.tasks_mut().push(Task::new(id, title));
    Ok(next)
}

/// Flip the done flag of a task
pub fn toggle_task(store: &TaskStore, id: TaskId) -> Result<TaskStore, TaskError> {
    let idx = store.position(id).ok_or(TaskError::NotFound(id))?;

    let mut next = store.clone();
    let task = &mut next.tasks_mut()[idx];
    task.done = !task.done;
    debug!(%id, done = task.done, "task toggled");
    Ok(next)
}

/// Replace a task's title.
///
/// Duplicate titles are only rejected when `policy.unique_titles_on_rename`
/// is set; renaming a task to its own current title is always allowed.
pub fn rename_task(
    store: &TaskStore,
    id: TaskId,
    title: &str,
    policy: TaskPolicy,
) -> Result<TaskStore, TaskError> {
    let idx = store.position(id).ok_or(TaskError::NotFound(id))?;
    let title = normalize_title(title)?;

    if policy.unique_titles_on_rename
        && store
            .tasks()
            .iter()
            .any(|t| t.id != id && t.title == title)
    {
        return Err(TaskError::DuplicateTitle(title));
    }

    let mut next = store.clone();
    debug!(%id, title = %title, "task renamed");
    next.tasks_mut()[idx].title = title;
    Ok(next)
}

/// Delete a task in place; survivors keep their order
pub fn remove_task(store: &TaskStore, id: TaskId) -> Result<TaskStore, TaskError> {
    let idx = store.position(id).ok_or(TaskError::NotFound(id))?;

    let mut next = store.clone();
    next.tasks_mut().remove(idx);
    debug!(%id, "task removed");
    Ok(next)
}

fn normalize_title(title: &str) -> Result<String, TaskError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
