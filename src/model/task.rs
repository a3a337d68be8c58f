use std::fmt;

use serde::Serialize;

/// Identifier of a task, unique for the lifetime of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Display text (never empty)
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-done task
    pub fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            done: false,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}

/// The ordered collection of tasks for a session.
///
/// Fields are private: the only way to produce a different store is through
/// the reducers in `ops::task_ops`, which keeps ids monotonic and the
/// sequence append-ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Position of a task in display order
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Whether any task currently has exactly this title
    pub fn has_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    /// The id the next added task will receive
    pub fn peek_next_id(&self) -> TaskId {
        TaskId(self.next_id)
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub(crate) fn take_next_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Counter text shared by the header and the CLI: "1 task", "3 tasks"
pub fn task_count_label(n: usize) -> String {
    format!("{} task{}", n, if n == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty_and_starts_ids_at_one() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.peek_next_id(), TaskId(1));
    }

    #[test]
    fn take_next_id_is_monotonic() {
        let mut store = TaskStore::new();
        assert_eq!(store.take_next_id(), TaskId(1));
        assert_eq!(store.take_next_id(), TaskId(2));
        assert_eq!(store.peek_next_id(), TaskId(3));
    }

    #[test]
    fn checkbox_char_follows_done() {
        let mut task = Task::new(TaskId(1), "Buy milk".into());
        assert_eq!(task.checkbox_char(), ' ');
        task.done = true;
        assert_eq!(task.checkbox_char(), 'x');
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(task_count_label(0), "0 tasks");
        assert_eq!(task_count_label(1), "1 task");
        assert_eq!(task_count_label(2), "2 tasks");
    }

    #[test]
    fn task_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&TaskId(7)).unwrap(), "7");
    }
}
