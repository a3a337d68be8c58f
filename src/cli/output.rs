use serde::Serialize;

use crate::model::{ConfirmOutcome, TaskId, TaskStore, task_count_label};
use crate::ops::script::Event;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    /// 0-based position in the list
    pub index: usize,
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub count: usize,
    pub tasks: Vec<TaskJson>,
}

pub fn task_list_to_json(store: &TaskStore) -> TaskListJson {
    TaskListJson {
        count: store.len(),
        tasks: store
            .tasks()
            .iter()
            .enumerate()
            .map(|(index, t)| TaskJson {
                index,
                id: t.id,
                title: t.title.clone(),
                done: t.done,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per task plus a counter line
pub fn format_task_list(store: &TaskStore) -> String {
    let mut out = String::new();
    for (i, task) in store.tasks().iter().enumerate() {
        out.push_str(&format!(
            "  {}. [{}] {}  (#{})\n",
            i + 1,
            task.checkbox_char(),
            task.title,
            task.id
        ));
    }
    out.push_str(&task_count_label(store.len()));
    out
}

/// Status line for an applied command. `Listed` has no line of its own.
pub fn format_event(event: &Event) -> Option<String> {
    let line = match event {
        Event::Added { id, title } => format!("added #{} \"{}\"", id, title),
        Event::Toggled { id, done: true } => format!("done #{}", id),
        Event::Toggled { id, done: false } => format!("reopened #{}", id),
        Event::Renamed { id, title } => format!("renamed #{} to \"{}\"", id, title),
        Event::Removed { id, title } => format!("removed #{} \"{}\"", id, title),
        Event::Kept { id, outcome } => {
            let why = match outcome {
                ConfirmOutcome::Decline => "declined",
                ConfirmOutcome::Dismissed | ConfirmOutcome::Accept => "dismissed",
            };
            format!("kept #{} ({})", id, why)
        }
        Event::Rejected(e) => format!("warning: {}", e),
        Event::Listed => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops::{TaskError, add_task, toggle_task};

    fn sample_store() -> TaskStore {
        let store = add_task(&TaskStore::new(), "Buy milk").unwrap();
        let store = add_task(&store, "Walk dog").unwrap();
        toggle_task(&store, TaskId(2)).unwrap()
    }

    #[test]
    fn text_list_format() {
        assert_eq!(
            format_task_list(&sample_store()),
            "  1. [ ] Buy milk  (#1)\n  2. [x] Walk dog  (#2)\n2 tasks"
        );
        assert_eq!(format_task_list(&TaskStore::new()), "0 tasks");
    }

    #[test]
    fn json_list_format() {
        let json = serde_json::to_value(task_list_to_json(&sample_store())).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["tasks"][1]["index"], 1);
        assert_eq!(json["tasks"][1]["id"], 2);
        assert_eq!(json["tasks"][1]["title"], "Walk dog");
        assert_eq!(json["tasks"][1]["done"], true);
    }

    #[test]
    fn event_lines() {
        assert_eq!(
            format_event(&Event::Toggled {
                id: TaskId(3),
                done: false
            })
            .as_deref(),
            Some("reopened #3")
        );
        assert_eq!(
            format_event(&Event::Kept {
                id: TaskId(1),
                outcome: ConfirmOutcome::Decline
            })
            .as_deref(),
            Some("kept #1 (declined)")
        );
        assert_eq!(
            format_event(&Event::Rejected(TaskError::EmptyTitle)).as_deref(),
            Some("warning: task title cannot be empty")
        );
        assert_eq!(format_event(&Event::Listed), None);
    }
}
