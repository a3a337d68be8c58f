//! Line-oriented command scripts replayed against a store.
//!
//! ```text
//! # comments and blank lines are ignored
//! add Buy milk
//! toggle 1
//! rename 1 Buy oat milk
//! remove 1 yes
//! list
//! ```

use tracing::{debug, warn};

use crate::model::config::TaskPolicy;
use crate::model::confirm::ConfirmOutcome;
use crate::model::task::{TaskId, TaskStore};
use crate::ops::task_ops::{self, TaskError};

/// Error type for script parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command \"{command}\"")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: invalid task id \"{value}\"")]
    InvalidId { line: usize, value: String },
    #[error("line {line}: expected yes or no, got \"{value}\"")]
    InvalidAnswer { line: usize, value: String },
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TaskId),
    Rename(TaskId, String),
    Remove(TaskId, ConfirmOutcome),
    List,
}

/// A command together with its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Added { id: TaskId, title: String },
    Toggled { id: TaskId, done: bool },
    Renamed { id: TaskId, title: String },
    Removed { id: TaskId, title: String },
    /// Removal prompt answered with something other than accept
    Kept { id: TaskId, outcome: ConfirmOutcome },
    Rejected(TaskError),
    Listed,
}

/// Parse a whole script. Nothing is applied if any line is malformed.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = parse_line(line, trimmed)?;
        lines.push(ScriptLine { line, command });
    }
    Ok(lines)
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let (word, rest) = match text.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (text, ""),
    };

    match word {
        "add" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "add",
                    expected: "a title",
                });
            }
            Ok(Command::Add(rest.to_string()))
        }
        "toggle" => {
            let id = parse_id(line, "toggle", rest)?;
            Ok(Command::Toggle(id))
        }
        "rename" => {
            let (id_str, title) = match rest.split_once(char::is_whitespace) {
                Some((id, title)) => (id, title.trim()),
                None => (rest, ""),
            };
            let id = parse_id(line, "rename", id_str)?;
            Ok(Command::Rename(id, title.to_string()))
        }
        "remove" => {
            let mut parts = rest.split_whitespace();
            let id = parse_id(line, "remove", parts.next().unwrap_or(""))?;
            let outcome = match parts.next() {
                None => ConfirmOutcome::Dismissed,
                Some("yes" | "y") => ConfirmOutcome::Accept,
                Some("no" | "n") => ConfirmOutcome::Decline,
                Some(other) => {
                    return Err(ScriptError::InvalidAnswer {
                        line,
                        value: other.to_string(),
                    });
                }
            };
            Ok(Command::Remove(id, outcome))
        }
        "list" => Ok(Command::List),
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

fn parse_id(line: usize, command: &'static str, s: &str) -> Result<TaskId, ScriptError> {
    if s.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "a task id",
        });
    }
    let s = s.strip_prefix('#').unwrap_or(s);
    s.parse::<u64>()
        .map(TaskId)
        .map_err(|_| ScriptError::InvalidId {
            line,
            value: s.to_string(),
        })
}

/// Apply one command, returning the next snapshot and what happened.
/// Store rejections come back as `Event::Rejected` with the snapshot unchanged.
pub fn apply_command(store: &TaskStore, command: &Command, policy: TaskPolicy) -> (TaskStore, Event) {
    let result = match command {
        Command::Add(title) => {
            let id = store.peek_next_id();
            task_ops::add_task(store, title).map(|next| {
                let title = next.get(id).map(|t| t.title.clone()).unwrap_or_default();
                (next, Event::Added { id, title })
            })
        }
        Command::Toggle(id) => task_ops::toggle_task(store, *id).map(|next| {
            let done = next.get(*id).is_some_and(|t| t.done);
            (next, Event::Toggled { id: *id, done })
        }),
        Command::Rename(id, title) => {
            task_ops::rename_task(store, *id, title, policy).map(|next| {
                let title = next.get(*id).map(|t| t.title.clone()).unwrap_or_default();
                (next, Event::Renamed { id: *id, title })
            })
        }
        Command::Remove(id, outcome) => {
            if !outcome.is_accepted() {
                debug!(%id, ?outcome, "removal not confirmed");
                return (
                    store.clone(),
                    Event::Kept {
                        id: *id,
                        outcome: *outcome,
                    },
                );
            }
            let title = store.get(*id).map(|t| t.title.clone()).unwrap_or_default();
            task_ops::remove_task(store, *id).map(|next| (next, Event::Removed { id: *id, title }))
        }
        Command::List => return (store.clone(), Event::Listed),
    };

    match result {
        Ok(applied) => applied,
        Err(e) => {
            warn!(error = %e, "command rejected");
            (store.clone(), Event::Rejected(e))
        }
    }
}
