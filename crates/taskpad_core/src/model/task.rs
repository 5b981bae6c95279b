//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the task list.
//! - Provide the only post-creation transition (`toggled`).
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after trimming and never changes after creation.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task within a session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failures for task records and task id input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Nil UUID cannot identify a task.
    NilId,
    /// Text is empty or whitespace-only.
    EmptyText,
    /// Caller-supplied id string is not a UUID.
    MalformedId(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::MalformedId(raw) => write!(f, "malformed task id: `{raw}`"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
///
/// Fields are read-only outside this module; the store replaces whole values
/// instead of mutating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
}

/// Unvalidated wire shape used during deserialization.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: record.id,
            text: record.text,
            completed: record.completed,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates an open task with a generated stable ID.
    ///
    /// Text is taken as-is; trimming is the input surface's job.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }

    /// Creates an open task with a caller-provided ID.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(Self {
            id,
            text: text.into(),
            completed: false,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns a copy of this task with `completed` flipped.
    ///
    /// `id` and `text` are carried over unchanged.
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            completed: !self.completed,
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `NilId` for the nil UUID.
    /// - `EmptyText` when `text` trims to nothing.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }
}

/// Parses the string form of a task id used by FFI and CLI callers.
///
/// # Errors
/// - `MalformedId` when `raw` is not a UUID.
/// - `NilId` when `raw` is the nil UUID.
pub fn parse_task_id(raw: &str) -> Result<TaskId, TaskValidationError> {
    let trimmed = raw.trim();
    let id = Uuid::parse_str(trimmed)
        .map_err(|_| TaskValidationError::MalformedId(trimmed.to_string()))?;
    if id.is_nil() {
        return Err(TaskValidationError::NilId);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::{parse_task_id, Task, TaskValidationError};
    use uuid::Uuid;

    #[test]
    fn toggled_only_flips_completed() {
        let task = Task::new("Buy milk");
        let done = task.toggled();

        assert_eq!(done.id(), task.id());
        assert_eq!(done.text(), task.text());
        assert!(done.is_completed());
        assert_eq!(done.toggled(), task);
    }

    #[test]
    fn validate_rejects_whitespace_text() {
        let task = Task::new("   ");
        assert_eq!(task.validate(), Err(TaskValidationError::EmptyText));
    }

    #[test]
    fn parse_task_id_rejects_garbage_and_nil() {
        assert_eq!(
            parse_task_id("nonexistent-id"),
            Err(TaskValidationError::MalformedId("nonexistent-id".to_string()))
        );
        assert_eq!(
            parse_task_id(&Uuid::nil().to_string()),
            Err(TaskValidationError::NilId)
        );
    }

    #[test]
    fn parse_task_id_trims_input() {
        let id = Uuid::new_v4();
        assert_eq!(parse_task_id(&format!("  {id} ")), Ok(id));
    }
}
