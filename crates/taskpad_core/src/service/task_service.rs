//! Task use-case service.
//!
//! # Responsibility
//! - Apply the input-surface contract (trim, suppress empty text) once for
//!   every front-end.
//! - Report what each call changed so presentation code can react.
//!
//! # Invariants
//! - Empty or whitespace-only input never reaches the store.
//! - Service APIs never bypass store transitions.

use crate::model::snapshot::TaskSnapshot;
use crate::model::task::{Task, TaskId};
use crate::stats::TaskStats;
use crate::store::task_store::TaskStore;
use log::debug;

/// Outcome of one service call, for presentation-side reactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskChange {
    Added(Task),
    Toggled { id: TaskId, completed: bool },
    Deleted(TaskId),
    /// Input was suppressed or the id did not match any task.
    Unchanged,
}

impl TaskChange {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Returns whether `raw` would be accepted by `TaskService::submit`.
pub fn can_submit(raw: &str) -> bool {
    !raw.trim().is_empty()
}

/// Use-case facade over one session's `TaskStore`.
#[derive(Debug, Default)]
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    /// Creates a service over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `raw` and adds it as a task.
    ///
    /// Returns `None` without touching the store when nothing is left after
    /// trimming.
    pub fn submit(&mut self, raw: &str) -> Option<Task> {
        let text = raw.trim();
        if text.is_empty() {
            debug!("event=task_submit module=service status=suppressed");
            return None;
        }
        Some(self.store.add(text))
    }

    /// Same as `submit`, reported as a `TaskChange`.
    pub fn submit_change(&mut self, raw: &str) -> TaskChange {
        match self.submit(raw) {
            Some(task) => TaskChange::Added(task),
            None => TaskChange::Unchanged,
        }
    }

    /// Flips completion on `id`; unknown ids report `Unchanged`.
    pub fn toggle_complete(&mut self, id: TaskId) -> TaskChange {
        let snapshot = self.store.toggle_complete(id);
        match snapshot.get(id) {
            Some(task) => TaskChange::Toggled {
                id,
                completed: task.is_completed(),
            },
            None => TaskChange::Unchanged,
        }
    }

    /// Deletes `id`; unknown ids report `Unchanged`.
    pub fn delete(&mut self, id: TaskId) -> TaskChange {
        let before = self.store.snapshot();
        let after = self.store.delete(id);
        if after.same_as(&before) {
            TaskChange::Unchanged
        } else {
            TaskChange::Deleted(id)
        }
    }

    pub fn snapshot(&self) -> TaskSnapshot {
        self.store.snapshot()
    }

    pub fn stats(&self) -> TaskStats {
        self.store.stats()
    }

    /// Resolves a 1-based display position to a task id.
    pub fn id_at(&self, position: usize) -> Option<TaskId> {
        let index = position.checked_sub(1)?;
        self.store.snapshot().as_slice().get(index).map(Task::id)
    }
}
