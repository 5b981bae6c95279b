//! In-memory task store.
//!
//! # Responsibility
//! - Own the task collection for one session.
//! - Apply add/toggle/delete as snapshot-replacing transitions.
//!
//! # Invariants
//! - This is the only mutator of the collection.
//! - Every effective change installs a new snapshot; older snapshots handed
//!   out to readers stay valid and unchanged.
//! - Unknown ids are silent no-ops that keep the current snapshot.
//! - Logs carry ids and counts only, never task text.

use crate::model::snapshot::TaskSnapshot;
use crate::model::task::{Task, TaskId};
use crate::stats::{compute_stats, TaskStats};
use log::debug;

/// Session-scoped owner of the task collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    current: TaskSnapshot,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current read-only snapshot.
    pub fn snapshot(&self) -> TaskSnapshot {
        self.current.clone()
    }

    /// Statistics recomputed from the current snapshot.
    pub fn stats(&self) -> TaskStats {
        compute_stats(&self.current)
    }

    /// Appends a new open task and returns it.
    ///
    /// # Contract
    /// - Callers trim `text` and skip empty input before calling.
    /// - The new task always lands at the end of the collection.
    pub fn add(&mut self, text: impl Into<String>) -> Task {
        let text = text.into();
        let mut task = Task::new(text.clone());
        while self.current.contains(task.id()) {
            task = Task::new(text.clone());
        }

        let mut next = Vec::with_capacity(self.current.len() + 1);
        next.extend(self.current.iter().cloned());
        next.push(task.clone());
        self.current = TaskSnapshot::from_vec(next);

        debug!(
            "event=task_add module=store status=ok task_id={} total={}",
            task.id(),
            self.current.len()
        );
        task
    }

    /// Flips `completed` on the task with `id`.
    ///
    /// Returns the resulting snapshot; unchanged when `id` is unknown.
    pub fn toggle_complete(&mut self, id: TaskId) -> TaskSnapshot {
        let Some(index) = self.current.position(id) else {
            debug!("event=task_toggle module=store status=noop task_id={id}");
            return self.snapshot();
        };

        let next = self
            .current
            .iter()
            .enumerate()
            .map(|(i, task)| if i == index { task.toggled() } else { task.clone() })
            .collect::<Vec<_>>();
        let completed = next[index].is_completed();
        self.current = TaskSnapshot::from_vec(next);

        debug!("event=task_toggle module=store status=ok task_id={id} completed={completed}");
        self.snapshot()
    }

    /// Removes the task with `id`, keeping the order of the rest.
    ///
    /// Returns the resulting snapshot; unchanged when `id` is unknown.
    pub fn delete(&mut self, id: TaskId) -> TaskSnapshot {
        if !self.current.contains(id) {
            debug!("event=task_delete module=store status=noop task_id={id}");
            return self.snapshot();
        }

        let next = self
            .current
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect::<Vec<_>>();
        self.current = TaskSnapshot::from_vec(next);

        debug!(
            "event=task_delete module=store status=ok task_id={id} total={}",
            self.current.len()
        );
        self.snapshot()
    }
}
