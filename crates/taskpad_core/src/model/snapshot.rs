//! Immutable task collection snapshot.
//!
//! # Invariants
//! - Order is insertion order; removals keep relative order of the rest.
//! - Task ids are pairwise distinct.
//! - A snapshot never changes once built; clones share storage.

use crate::model::task::{Task, TaskId};
use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// Read-only view of the task collection at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    tasks: Arc<[Task]>,
}

impl Default for TaskSnapshot {
    fn default() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
        }
    }
}

impl TaskSnapshot {
    pub(crate) fn from_vec(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::from(tasks),
        }
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the display position of `id`, if present.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Returns whether both snapshots share the same storage.
    ///
    /// No-op transitions hand back the previous snapshot, so this is `true`
    /// exactly when nothing changed.
    pub fn same_as(&self, other: &TaskSnapshot) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl Deref for TaskSnapshot {
    type Target = [Task];

    fn deref(&self) -> &Self::Target {
        &self.tasks
    }
}

impl Serialize for TaskSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tasks.as_ref().serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a TaskSnapshot {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
