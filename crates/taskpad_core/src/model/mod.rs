//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and the read-only collection snapshot.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Snapshots are immutable; changes produce new snapshots.

pub mod snapshot;
pub mod task;
