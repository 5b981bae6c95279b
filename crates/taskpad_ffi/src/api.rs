//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold one task session per UI screen as an opaque object.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Unknown or malformed task ids are silent no-ops, never errors.
//! - Task ids cross the boundary as canonical UUID strings.

use log::debug;
use taskpad_core::{
    can_submit as can_submit_inner, core_version as core_version_inner,
    init_logging as init_logging_inner, parse_task_id, ping as ping_inner, Task, TaskChange,
    TaskService, TaskStats,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Task row rendered by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for TaskItem {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            text: task.text().to_string(),
            completed: task.is_completed(),
        }
    }
}

/// Statistics envelope for the header and progress card.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStatsView {
    pub total: u32,
    pub completed: u32,
    pub remaining: u32,
    /// Completed share in `[0.0, 1.0]`.
    pub progress: f64,
    pub percent_complete: u8,
    /// `"NN% Complete"`; `None` while the list is empty.
    pub progress_label: Option<String>,
    /// `"R of T left"`; `None` while the list is empty.
    pub remaining_summary: Option<String>,
}

impl From<TaskStats> for TaskStatsView {
    fn from(stats: TaskStats) -> Self {
        Self {
            total: saturating_u32(stats.total),
            completed: saturating_u32(stats.completed),
            remaining: saturating_u32(stats.remaining),
            progress: stats.progress,
            percent_complete: stats.percent_complete(),
            progress_label: stats.progress_label(),
            remaining_summary: stats.remaining_summary(),
        }
    }
}

/// Generic action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// `false` only when the input itself was rejected.
    pub ok: bool,
    /// Whether the task list changed.
    pub changed: bool,
    /// Affected task ID, when there is one.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn changed(message: impl Into<String>, task_id: String) -> Self {
        Self {
            ok: true,
            changed: true,
            task_id: Some(task_id),
            message: message.into(),
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed: false,
            task_id: None,
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// One in-memory task list, owned by the Dart side.
///
/// Dropped together with the Dart handle; nothing outlives the session.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct TaskSession {
    service: TaskService,
}

impl TaskSession {
    /// Creates an empty session.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the add button's enabled state.
    #[flutter_rust_bridge::frb(sync)]
    pub fn can_submit(&self, text: String) -> bool {
        can_submit_inner(text.as_str())
    }

    /// Adds a task from raw input text.
    ///
    /// # FFI contract
    /// - Input is trimmed; empty input returns `ok = false` and adds nothing.
    /// - Returns the new task ID on success.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&mut self, text: String) -> TaskActionResponse {
        match self.service.submit_change(text.as_str()) {
            TaskChange::Added(task) => {
                TaskActionResponse::changed("Task added.", task.id().to_string())
            }
            _ => TaskActionResponse::rejected("Task text is empty."),
        }
    }

    /// Toggles completion of one task.
    ///
    /// # FFI contract
    /// - Unknown or malformed IDs return `ok = true, changed = false`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&mut self, task_id: String) -> TaskActionResponse {
        let Some(id) = parse_id_or_log(task_id.as_str()) else {
            return TaskActionResponse::unchanged("No matching task.");
        };
        match self.service.toggle_complete(id) {
            TaskChange::Toggled { completed: true, .. } => {
                TaskActionResponse::changed("Task completed.", id.to_string())
            }
            TaskChange::Toggled { .. } => {
                TaskActionResponse::changed("Task reopened.", id.to_string())
            }
            _ => TaskActionResponse::unchanged("No matching task."),
        }
    }

    /// Deletes one task.
    ///
    /// # FFI contract
    /// - Unknown or malformed IDs return `ok = true, changed = false`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&mut self, task_id: String) -> TaskActionResponse {
        let Some(id) = parse_id_or_log(task_id.as_str()) else {
            return TaskActionResponse::unchanged("No matching task.");
        };
        match self.service.delete(id) {
            TaskChange::Deleted(id) => TaskActionResponse::changed("Task deleted.", id.to_string()),
            _ => TaskActionResponse::unchanged("No matching task."),
        }
    }

    /// Current tasks in display order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list_tasks(&self) -> Vec<TaskItem> {
        self.service.snapshot().iter().map(TaskItem::from).collect()
    }

    /// Statistics recomputed from the current list.
    #[flutter_rust_bridge::frb(sync)]
    pub fn stats(&self) -> TaskStatsView {
        TaskStatsView::from(self.service.stats())
    }
}

fn parse_id_or_log(raw: &str) -> Option<taskpad_core::TaskId> {
    match parse_task_id(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!("event=task_id_parse module=ffi status=noop reason={err}");
            None
        }
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
