//! Core domain logic for Taskpad.
//! This crate is the single source of truth for task-list behavior.

pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod store;

pub use logging::{
    default_log_level, init_logging, init_logging_from_env, logging_status, LogSettings,
    LoggingError,
};
pub use model::snapshot::TaskSnapshot;
pub use model::task::{parse_task_id, Task, TaskId, TaskValidationError};
pub use service::task_service::{can_submit, TaskChange, TaskService};
pub use stats::{compute_stats, TaskStats};
pub use store::task_store::TaskStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
