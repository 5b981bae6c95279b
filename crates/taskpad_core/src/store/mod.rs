//! Session-scoped task state.
//!
//! # Responsibility
//! - Hold the task collection and its transitions.
//! - Keep UI/FFI layers away from direct collection mutation.

pub mod task_store;
