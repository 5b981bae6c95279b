//! Derived task statistics.
//!
//! # Responsibility
//! - Compute counts and completion ratio from a task slice.
//! - Provide the summary strings shown next to the list.
//!
//! # Invariants
//! - Pure: output depends on the input slice only, nothing is cached.
//! - `total == completed + remaining`.
//! - `0.0 <= progress <= 1.0`, and `progress == 0.0` when `total == 0`.

use crate::model::task::Task;
use serde::Serialize;

/// Aggregate view over the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// Completed share in `[0.0, 1.0]`.
    pub progress: f64,
}

impl TaskStats {
    /// Progress as a whole percentage, rounded half away from zero.
    pub fn percent_complete(&self) -> u8 {
        // progress is clamped to [0, 1] so the cast cannot truncate.
        (self.progress * 100.0).round() as u8
    }

    /// `"{percent}% Complete"`, or `None` for an empty list.
    pub fn progress_label(&self) -> Option<String> {
        if self.total == 0 {
            return None;
        }
        Some(format!("{}% Complete", self.percent_complete()))
    }

    /// `"{remaining} of {total} left"`, or `None` for an empty list.
    pub fn remaining_summary(&self) -> Option<String> {
        if self.total == 0 {
            return None;
        }
        Some(format!("{} of {} left", self.remaining, self.total))
    }
}

/// Recomputes statistics from scratch.
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.is_completed()).count();
    let progress = if total > 0 {
        completed as f64 / total as f64
    } else {
        0.0
    };

    TaskStats {
        total,
        completed,
        remaining: total - completed,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_stats;
    use crate::model::task::Task;

    #[test]
    fn empty_slice_has_zero_progress_and_no_labels() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.remaining, 0);
        assert_eq!(stats.progress, 0.0);
        assert_eq!(stats.percent_complete(), 0);
        assert_eq!(stats.progress_label(), None);
        assert_eq!(stats.remaining_summary(), None);
    }

    #[test]
    fn percent_rounds_to_nearest_whole_number() {
        let tasks = vec![
            Task::new("a").toggled(),
            Task::new("b").toggled(),
            Task::new("c"),
        ];
        let stats = compute_stats(&tasks);
        assert_eq!(stats.percent_complete(), 67);
        assert_eq!(stats.progress_label().as_deref(), Some("67% Complete"));
        assert_eq!(stats.remaining_summary().as_deref(), Some("1 of 3 left"));
    }

    #[test]
    fn all_done_reports_full_progress() {
        let tasks = vec![Task::new("only").toggled()];
        let stats = compute_stats(&tasks);
        assert_eq!(stats.progress, 1.0);
        assert_eq!(stats.percent_complete(), 100);
    }
}
