//! Lookup and filtering over a loaded collection.

use crate::error::StoreError;
use task_core::{Status, Task};

/// Position of the task with `id`, by linear scan.
pub fn position(tasks: &[Task], id: u64) -> Option<usize> {
    tasks.iter().position(|task| task.id == id)
}

/// One past the highest id in use, or 1 for an empty collection.
///
/// Fails when the highest id is already `u64::MAX`.
pub fn next_id(tasks: &[Task]) -> Result<u64, StoreError> {
    match tasks.iter().map(|task| task.id).max() {
        Some(max) => max.checked_add(1).ok_or(StoreError::IdSpaceExhausted(max)),
        None => Ok(1),
    }
}

/// Tasks with the given status, in their stored order. `None` keeps everything.
pub fn filter_by_status(tasks: Vec<Task>, status: Option<Status>) -> Vec<Task> {
    match status {
        Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
        None => tasks,
    }
}
