use crate::error::StoreError;
use crate::query;
use crate::store::Store;
use task_core::clock::{Clock, SystemClock};
use task_core::task::validate_description;
use task_core::{Status, Task};
use tracing::info;

/// Task lifecycle operations.
///
/// Every operation loads the whole collection, works on it in memory and, for
/// writes, saves the whole collection back. Input is validated and the target
/// task located before anything is written.
pub struct Service<C = SystemClock> {
    store: Store,
    clock: C,
}

impl Service {
    pub fn new(store: Store) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> Service<C> {
    pub fn with_clock(store: Store, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Create a `todo` task with the next free id.
    pub fn add(&self, description: &str) -> Result<Task, StoreError> {
        let description = validate_description(description)?;
        let mut tasks = self.store.load()?;

        let task = Task::new(query::next_id(&tasks)?, description, self.clock.now());
        tasks.push(task.clone());
        self.store.save(&tasks)?;

        info!(id = task.id, "added task");
        Ok(task)
    }

    /// Replace the description of task `id`.
    pub fn update(&self, id: u64, description: &str) -> Result<Task, StoreError> {
        let description = validate_description(description)?;
        self.modify(id, |task, now| task.set_description(description, now))
            .inspect(|task| info!(id = task.id, "updated task"))
    }

    /// Remove task `id`, keeping the rest in order.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut tasks = self.store.load()?;
        let index = query::position(&tasks, id).ok_or(StoreError::TaskNotFound(id))?;

        tasks.remove(index);
        self.store.save(&tasks)?;

        info!(id = id, "deleted task");
        Ok(())
    }

    /// Set the status of task `id`.
    pub fn mark_status(&self, id: u64, status: Status) -> Result<Task, StoreError> {
        self.modify(id, |task, now| task.set_status(status, now))
            .inspect(|task| info!(id = task.id, %status, "changed task status"))
    }

    /// All tasks in stored order, optionally only those matching a status token
    /// (`todo`, `in-progress`/`in_progress`, `done`; case-insensitive).
    pub fn list(&self, filter: Option<&str>) -> Result<Vec<Task>, StoreError> {
        let status = filter.map(str::parse::<Status>).transpose()?;
        let tasks = self.store.load()?;
        Ok(query::filter_by_status(tasks, status))
    }

    fn modify(
        &self,
        id: u64,
        apply: impl FnOnce(&mut Task, chrono::DateTime<chrono::Utc>),
    ) -> Result<Task, StoreError> {
        let mut tasks = self.store.load()?;
        let index = query::position(&tasks, id).ok_or(StoreError::TaskNotFound(id))?;

        apply(&mut tasks[index], self.clock.now());
        let task = tasks[index].clone();
        self.store.save(&tasks)?;
        Ok(task)
    }
}
