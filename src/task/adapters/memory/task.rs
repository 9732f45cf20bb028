//! In-memory task repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CompletionPolicy, StatusChange, Task, TaskId, transition},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository preserving insertion order.
///
/// Clones share the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `tasks` in the given order.
    ///
    /// Later duplicates of an identifier are dropped.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut stored: Vec<Task> = Vec::new();
        for task in tasks {
            if !stored.iter().any(|existing| existing.id() == task.id()) {
                stored.push(task);
            }
        }
        Self {
            state: Arc::new(RwLock::new(stored)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.iter().find(|task| task.id() == id).cloned())
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn apply_status_change(
        &self,
        id: TaskId,
        change: StatusChange,
        policy: CompletionPolicy,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        *slot = transition(slot, change, policy);
        Ok(slot.clone())
    }
}
