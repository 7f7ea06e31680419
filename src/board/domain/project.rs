//! Project aggregate owning an ordered list of tasks.

use super::{BoardDomainError, ProjectId, StatusCounts, Task, TaskId, TaskStatus};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered collection of tasks.
///
/// Task order is insertion order. Task identifiers are unique within the
/// project; every mutation below preserves that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl Project {
    /// Creates an empty project with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is empty
    /// after trimming.
    pub fn create(name: impl Into<String>, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        Self::new(ProjectId::generate(clock), name)
    }

    /// Creates an empty project under an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is empty
    /// after trimming.
    pub fn new(id: ProjectId, name: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyProjectName);
        }
        Ok(Self {
            id,
            name: trimmed.to_owned(),
            tasks: Vec::new(),
        })
    }

    /// Appends a task, builder style.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when a task with the same
    /// identifier already exists.
    pub fn with_task(mut self, task: Task) -> Result<Self, BoardDomainError> {
        self.push_task(task)?;
        Ok(self)
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns the tasks of one board column, in insertion order.
    pub fn tasks_in(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status() == status)
    }

    /// Counts tasks per status.
    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.tasks.iter().map(Task::status).collect()
    }

    /// Checks every invariant of a project that bypassed the constructors,
    /// such as one decoded from storage.
    pub(crate) fn validate(&self) -> Result<(), BoardDomainError> {
        if self.id.as_str().trim().is_empty() {
            return Err(BoardDomainError::EmptyIdentifier);
        }
        if self.name.trim().is_empty() {
            return Err(BoardDomainError::EmptyProjectName);
        }
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            task.validate()?;
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask {
                    project_id: self.id.clone(),
                    task_id: task.id().clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn push_task(&mut self, task: Task) -> Result<(), BoardDomainError> {
        if self.task(task.id()).is_some() {
            return Err(BoardDomainError::DuplicateTask {
                project_id: self.id.clone(),
                task_id: task.id().clone(),
            });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Swaps in the replacement for the task with the same identifier,
    /// returning the previous value, or `None` when no such task exists.
    pub(crate) fn replace_task(&mut self, task: Task) -> Option<Task> {
        self.tasks
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .map(|slot| std::mem::replace(slot, task))
    }

    /// Removes a task, returning whether anything was removed.
    pub(crate) fn remove_task(&mut self, task_id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != task_id);
        self.tasks.len() != before
    }
}
