//! Authoritative project and task store.

use crate::board::{
    domain::{
        BoardDomainError, DashboardSummary, NewTask, Project, ProjectId, StatusCounts, Task,
        TaskId, TaskStatus,
    },
    ports::{KeyValueStore, KeyValueStoreExt, PROJECTS_KEY, PersistenceError},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// No project exists with the given identifier.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),
    /// The project exists but holds no task with the given identifier.
    #[error("task {task_id} not found in project {project_id}")]
    TaskNotFound {
        /// Project that was searched.
        project_id: ProjectId,
        /// Missing task identifier.
        task_id: TaskId,
    },
    /// No project is currently selected.
    #[error("no project is selected")]
    NoProjectSelected,
    /// The change could not be persisted; nothing was applied.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl BoardStoreError {
    /// Returns whether the error rejects invalid input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }

    /// Returns whether the error refers to a nonexistent project or task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ProjectNotFound(_) | Self::TaskNotFound { .. })
    }
}

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Outcome of a status transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The task moved between the two statuses.
    Applied {
        /// Status before the move.
        from: TaskStatus,
        /// Status after the move.
        to: TaskStatus,
    },
    /// The task was already in the requested status; nothing was written.
    Unchanged,
}

/// Owns the project collection and persists it on every mutation.
///
/// Each mutation validates its input, builds the next collection, persists
/// it and only then commits it in memory. A rejected or failed operation
/// leaves both the in-memory and the persisted state untouched.
pub struct BoardStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    persistence: Arc<S>,
    clock: Arc<C>,
    projects: Vec<Project>,
}

impl<S, C> BoardStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Loads the store, starting empty when nothing has been persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the stored collection
    /// cannot be read or decoded, and [`BoardStoreError::Domain`] when it
    /// violates a board invariant.
    pub fn open(persistence: Arc<S>, clock: Arc<C>) -> BoardStoreResult<Self> {
        Self::open_with_default(persistence, clock, Vec::new())
    }

    /// Loads the store, starting from `default` when nothing has been
    /// persisted. The default is not written until the first mutation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the stored collection
    /// cannot be read or decoded, and [`BoardStoreError::Domain`] when it
    /// violates a board invariant.
    pub fn open_with_default(
        persistence: Arc<S>,
        clock: Arc<C>,
        default: Vec<Project>,
    ) -> BoardStoreResult<Self> {
        let projects: Vec<Project> = persistence.get_or(PROJECTS_KEY, default)?;
        validate_collection(&projects)?;
        debug!(projects = projects.len(), "loaded board");
        Ok(Self {
            persistence,
            clock,
            projects,
        })
    }

    /// Returns every project in collection order.
    #[must_use]
    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Finds a project by identifier.
    #[must_use]
    pub fn project(&self, project_id: &ProjectId) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.id() == project_id)
    }

    /// Creates a project with a generated identifier and appends it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Domain`] when the name is empty after
    /// trimming, or [`BoardStoreError::Persistence`] when the write fails.
    pub fn add_project(&mut self, name: &str) -> BoardStoreResult<Project> {
        let mut project = Project::create(name, &*self.clock)?;
        while self.project(project.id()).is_some() {
            project = Project::create(name, &*self.clock)?;
        }
        let mut next = self.projects.clone();
        next.push(project.clone());
        self.commit(next)?;
        info!(project_id = %project.id(), name = project.name(), "project created");
        Ok(project)
    }

    /// Deletes a project and all of its tasks.
    ///
    /// Deleting an unknown project is a no-op and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the write fails.
    pub fn delete_project(&mut self, project_id: &ProjectId) -> BoardStoreResult<()> {
        if self.project(project_id).is_none() {
            debug!(%project_id, "delete of unknown project ignored");
            return Ok(());
        }
        let next = self
            .projects
            .iter()
            .filter(|project| project.id() != project_id)
            .cloned()
            .collect();
        self.commit(next)?;
        info!(%project_id, "project deleted");
        Ok(())
    }

    /// Adds a task to the end of a project's task list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ProjectNotFound`] for an unknown project,
    /// [`BoardStoreError::Domain`] when the title is empty after trimming,
    /// or [`BoardStoreError::Persistence`] when the write fails.
    pub fn add_task(&mut self, project_id: &ProjectId, request: NewTask) -> BoardStoreResult<Task> {
        let index = self.project_index(project_id)?;
        let mut next = self.projects.clone();
        let project = next
            .get_mut(index)
            .ok_or_else(|| BoardStoreError::ProjectNotFound(project_id.clone()))?;
        let mut task_id = TaskId::generate(&*self.clock);
        while project.task(&task_id).is_some() {
            task_id = TaskId::generate(&*self.clock);
        }
        let task = request.into_task(task_id)?;
        project.push_task(task.clone())?;
        self.commit(next)?;
        debug!(%project_id, task_id = %task.id(), status = %task.status(), "task added");
        Ok(task)
    }

    /// Replaces a task with `task`, matched by identifier.
    ///
    /// The whole record is replaced; fields the caller does not want to
    /// change must be carried over from the current value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ProjectNotFound`] or
    /// [`BoardStoreError::TaskNotFound`] for unknown identifiers,
    /// [`BoardStoreError::Domain`] when the replacement title is empty, or
    /// [`BoardStoreError::Persistence`] when the write fails.
    pub fn update_task(&mut self, project_id: &ProjectId, task: Task) -> BoardStoreResult<()> {
        task.validate()?;
        let index = self.project_index(project_id)?;
        let mut next = self.projects.clone();
        let task_id = task.id().clone();
        let replaced = next
            .get_mut(index)
            .and_then(|project| project.replace_task(task));
        if replaced.is_none() {
            return Err(BoardStoreError::TaskNotFound {
                project_id: project_id.clone(),
                task_id,
            });
        }
        self.commit(next)?;
        debug!(%project_id, %task_id, "task updated");
        Ok(())
    }

    /// Deletes a task.
    ///
    /// Deleting from an unknown project, or deleting an unknown task, is a
    /// no-op and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the write fails.
    pub fn delete_task(&mut self, project_id: &ProjectId, task_id: &TaskId) -> BoardStoreResult<()> {
        let Ok(index) = self.project_index(project_id) else {
            debug!(%project_id, %task_id, "delete in unknown project ignored");
            return Ok(());
        };
        let mut next = self.projects.clone();
        let removed = next
            .get_mut(index)
            .is_some_and(|project| project.remove_task(task_id));
        if !removed {
            debug!(%project_id, %task_id, "delete of unknown task ignored");
            return Ok(());
        }
        self.commit(next)?;
        debug!(%project_id, %task_id, "task deleted");
        Ok(())
    }

    /// Moves a task to `new_status`.
    ///
    /// Requesting the status the task already has is a no-op that performs
    /// no write.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ProjectNotFound`] or
    /// [`BoardStoreError::TaskNotFound`] for unknown identifiers, or
    /// [`BoardStoreError::Persistence`] when the write fails.
    pub fn transition_task(
        &mut self,
        project_id: &ProjectId,
        task_id: &TaskId,
        new_status: TaskStatus,
    ) -> BoardStoreResult<TransitionOutcome> {
        let task = self
            .project(project_id)
            .ok_or_else(|| BoardStoreError::ProjectNotFound(project_id.clone()))?
            .task(task_id)
            .ok_or_else(|| BoardStoreError::TaskNotFound {
                project_id: project_id.clone(),
                task_id: task_id.clone(),
            })?;
        let from = task.status();
        if from == new_status {
            debug!(%project_id, %task_id, status = %from, "transition to current status ignored");
            return Ok(TransitionOutcome::Unchanged);
        }
        let moved = task.clone().with_status(new_status);
        self.update_task(project_id, moved)?;
        Ok(TransitionOutcome::Applied {
            from,
            to: new_status,
        })
    }

    /// Returns per-status task counts for one project.
    #[must_use]
    pub fn project_stats(&self, project_id: &ProjectId) -> Option<StatusCounts> {
        self.project(project_id).map(Project::status_counts)
    }

    /// Returns the cross-project dashboard view.
    #[must_use]
    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::from_projects(&self.projects)
    }

    fn project_index(&self, project_id: &ProjectId) -> BoardStoreResult<usize> {
        self.projects
            .iter()
            .position(|project| project.id() == project_id)
            .ok_or_else(|| BoardStoreError::ProjectNotFound(project_id.clone()))
    }

    fn commit(&mut self, next: Vec<Project>) -> BoardStoreResult<()> {
        if let Err(err) = self.persistence.set_value(PROJECTS_KEY, &next) {
            warn!(error = %err, "failed to persist projects; change discarded");
            return Err(err.into());
        }
        self.projects = next;
        Ok(())
    }
}

fn validate_collection(projects: &[Project]) -> Result<(), BoardDomainError> {
    let mut seen = HashSet::with_capacity(projects.len());
    for project in projects {
        project.validate()?;
        if !seen.insert(project.id()) {
            return Err(BoardDomainError::DuplicateProject(project.id().clone()));
        }
    }
    Ok(())
}
