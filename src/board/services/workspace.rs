//! Top-level board controller: store, project selection and drag state.

use super::kanban::{DropOutcome, KanbanController};
use super::store::{BoardStore, BoardStoreError, BoardStoreResult};
use crate::board::{
    domain::{NewTask, Project, ProjectId, Task, TaskId, TaskStatus},
    ports::{KeyValueStore, KeyValueStoreExt, SELECTED_PROJECT_KEY},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Single owner of the board's mutable UI state.
///
/// The selected project is explicit state here rather than an ambient
/// global; `None` means the dashboard is shown. Task operations act on the
/// selected project.
pub struct Workspace<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    persistence: Arc<S>,
    store: BoardStore<S, C>,
    selected: Option<ProjectId>,
    kanban: KanbanController,
}

impl<S, C> Workspace<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Loads projects and the stored selection.
    ///
    /// Without a stored selection the first project is selected. A stored
    /// selection naming a project that no longer exists is treated as no
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns store errors when persisted state cannot be loaded.
    pub fn open(
        persistence: Arc<S>,
        clock: Arc<C>,
        default_projects: Vec<Project>,
    ) -> BoardStoreResult<Self> {
        let store = BoardStore::open_with_default(Arc::clone(&persistence), clock, default_projects)?;
        let fallback = store.list_projects().first().map(|project| project.id().clone());
        let stored: Option<ProjectId> = persistence.get_or(SELECTED_PROJECT_KEY, fallback)?;
        let selected = stored.filter(|project_id| store.project(project_id).is_some());
        Ok(Self {
            persistence,
            store,
            selected,
            kanban: KanbanController::new(),
        })
    }

    /// Returns the underlying store for read access.
    #[must_use]
    pub const fn store(&self) -> &BoardStore<S, C> {
        &self.store
    }

    /// Returns the selected project identifier.
    #[must_use]
    pub const fn selected_project_id(&self) -> Option<&ProjectId> {
        self.selected.as_ref()
    }

    /// Returns the selected project.
    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected
            .as_ref()
            .and_then(|project_id| self.store.project(project_id))
    }

    /// Selects a project, or the dashboard when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::ProjectNotFound`] for an unknown project,
    /// or persistence errors.
    pub fn select_project(&mut self, project_id: Option<ProjectId>) -> BoardStoreResult<()> {
        if let Some(ref id) = project_id {
            if self.store.project(id).is_none() {
                return Err(BoardStoreError::ProjectNotFound(id.clone()));
            }
        }
        self.persist_selection(project_id)
    }

    /// Creates a project and selects it.
    ///
    /// The project is committed first. If the new selection cannot be
    /// persisted it still applies in memory and the failure is logged.
    ///
    /// # Errors
    ///
    /// Returns store errors from [`BoardStore::add_project`].
    pub fn add_project(&mut self, name: &str) -> BoardStoreResult<Project> {
        let project = self.store.add_project(name)?;
        self.follow_selection(Some(project.id().clone()));
        Ok(project)
    }

    /// Deletes a project. When it was selected, the first remaining project
    /// becomes selected, or none if the collection is now empty. As with
    /// [`Workspace::add_project`], a failed selection write is only logged.
    ///
    /// # Errors
    ///
    /// Returns store errors from [`BoardStore::delete_project`].
    pub fn delete_project(&mut self, project_id: &ProjectId) -> BoardStoreResult<()> {
        self.store.delete_project(project_id)?;
        if self.selected.as_ref() == Some(project_id) {
            let fallback = self
                .store
                .list_projects()
                .first()
                .map(|project| project.id().clone());
            self.follow_selection(fallback);
        }
        Ok(())
    }

    /// Adds a task to the selected project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::NoProjectSelected`] without a selection, or
    /// store errors from [`BoardStore::add_task`].
    pub fn add_task(&mut self, request: NewTask) -> BoardStoreResult<Task> {
        let project_id = self.require_selection()?;
        self.store.add_task(&project_id, request)
    }

    /// Replaces a task of the selected project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::NoProjectSelected`] without a selection, or
    /// store errors from [`BoardStore::update_task`].
    pub fn update_task(&mut self, task: Task) -> BoardStoreResult<()> {
        let project_id = self.require_selection()?;
        self.store.update_task(&project_id, task)
    }

    /// Deletes a task of the selected project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::NoProjectSelected`] without a selection, or
    /// store errors from [`BoardStore::delete_task`].
    pub fn delete_task(&mut self, task_id: &TaskId) -> BoardStoreResult<()> {
        let project_id = self.require_selection()?;
        self.store.delete_task(&project_id, task_id)
    }

    /// Starts dragging a task.
    pub fn begin_drag(&mut self, task_id: TaskId) {
        self.kanban.begin_drag(task_id);
    }

    /// Ends a drag gesture without a drop.
    pub fn cancel_drag(&mut self) {
        self.kanban.cancel_drag();
    }

    /// Returns the task currently being dragged.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<&TaskId> {
        self.kanban.dragged_task()
    }

    /// Drops the dragged task onto a column of the selected project.
    ///
    /// Without a selection the drag is cleared and nothing moves.
    ///
    /// # Errors
    ///
    /// Returns store errors when the transition cannot be persisted.
    pub fn drop_on(&mut self, column: TaskStatus) -> BoardStoreResult<DropOutcome> {
        let Some(project_id) = self.selected.clone() else {
            let outcome = self
                .kanban
                .dragged_task()
                .cloned()
                .map_or(DropOutcome::NoDrag, DropOutcome::TaskMissing);
            self.kanban.cancel_drag();
            debug!(%column, "drop without a selected project ignored");
            return Ok(outcome);
        };
        self.kanban.drop_on(&mut self.store, &project_id, column)
    }

    fn require_selection(&self) -> BoardStoreResult<ProjectId> {
        self.selected
            .clone()
            .ok_or(BoardStoreError::NoProjectSelected)
    }

    fn follow_selection(&mut self, selected: Option<ProjectId>) {
        if let Err(err) = self.persistence.set_value(SELECTED_PROJECT_KEY, &selected) {
            warn!(error = %err, selected = ?selected, "failed to persist project selection");
        }
        debug!(selected = ?selected, "project selection changed");
        self.selected = selected;
    }

    fn persist_selection(&mut self, selected: Option<ProjectId>) -> BoardStoreResult<()> {
        self.persistence
            .set_value(SELECTED_PROJECT_KEY, &selected)?;
        debug!(selected = ?selected, "project selection changed");
        self.selected = selected;
        Ok(())
    }
}
