//! Drag-and-drop transitions on the Kanban board.

use super::store::{BoardStore, BoardStoreResult, TransitionOutcome};
use crate::board::{
    domain::{KANBAN_COLUMNS, KanbanColumn, Project, ProjectId, Task, TaskId, TaskStatus},
    ports::KeyValueStore,
};
use mockable::Clock;
use tracing::debug;

/// Result of dropping the dragged task onto a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task changed column.
    Moved {
        /// Task that moved.
        task_id: TaskId,
        /// Previous status.
        from: TaskStatus,
        /// New status.
        to: TaskStatus,
    },
    /// The task was dropped onto the column it already sits in.
    SameColumn(TaskId),
    /// The dragged task is not in the active project.
    TaskMissing(TaskId),
    /// No drag was in progress.
    NoDrag,
}

/// Interprets "task moved to column" intents.
///
/// The controller holds one piece of transient state: the task currently
/// being dragged. A drop always clears it, whatever the outcome, so a stale
/// drag can never leak into a later interaction.
#[derive(Debug, Clone, Default)]
pub struct KanbanController {
    dragged: Option<TaskId>,
}

impl KanbanController {
    /// Creates a controller with no drag in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self { dragged: None }
    }

    /// Records the task being dragged, replacing any earlier drag.
    pub fn begin_drag(&mut self, task_id: TaskId) {
        self.dragged = Some(task_id);
    }

    /// Returns the task currently being dragged.
    #[must_use]
    pub const fn dragged_task(&self) -> Option<&TaskId> {
        self.dragged.as_ref()
    }

    /// Abandons the current drag without moving anything.
    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    /// Drops the dragged task onto `column` of the active project.
    ///
    /// Drops with no drag in progress, drops of tasks missing from the
    /// project and drops onto the current column are ignored and reported
    /// through [`DropOutcome`].
    ///
    /// # Errors
    ///
    /// Returns store errors when the transition cannot be persisted. The drag
    /// state is cleared even then.
    pub fn drop_on<S, C>(
        &mut self,
        store: &mut BoardStore<S, C>,
        project_id: &ProjectId,
        column: TaskStatus,
    ) -> BoardStoreResult<DropOutcome>
    where
        S: KeyValueStore,
        C: Clock + Send + Sync,
    {
        let Some(task_id) = self.dragged.take() else {
            debug!(%column, "drop without an active drag ignored");
            return Ok(DropOutcome::NoDrag);
        };
        let found = store
            .project(project_id)
            .and_then(|project| project.task(&task_id))
            .map(Task::status);
        let Some(current) = found else {
            debug!(%project_id, %task_id, "drop of task missing from project ignored");
            return Ok(DropOutcome::TaskMissing(task_id));
        };
        if current == column {
            debug!(%project_id, %task_id, %column, "drop onto same column ignored");
            return Ok(DropOutcome::SameColumn(task_id));
        }
        match store.transition_task(project_id, &task_id, column)? {
            TransitionOutcome::Applied { from, to } => Ok(DropOutcome::Moved { task_id, from, to }),
            TransitionOutcome::Unchanged => Ok(DropOutcome::SameColumn(task_id)),
        }
    }
}

/// A board column together with the tasks it currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// Column metadata.
    pub column: KanbanColumn,
    /// Tasks in insertion order.
    pub tasks: Vec<&'a Task>,
}

/// Groups a project's tasks into the three board columns.
#[must_use]
pub fn board_columns(project: &Project) -> Vec<ColumnView<'_>> {
    KANBAN_COLUMNS
        .iter()
        .map(|column| ColumnView {
            column: *column,
            tasks: project.tasks_in(column.status).collect(),
        })
        .collect()
}
