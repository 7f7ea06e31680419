//! Error types for board domain validation and parsing.

use super::{ProjectId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// An identifier is empty after trimming.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// Two projects share an identifier.
    #[error("project {0} appears more than once")]
    DuplicateProject(ProjectId),

    /// A task with the same identifier already exists in the project.
    #[error("task {task_id} already exists in project {project_id}")]
    DuplicateTask {
        /// Project that already owns the task.
        project_id: ProjectId,
        /// Conflicting task identifier.
        task_id: TaskId,
    },
}

/// Error returned while parsing a task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
