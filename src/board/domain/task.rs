//! Task entity, workflow status and Kanban column metadata.

use super::{BoardDomainError, ParseTaskStatusError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task; equivalently, the Kanban column it sits in.
///
/// Every ordered pair of distinct statuses is a permitted transition, so a
/// finished task may be moved back to [`TaskStatus::ToDo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "todo")]
    ToDo,
    /// Work is under way.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "todo" | "to-do" => Ok(Self::ToDo),
            "in-progress" | "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

/// A Kanban board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanbanColumn {
    /// Status represented by the column.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
}

/// The three board columns in display order.
pub const KANBAN_COLUMNS: [KanbanColumn; 3] = [
    KanbanColumn {
        status: TaskStatus::ToDo,
        title: TaskStatus::ToDo.title(),
    },
    KanbanColumn {
        status: TaskStatus::InProgress,
        title: TaskStatus::InProgress.title(),
    },
    KanbanColumn {
        status: TaskStatus::Done,
        title: TaskStatus::Done.title(),
    },
];

/// A unit of work owned by exactly one project.
///
/// Updates replace the whole record: callers clone the current task, adjust
/// it with the `with_*` methods and hand the full value back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
}

impl Task {
    /// Creates a task with a trimmed, non-empty title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id,
            title: normalized_title(title.into())?,
            description: description.into().trim().to_owned(),
            status,
            image_url: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the attached image data URI, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns whether an image is attached.
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        self.title = normalized_title(title.into())?;
        Ok(self)
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_owned();
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches an image, replacing any previous one.
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Removes the attached image.
    #[must_use]
    pub fn without_image(mut self) -> Self {
        self.image_url = None;
        self
    }

    /// Checks the id and title invariants on a value that bypassed the
    /// constructors, such as a caller-built replacement or a deserialized
    /// record.
    pub(crate) fn validate(&self) -> Result<(), BoardDomainError> {
        if self.id.as_str().trim().is_empty() {
            return Err(BoardDomainError::EmptyIdentifier);
        }
        if self.title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(())
    }
}

fn normalized_title(raw: String) -> Result<String, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTaskTitle);
    }
    Ok(trimmed.to_owned())
}

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    status: TaskStatus,
    image_url: Option<String>,
}

impl NewTask {
    /// Creates a request with the required title and initial status.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status,
            image_url: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attaches an image data URI.
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Builds the task under the given identifier.
    pub(crate) fn into_task(self, id: TaskId) -> Result<Task, BoardDomainError> {
        let mut task = Task::new(id, self.title, self.description, self.status)?;
        task.image_url = self.image_url;
        Ok(task)
    }
}
