//! Domain model for projects, tasks and board statistics.
//!
//! The board domain is pure: validation and invariants live here, while
//! persistence and id-generation clocks are supplied from outside.

mod error;
mod ids;
mod project;
mod sample;
mod stats;
mod task;

pub use error::{BoardDomainError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId};
pub use project::Project;
pub use sample::sample_projects;
pub use stats::{DashboardSummary, ProjectSummary, StatusCounts};
pub use task::{KANBAN_COLUMNS, KanbanColumn, NewTask, Task, TaskStatus};
