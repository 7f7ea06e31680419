//! Prompt construction for report requests.
//!
//! Prompts embed a JSON digest of the project: its name and, for every task,
//! the title, status and whether an image is attached. Image data itself is
//! never included.

use minijinja::{Environment, context};
use serde::Serialize;

use super::{ReportError, ReportResult};
use crate::board::domain::{Project, Task, TaskStatus};

const REPORT_TEMPLATE: &str = r#"You are a senior project management assistant. Based on the following project data in JSON format, generate a concise and professional status report.
The report should include:
1. A brief overall summary of the project's status.
2. A list of completed tasks.
3. A list of tasks currently in progress.
4. A list of tasks that haven't been started.
5. Identify any potential risks or blockers (e.g., many tasks in 'To Do' and few in 'Done').
6. Suggest the next priority actions for the team.

Note if a task has an image attached, as it might be a visual task (e.g., design, screenshot).

Format the report using markdown with clear headings.

Project Data:
{{ project_data }}
{%- if instruction %}

---
A report has already been generated. Please refine it based on the following instructions. Generate a completely new report that incorporates these changes.
{%- if prior_report %}

Previous Report:
{{ prior_report }}
{%- endif %}

Refinement Instructions: "{{ instruction }}"
{%- endif %}
"#;

/// Task fields shared with the text generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDigest {
    /// Task title.
    pub title: String,
    /// Current status.
    pub status: TaskStatus,
    /// Whether the task carries an image.
    pub has_image: bool,
}

impl From<&Task> for TaskDigest {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            status: task.status(),
            has_image: task.has_image(),
        }
    }
}

/// Project data shared with the text generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDigest {
    /// Project name.
    pub name: String,
    /// Tasks in board order.
    pub tasks: Vec<TaskDigest>,
}

impl From<&Project> for ProjectDigest {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name().to_owned(),
            tasks: project.tasks().iter().map(TaskDigest::from).collect(),
        }
    }
}

/// Builds the prompt for a fresh report.
///
/// # Errors
///
/// Returns [`ReportError::Prompt`] when the digest cannot be encoded or the
/// template fails to render.
pub fn initial_prompt(project: &Project) -> ReportResult<String> {
    render(project, "", "")
}

/// Builds the prompt for a refined report.
///
/// The prompt carries the same project data as [`initial_prompt`], the
/// previous report and the instruction, and asks for a complete new report.
///
/// # Errors
///
/// Returns [`ReportError::EmptyInstruction`] when `instruction` is blank,
/// or [`ReportError::Prompt`] when rendering fails.
pub fn refinement_prompt(
    project: &Project,
    prior_report: &str,
    instruction: &str,
) -> ReportResult<String> {
    let trimmed = instruction.trim();
    if trimmed.is_empty() {
        return Err(ReportError::EmptyInstruction);
    }
    render(project, prior_report.trim(), trimmed)
}

fn render(project: &Project, prior_report: &str, instruction: &str) -> ReportResult<String> {
    let project_data = serde_json::to_string_pretty(&ProjectDigest::from(project))
        .map_err(|err| ReportError::Prompt(err.to_string()))?;
    Environment::new()
        .render_str(
            REPORT_TEMPLATE,
            context! {
                project_data => project_data,
                prior_report => prior_report,
                instruction => instruction,
            },
        )
        .map_err(|err| ReportError::Prompt(err.to_string()))
}
