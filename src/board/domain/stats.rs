//! Derived board statistics for per-project cards and the dashboard.

use super::{Project, ProjectId, TaskStatus};
use std::iter::Sum;
use std::ops::Add;

/// Number of tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatusCounts {
    /// Tasks in [`TaskStatus::ToDo`].
    pub todo: u32,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: u32,
    /// Tasks in [`TaskStatus::Done`].
    pub done: u32,
}

impl StatusCounts {
    /// Returns the count for one status.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> u32 {
        match status {
            TaskStatus::ToDo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }

    /// Returns the total number of tasks.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.todo
            .saturating_add(self.in_progress)
            .saturating_add(self.done)
    }

    /// Returns the fraction of tasks in `status`, between 0 and 1.
    ///
    /// An empty set of tasks yields 0.
    #[must_use]
    pub fn share(&self, status: TaskStatus) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.get(status)) / f64::from(total)
    }

    /// Returns the rounded percentage of finished tasks; 0 when there are no
    /// tasks.
    #[must_use]
    pub fn percent_complete(&self) -> u32 {
        let total = u64::from(self.total());
        if total == 0 {
            return 0;
        }
        // Integer form of round(done * 100 / total), halves rounding up.
        let scaled = u64::from(self.done) * 200 + total;
        let percent = scaled.checked_div(total * 2).unwrap_or_default();
        u32::try_from(percent).unwrap_or(100)
    }

    fn record(&mut self, status: TaskStatus) {
        let slot = match status {
            TaskStatus::ToDo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        };
        *slot = slot.saturating_add(1);
    }
}

impl Add for StatusCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            todo: self.todo.saturating_add(rhs.todo),
            in_progress: self.in_progress.saturating_add(rhs.in_progress),
            done: self.done.saturating_add(rhs.done),
        }
    }
}

impl Sum for StatusCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl FromIterator<TaskStatus> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = TaskStatus>>(iter: I) -> Self {
        let mut counts = Self::default();
        for status in iter {
            counts.record(status);
        }
        counts
    }
}

/// Summary card data for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Per-status task counts.
    pub counts: StatusCounts,
}

impl ProjectSummary {
    /// Summarizes a project.
    #[must_use]
    pub fn of(project: &Project) -> Self {
        Self {
            project_id: project.id().clone(),
            name: project.name().to_owned(),
            counts: project.status_counts(),
        }
    }
}

/// Cross-project dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    /// One summary per project, in collection order.
    pub projects: Vec<ProjectSummary>,
    /// Aggregate counts across every project.
    pub totals: StatusCounts,
}

impl DashboardSummary {
    /// Builds the dashboard from a project collection.
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        let summaries: Vec<ProjectSummary> = projects.iter().map(ProjectSummary::of).collect();
        let totals = summaries.iter().map(|summary| summary.counts).sum();
        Self {
            projects: summaries,
            totals,
        }
    }
}
