//! Shared world state for Kanban board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::InMemoryKeyValueStore,
    domain::{Task, TaskStatus},
    services::{DropOutcome, Workspace},
};

/// Workspace type used by the BDD world.
pub type TestWorkspace = Workspace<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for Kanban behaviour tests.
pub struct KanbanWorld {
    pub persistence: Arc<InMemoryKeyValueStore>,
    pub workspace: Option<TestWorkspace>,
    pub task: Option<Task>,
    pub writes_after_setup: usize,
    pub last_outcome: Option<DropOutcome>,
}

impl KanbanWorld {
    /// Creates a world with fresh persistence and no open workspace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            persistence: Arc::new(InMemoryKeyValueStore::new()),
            workspace: None,
            task: None,
            writes_after_setup: 0,
            last_outcome: None,
        }
    }

    /// Returns the open workspace.
    pub fn workspace_mut(&mut self) -> Result<&mut TestWorkspace, eyre::Report> {
        self.workspace
            .as_mut()
            .ok_or_else(|| eyre::eyre!("workspace not opened in scenario world"))
    }

    /// Returns the task created by the scenario.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Parses a column name used in feature files.
pub fn column(name: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(name).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
