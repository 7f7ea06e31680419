//! Shared world state for report refinement BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::domain::Project;
use taskboard::report::{
    adapters::ScriptedTextGenerator, domain::ReportResult, services::ReportOrchestrator,
};

/// Scenario world for report behaviour tests.
pub struct ReportWorld {
    pub generator: Arc<ScriptedTextGenerator>,
    pub orchestrator: ReportOrchestrator<ScriptedTextGenerator>,
    pub project: Option<Project>,
    pub last_result: Option<ReportResult<String>>,
}

impl ReportWorld {
    /// Creates a world with an empty response script.
    #[must_use]
    pub fn new() -> Self {
        let generator = Arc::new(ScriptedTextGenerator::new());
        Self {
            orchestrator: ReportOrchestrator::new(Arc::clone(&generator)),
            generator,
            project: None,
            last_result: None,
        }
    }

    /// Returns the project the scenario reports on.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }
}

impl Default for ReportWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReportWorld {
    ReportWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
