//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::InMemoryKeyValueStore,
    domain::{Project, ProjectId, sample_projects},
    services::Workspace,
};

/// Workspace type used across in-memory tests.
pub type TestWorkspace = Workspace<InMemoryKeyValueStore, DefaultClock>;

/// Provides fresh shared persistence for each test.
#[fixture]
pub fn persistence() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Opens a workspace over `persistence`, seeded with the sample projects.
///
/// # Panics
///
/// Panics if the workspace cannot be opened.
#[must_use]
pub fn open_workspace(persistence: &Arc<InMemoryKeyValueStore>) -> TestWorkspace {
    Workspace::open(
        Arc::clone(persistence),
        Arc::new(DefaultClock),
        sample_projects(),
    )
    .expect("workspace opens")
}

/// Returns the first sample project, "Website Redesign".
///
/// # Panics
///
/// Panics if the sample data is empty.
#[fixture]
pub fn website() -> Project {
    sample_projects()
        .into_iter()
        .next()
        .expect("sample project present")
}

/// Parses a project identifier.
///
/// # Panics
///
/// Panics if `value` is blank.
#[must_use]
pub fn project_id(value: &str) -> ProjectId {
    ProjectId::new(value).expect("valid project id")
}
