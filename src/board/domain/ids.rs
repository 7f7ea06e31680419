//! Identifier types for the board domain.

use super::BoardDomainError;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a project within the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    const PREFIX: &'static str = "proj";

    /// Generates a fresh project identifier.
    ///
    /// The identifier combines the clock's current Unix time in milliseconds
    /// with random bits, so two projects created within the same tick still
    /// receive distinct identifiers.
    #[must_use]
    pub fn generate(clock: &impl Clock) -> Self {
        Self(generate_id(Self::PREFIX, clock))
    }

    /// Wraps an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyIdentifier`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        validated(value.into()).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a task, unique within its owning project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    const PREFIX: &'static str = "task";

    /// Generates a fresh task identifier.
    #[must_use]
    pub fn generate(clock: &impl Clock) -> Self {
        Self(generate_id(Self::PREFIX, clock))
    }

    /// Wraps an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyIdentifier`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        validated(value.into()).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validated(raw: String) -> Result<String, BoardDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyIdentifier);
    }
    if trimmed.len() == raw.len() {
        return Ok(raw);
    }
    Ok(trimmed.to_owned())
}

fn generate_id(prefix: &str, clock: &impl Clock) -> String {
    let millis = clock.utc().timestamp_millis();
    let (random, ..) = Uuid::new_v4().as_fields();
    format!("{prefix}-{millis}-{random:08x}")
}
