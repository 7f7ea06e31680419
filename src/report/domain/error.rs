//! Errors raised by report orchestration.

use super::{ReportOperation, ReportPhase};
use thiserror::Error;

/// Errors returned by report requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The refinement instruction is empty after trimming.
    #[error("refinement instruction must not be empty")]
    EmptyInstruction,

    /// Another request is still outstanding.
    #[error("a report request is already {0}")]
    RequestInFlight(ReportPhase),

    /// The operation cannot start from the current phase.
    #[error("cannot {operation} a report while {phase}")]
    InvalidPhase {
        /// Phase the orchestrator was in.
        phase: ReportPhase,
        /// Rejected operation.
        operation: ReportOperation,
    },

    /// The text generation collaborator failed or returned no text.
    #[error("failed to generate report: {0}")]
    Generation(String),

    /// The prompt could not be rendered.
    #[error("failed to build report prompt: {0}")]
    Prompt(String),
}

impl ReportError {
    /// Returns whether the user can retry the request as is.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Generation(_))
    }
}

/// Result type for report requests.
pub type ReportResult<T> = Result<T, ReportError>;
