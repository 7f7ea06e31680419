//! Report request phases and the observable orchestrator state.

use std::fmt;

/// Lifecycle phase of the report orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportPhase {
    /// No report has been requested yet, or the view was dismissed.
    #[default]
    Idle,
    /// An initial report request is in flight.
    Generating,
    /// A refinement request is in flight.
    Refining,
    /// The last request produced a report.
    Ready,
    /// The last request failed.
    Failed,
}

impl ReportPhase {
    /// Returns the lowercase name of the phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Refining => "refining",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    /// Returns whether a request is outstanding in this phase.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Generating | Self::Refining)
    }

    /// Returns whether `operation` may start from this phase.
    ///
    /// Nothing may start while a request is in flight. Refinement needs a
    /// previous outcome to build on.
    #[must_use]
    pub const fn permits(self, operation: ReportOperation) -> bool {
        match operation {
            ReportOperation::Generate => !self.is_in_flight(),
            ReportOperation::Refine => matches!(self, Self::Ready | Self::Failed),
        }
    }
}

impl fmt::Display for ReportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportOperation {
    /// Produce a fresh report from project data.
    Generate,
    /// Regenerate a report under an additional instruction.
    Refine,
}

impl ReportOperation {
    /// Returns the phase the orchestrator sits in while this request runs.
    #[must_use]
    pub const fn in_flight_phase(self) -> ReportPhase {
        match self {
            Self::Generate => ReportPhase::Generating,
            Self::Refine => ReportPhase::Refining,
        }
    }

    /// Returns the lowercase name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Refine => "refine",
        }
    }
}

impl fmt::Display for ReportOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of the orchestrator for presentation layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSnapshot {
    /// Current phase.
    pub phase: ReportPhase,
    /// Most recent successful report, kept across later failures.
    pub report: Option<String>,
    /// Message of the most recent failure, cleared when a request starts.
    pub error: Option<String>,
}
