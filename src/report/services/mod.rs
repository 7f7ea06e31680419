//! Report orchestration services.

mod orchestrator;

pub use orchestrator::ReportOrchestrator;
