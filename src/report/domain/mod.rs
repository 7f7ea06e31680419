//! Domain model for report generation.

mod error;
mod export;
mod phase;
mod prompt;

pub use error::{ReportError, ReportResult};
pub use export::report_file_name;
pub use phase::{ReportOperation, ReportPhase, ReportSnapshot};
pub use prompt::{ProjectDigest, TaskDigest, initial_prompt, refinement_prompt};
