//! Port contracts for report generation.

pub mod generator;

#[cfg(test)]
pub use generator::MockTextGenerator;
pub use generator::{TextGenerationError, TextGenerationResult, TextGenerator};
