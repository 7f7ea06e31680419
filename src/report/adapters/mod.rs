//! Adapters for the report module.
//!
//! - [`GeminiTextGenerator`]: Gemini `generateContent` over HTTPS
//! - [`ScriptedTextGenerator`]: queued in-memory responses for tests and
//!   offline use
//! - [`ReportExporter`]: writes finished reports as Markdown files

mod export;
mod gemini;
mod scripted;

pub use export::{ReportExportError, ReportExporter};
pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiConfig, GeminiTextGenerator};
pub use scripted::ScriptedTextGenerator;

#[cfg(test)]
pub(crate) use gemini::{GenerateResponse, rejected_body};
