//! AI-generated project status reports.
//!
//! This module turns a project snapshot into a prompt, hands it to a text
//! generation collaborator and tracks the generate/refine request lifecycle.
//!
//! - Domain types in [`domain`]: phases, errors, prompt rendering and file
//!   naming
//! - Port contracts in [`ports`]: the [`ports::TextGenerator`] collaborator
//! - Adapter implementations in [`adapters`]: Gemini, scripted responses and
//!   report export
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
