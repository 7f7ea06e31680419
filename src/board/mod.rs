//! Project and task board management.
//!
//! This module owns the authoritative collection of projects and tasks, the
//! status transition rules behind the Kanban board, and the derived
//! dashboard views. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
