//! Taskboard: projects, Kanban boards and AI status reports.
//!
//! This crate keeps an ordered collection of projects and their tasks,
//! moves tasks through the To Do, In Progress and Done workflow, derives
//! dashboard statistics, and orchestrates AI-generated status reports.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, HTTP, memory)
//!
//! # Modules
//!
//! - [`board`]: Project and task store, Kanban transitions and dashboards
//! - [`report`]: Report prompts and the generate/refine lifecycle
//! - [`config`]: Environment-driven settings for the binary

pub mod board;
pub mod config;
pub mod report;
