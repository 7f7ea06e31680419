//! Step definitions for report refinement scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
