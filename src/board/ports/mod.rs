//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod persistence;

pub use persistence::{
    KeyValueStore, KeyValueStoreExt, PROJECTS_KEY, PersistenceError, PersistenceResult,
    SELECTED_PROJECT_KEY,
};
