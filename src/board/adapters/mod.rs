//! Persistence adapters for the board module.
//!
//! - [`InMemoryKeyValueStore`]: thread-safe in-memory storage with write
//!   instrumentation for tests
//! - [`FileKeyValueStore`]: one JSON file per key inside a data directory

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
