//! Application services for board state management.

mod kanban;
mod store;
mod workspace;

pub use kanban::{ColumnView, DropOutcome, KanbanController, board_columns};
pub use store::{BoardStore, BoardStoreError, BoardStoreResult, TransitionOutcome};
pub use workspace::Workspace;
