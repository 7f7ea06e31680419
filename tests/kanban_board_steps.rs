//! Behaviour tests for moving tasks between Kanban columns.

#[path = "kanban_board_steps/mod.rs"]
mod kanban_board_steps_defs;

use kanban_board_steps_defs::world::{KanbanWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/kanban_board.feature",
    name = "Move a task across every column"
)]
fn move_task_across_every_column(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/kanban_board.feature",
    name = "Move a finished task back to the first column"
)]
fn move_finished_task_back(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/kanban_board.feature",
    name = "Drop onto the current column is ignored"
)]
fn drop_onto_current_column_is_ignored(world: KanbanWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/kanban_board.feature",
    name = "Deleting a task twice is harmless"
)]
fn deleting_a_task_twice_is_harmless(world: KanbanWorld) {
    let _ = world;
}
