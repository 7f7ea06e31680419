//! When steps for Kanban board BDD scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::when;

use super::world::{KanbanWorld, column};

#[when(r#"the task is dragged to the "{status}" column"#)]
fn drag_task(world: &mut KanbanWorld, status: String) -> Result<(), eyre::Report> {
    let target = column(&status)?;
    let task_id = world.task()?.id().clone();
    let workspace = world.workspace_mut()?;
    workspace.begin_drag(task_id);
    let outcome = workspace.drop_on(target).wrap_err("drop task")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the task is deleted twice")]
fn delete_task_twice(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id().clone();
    let workspace = world.workspace_mut()?;
    workspace.delete_task(&task_id).wrap_err("first delete")?;
    workspace.delete_task(&task_id).wrap_err("second delete")?;
    Ok(())
}
