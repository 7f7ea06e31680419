//! Given steps for Kanban board BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskboard::board::{domain::NewTask, services::Workspace};

use super::world::{KanbanWorld, column};

#[given(r#"an empty board with a project named "{name}""#)]
fn empty_board_with_project(world: &mut KanbanWorld, name: String) -> Result<(), eyre::Report> {
    let mut workspace = Workspace::open(
        Arc::clone(&world.persistence),
        Arc::new(DefaultClock),
        Vec::new(),
    )
    .wrap_err("open empty workspace")?;
    workspace
        .add_project(&name)
        .wrap_err("add project in scenario setup")?;
    world.workspace = Some(workspace);
    Ok(())
}

#[given(r#"a task "{title}" in the "{status}" column"#)]
fn task_in_column(
    world: &mut KanbanWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = column(&status)?;
    let task = world
        .workspace_mut()?
        .add_task(NewTask::new(title, target))
        .wrap_err("add task in scenario setup")?;
    world.task = Some(task);
    world.writes_after_setup = world.persistence.write_count();
    Ok(())
}
