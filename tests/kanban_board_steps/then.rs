//! Then steps for Kanban board BDD scenarios.

use rstest_bdd_macros::then;
use taskboard::board::{domain::StatusCounts, services::DropOutcome};

use super::world::KanbanWorld;

#[then("the project counts are {todo:u32} to do, {in_progress:u32} in progress and {done:u32} done")]
fn project_counts_are(
    world: &KanbanWorld,
    todo: u32,
    in_progress: u32,
    done: u32,
) -> Result<(), eyre::Report> {
    let workspace = world
        .workspace
        .as_ref()
        .ok_or_else(|| eyre::eyre!("workspace not opened in scenario world"))?;
    let project_id = workspace
        .selected_project_id()
        .ok_or_else(|| eyre::eyre!("no project selected"))?;
    let expected = StatusCounts {
        todo,
        in_progress,
        done,
    };
    let actual = workspace.store().project_stats(project_id);

    if actual != Some(expected) {
        return Err(eyre::eyre!("expected counts {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the drop is ignored because the column did not change")]
fn drop_is_ignored(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drop outcome"))?;

    if !matches!(outcome, DropOutcome::SameColumn(_)) {
        return Err(eyre::eyre!("expected SameColumn outcome, got {outcome:?}"));
    }
    Ok(())
}

#[then("nothing was written since the task was added")]
fn nothing_written(world: &KanbanWorld) -> Result<(), eyre::Report> {
    let writes = world.persistence.write_count();
    if writes != world.writes_after_setup {
        return Err(eyre::eyre!(
            "expected {} writes, found {writes}",
            world.writes_after_setup
        ));
    }
    Ok(())
}
