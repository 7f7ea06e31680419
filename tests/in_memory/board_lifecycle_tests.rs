//! In-memory integration tests for board lifecycle operations.

use std::sync::Arc;

use eyre::ensure;
use rstest::rstest;
use taskboard::board::{
    adapters::InMemoryKeyValueStore,
    domain::{NewTask, StatusCounts, TaskStatus},
    ports::{KeyValueStore, PROJECTS_KEY, SELECTED_PROJECT_KEY},
    services::{BoardStoreError, DropOutcome, board_columns},
};

use super::helpers::{open_workspace, persistence, project_id};

#[rstest]
fn launch_project_walks_the_whole_workflow(
    persistence: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let mut workspace = open_workspace(&persistence);
    let launch = workspace.add_project("Launch")?;

    let task = workspace.add_task(NewTask::new("Write copy", TaskStatus::ToDo))?;
    ensure!(task.status() == TaskStatus::ToDo);

    for column in [TaskStatus::InProgress, TaskStatus::Done] {
        workspace.begin_drag(task.id().clone());
        let outcome = workspace.drop_on(column)?;
        ensure!(matches!(outcome, DropOutcome::Moved { to, .. } if to == column));
    }

    let stats = workspace.store().project_stats(launch.id());
    ensure!(
        stats
            == Some(StatusCounts {
                todo: 0,
                in_progress: 0,
                done: 1,
            })
    );
    ensure!(stats.map(|counts| counts.percent_complete()) == Some(100));
    Ok(())
}

#[rstest]
fn state_survives_reopening(persistence: Arc<InMemoryKeyValueStore>) -> eyre::Result<()> {
    let mut workspace = open_workspace(&persistence);
    let launch = workspace.add_project("Launch")?;
    workspace.add_task(
        NewTask::new("Hero banner", TaskStatus::InProgress)
            .with_description("Above the fold")
            .with_image("data:image/png;base64,iVBORw0KGgoAAAANSUhEUg=="),
    )?;
    workspace.add_task(NewTask::new("Press kit", TaskStatus::ToDo))?;

    let reopened = open_workspace(&persistence);

    ensure!(reopened.store().list_projects() == workspace.store().list_projects());
    ensure!(reopened.selected_project_id() == Some(launch.id()));
    ensure!(persistence.get(PROJECTS_KEY)?.is_some());
    ensure!(persistence.get(SELECTED_PROJECT_KEY)?.is_some());
    Ok(())
}

#[rstest]
fn board_and_dashboard_reflect_sample_data(persistence: Arc<InMemoryKeyValueStore>) {
    let workspace = open_workspace(&persistence);
    let website = workspace.selected_project().expect("sample project selected");

    let column_sizes: Vec<(TaskStatus, usize)> = board_columns(website)
        .iter()
        .map(|view| (view.column.status, view.tasks.len()))
        .collect();
    let dashboard = workspace.store().dashboard();

    assert_eq!(
        column_sizes,
        vec![
            (TaskStatus::ToDo, 2),
            (TaskStatus::InProgress, 1),
            (TaskStatus::Done, 1),
        ]
    );
    assert_eq!(dashboard.projects.len(), 2);
    assert_eq!(
        dashboard.totals,
        StatusCounts {
            todo: 3,
            in_progress: 2,
            done: 1,
        }
    );
}

#[rstest]
fn rejected_edits_leave_storage_untouched(persistence: Arc<InMemoryKeyValueStore>) {
    let mut workspace = open_workspace(&persistence);
    let website = workspace
        .selected_project()
        .cloned()
        .expect("sample project selected");
    let task = website.tasks().first().cloned().expect("sample task");

    let blank_project = workspace.add_project("  ");
    let blank_task = workspace.add_task(NewTask::new("", TaskStatus::Done));
    let blank_rename = task.with_title("   ");

    assert!(blank_project.is_err_and(|err| err.is_validation()));
    assert!(blank_task.is_err_and(|err| err.is_validation()));
    assert!(blank_rename.is_err());
    assert_eq!(persistence.write_count(), 0);
    assert_eq!(workspace.store().list_projects().len(), 2);
}

#[rstest]
fn unknown_references_surface_not_found(persistence: Arc<InMemoryKeyValueStore>) {
    let mut workspace = open_workspace(&persistence);
    let website = workspace
        .selected_project()
        .cloned()
        .expect("sample project selected");
    let task = website.tasks().first().cloned().expect("sample task");
    let mobile = project_id("proj-2");

    workspace
        .select_project(Some(mobile.clone()))
        .expect("project selected");
    let update = workspace.update_task(task.clone().with_status(TaskStatus::ToDo));
    let delete = workspace.delete_task(task.id());

    assert!(matches!(
        update,
        Err(BoardStoreError::TaskNotFound { project_id: ref owner, .. }) if *owner == mobile
    ));
    assert!(delete.is_ok());
    assert!(
        workspace
            .store()
            .project(website.id())
            .is_some_and(|project| project.task(task.id()).is_some())
    );
}

#[rstest]
fn deleting_a_project_removes_its_tasks_everywhere(
    persistence: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let mut workspace = open_workspace(&persistence);
    let website = project_id("proj-1");

    workspace.delete_project(&website)?;
    workspace.delete_project(&website)?;

    let dashboard = workspace.store().dashboard();
    ensure!(dashboard.projects.len() == 1);
    ensure!(
        dashboard.totals
            == StatusCounts {
                todo: 1,
                in_progress: 1,
                done: 0,
            }
    );
    ensure!(workspace.selected_project_id() == Some(&project_id("proj-2")));
    Ok(())
}
