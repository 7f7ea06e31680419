//! Command-line front end for the taskboard.
//!
//! Usage:
//!
//! ```text
//! taskboard project list
//! taskboard project add "Launch"
//! taskboard task add "Write copy" --status todo
//! taskboard task move <TASK_ID> in-progress
//! taskboard board
//! taskboard report --refine "Focus on risks" --out reports
//! ```
//!
//! State lives in the directory named by `--data-dir` or
//! `TASKBOARD_DATA_DIR`. The first run starts from the sample projects.

use std::io::{self, Write};
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use mockable::DefaultClock;
use tokio::runtime::Builder;
use tracing::Level;

use taskboard::board::{
    adapters::FileKeyValueStore,
    domain::{NewTask, ProjectId, TaskId, TaskStatus, sample_projects},
    services::{BoardStoreError, DropOutcome, Workspace, board_columns},
};
use taskboard::config::AppConfig;
use taskboard::report::{
    adapters::{GeminiTextGenerator, ReportExporter},
    services::ReportOrchestrator,
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type FileWorkspace = Workspace<FileKeyValueStore, DefaultClock>;

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Projects, Kanban boards and AI status reports")]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Directory holding board state; overrides `TASKBOARD_DATA_DIR`.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage projects and the selection.
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Manage tasks of the selected project.
    #[command(subcommand)]
    Task(TaskCommand),
    /// Show the selected project's Kanban board.
    Board,
    /// Show per-project progress and totals.
    Dashboard,
    /// Generate an AI status report for the selected project.
    Report(ReportArgs),
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    /// List projects, marking the selected one.
    List,
    /// Create a project and select it.
    Add {
        /// Project name.
        name: String,
    },
    /// Delete a project and all of its tasks.
    Delete {
        /// Project identifier.
        id: String,
    },
    /// Select a project, or the dashboard when no id is given.
    Select {
        /// Project identifier.
        id: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task to the selected project.
    Add {
        /// Task title.
        title: String,
        /// Longer description.
        #[arg(long, default_value = "")]
        description: String,
        /// Initial column: todo, in-progress or done.
        #[arg(long, default_value = "todo")]
        status: TaskStatus,
        /// Image data URI to attach.
        #[arg(long)]
        image: Option<String>,
    },
    /// Edit a task's title, description or image.
    Edit {
        /// Task identifier.
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// Image data URI to attach.
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,
        /// Remove the attached image.
        #[arg(long)]
        clear_image: bool,
    },
    /// Move a task to another column.
    Move {
        /// Task identifier.
        id: String,
        /// Target column: todo, in-progress or done.
        status: TaskStatus,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: String,
    },
}

#[derive(Debug, Args)]
struct ReportArgs {
    /// Refinement instruction, applied in order; may be repeated.
    #[arg(long = "refine", value_name = "INSTRUCTION")]
    refinements: Vec<String>,
    /// Directory to save the final report into as Markdown.
    #[arg(long, value_name = "DIR")]
    out: Option<Utf8PathBuf>,
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = data_dir;
    }
    init_tracing(if cli.verbose {
        Level::DEBUG
    } else {
        config.log_level
    })?;

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(run(cli.command, &config))
}

fn init_tracing(level: Level) -> Result<(), BoxError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn run(command: Command, config: &AppConfig) -> Result<(), BoxError> {
    let persistence = Arc::new(FileKeyValueStore::open(&config.data_dir)?);
    let mut workspace = Workspace::open(persistence, Arc::new(DefaultClock), sample_projects())?;
    let mut out = io::stdout().lock();

    match command {
        Command::Project(cmd) => project_command(&mut workspace, cmd, &mut out),
        Command::Task(cmd) => task_command(&mut workspace, cmd, &mut out),
        Command::Board => print_board(&workspace, &mut out),
        Command::Dashboard => print_dashboard(&workspace, &mut out),
        Command::Report(args) => report_command(&workspace, config, args, &mut out).await,
    }
}

fn project_command(
    workspace: &mut FileWorkspace,
    command: ProjectCommand,
    out: &mut impl Write,
) -> Result<(), BoxError> {
    match command {
        ProjectCommand::List => {
            let selected = workspace.selected_project_id();
            for project in workspace.store().list_projects() {
                let marker = if selected == Some(project.id()) { '*' } else { ' ' };
                writeln!(
                    out,
                    "{marker} {}  {} ({} tasks)",
                    project.id(),
                    project.name(),
                    project.tasks().len()
                )?;
            }
        }
        ProjectCommand::Add { name } => {
            let project = workspace.add_project(&name)?;
            writeln!(out, "created {} {}", project.id(), project.name())?;
        }
        ProjectCommand::Delete { id } => {
            workspace.delete_project(&ProjectId::new(id)?)?;
        }
        ProjectCommand::Select { id } => {
            let project_id = id.map(ProjectId::new).transpose()?;
            workspace.select_project(project_id)?;
            match workspace.selected_project() {
                Some(project) => writeln!(out, "selected {} {}", project.id(), project.name())?,
                None => writeln!(out, "showing the dashboard")?,
            }
        }
    }
    Ok(())
}

fn task_command(
    workspace: &mut FileWorkspace,
    command: TaskCommand,
    out: &mut impl Write,
) -> Result<(), BoxError> {
    match command {
        TaskCommand::Add {
            title,
            description,
            status,
            image,
        } => {
            let mut request = NewTask::new(title, status).with_description(description);
            if let Some(image_url) = image {
                request = request.with_image(image_url);
            }
            let task = workspace.add_task(request)?;
            writeln!(out, "added {} to {}", task.id(), task.status().title())?;
        }
        TaskCommand::Edit {
            id,
            title,
            description,
            image,
            clear_image,
        } => {
            let task_id = TaskId::new(id)?;
            let mut task = workspace
                .selected_project()
                .ok_or(BoardStoreError::NoProjectSelected)?
                .task(&task_id)
                .cloned()
                .ok_or_else(|| format!("task {task_id} not found in the selected project"))?;
            if let Some(new_title) = title {
                task = task.with_title(new_title)?;
            }
            if let Some(new_description) = description {
                task = task.with_description(new_description);
            }
            if let Some(image_url) = image {
                task = task.with_image(image_url);
            } else if clear_image {
                task = task.without_image();
            }
            workspace.update_task(task)?;
            writeln!(out, "updated {task_id}")?;
        }
        TaskCommand::Move { id, status } => {
            workspace.begin_drag(TaskId::new(id)?);
            match workspace.drop_on(status)? {
                DropOutcome::Moved { task_id, from, to } => {
                    writeln!(out, "moved {task_id}: {} -> {}", from.title(), to.title())?;
                }
                DropOutcome::SameColumn(task_id) => {
                    writeln!(out, "{task_id} is already in {}", status.title())?;
                }
                DropOutcome::TaskMissing(task_id) => {
                    return Err(format!("task {task_id} not found in the selected project").into());
                }
                DropOutcome::NoDrag => writeln!(out, "nothing to move")?,
            }
        }
        TaskCommand::Delete { id } => {
            workspace.delete_task(&TaskId::new(id)?)?;
        }
    }
    Ok(())
}

fn print_board(workspace: &FileWorkspace, out: &mut impl Write) -> Result<(), BoxError> {
    let project = workspace
        .selected_project()
        .ok_or(BoardStoreError::NoProjectSelected)?;
    writeln!(out, "{} ({})", project.name(), project.id())?;
    for view in board_columns(project) {
        writeln!(out, "\n== {} ({}) ==", view.column.title, view.tasks.len())?;
        for task in view.tasks {
            let image = if task.has_image() { " [image]" } else { "" };
            writeln!(out, "  {}  {}{image}", task.id(), task.title())?;
            if !task.description().is_empty() {
                writeln!(out, "      {}", task.description())?;
            }
        }
    }
    Ok(())
}

fn print_dashboard(workspace: &FileWorkspace, out: &mut impl Write) -> Result<(), BoxError> {
    let dashboard = workspace.store().dashboard();
    writeln!(
        out,
        "{:<28} {:>6} {:>12} {:>6} {:>6}",
        "Project", "To Do", "In Progress", "Done", "%"
    )?;
    for summary in &dashboard.projects {
        let counts = summary.counts;
        writeln!(
            out,
            "{:<28} {:>6} {:>12} {:>6} {:>5}%",
            summary.name,
            counts.todo,
            counts.in_progress,
            counts.done,
            counts.percent_complete()
        )?;
    }
    let totals = dashboard.totals;
    writeln!(
        out,
        "{:<28} {:>6} {:>12} {:>6} {:>5}%",
        "Total",
        totals.todo,
        totals.in_progress,
        totals.done,
        totals.percent_complete()
    )?;
    Ok(())
}

async fn report_command(
    workspace: &FileWorkspace,
    config: &AppConfig,
    args: ReportArgs,
    out: &mut impl Write,
) -> Result<(), BoxError> {
    let project = workspace
        .selected_project()
        .ok_or(BoardStoreError::NoProjectSelected)?;
    let generator = GeminiTextGenerator::new(config.require_gemini()?.clone())?;
    let orchestrator = ReportOrchestrator::new(Arc::new(generator));

    let mut report = orchestrator.generate(project).await?;
    for instruction in &args.refinements {
        report = orchestrator.refine(project, &report, instruction).await?;
    }
    writeln!(out, "{report}")?;

    if let Some(dir) = args.out {
        let path = ReportExporter::open(&dir)?.export(project.name(), &report)?;
        writeln!(out, "\nsaved {path}")?;
    }
    Ok(())
}
