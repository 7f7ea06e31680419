//! Demonstration board used when no projects have been stored yet.

use super::{Project, ProjectId, Task, TaskId, TaskStatus};

const HOMEPAGE_IMAGE: &str = "https://images.unsplash.com/photo-1541462608143-67571c6738dd?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

struct SampleTask {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    image_url: Option<&'static str>,
}

struct SampleProject {
    id: &'static str,
    name: &'static str,
    tasks: &'static [SampleTask],
}

const SAMPLES: &[SampleProject] = &[
    SampleProject {
        id: "proj-1",
        name: "Website Redesign",
        tasks: &[
            SampleTask {
                id: "task-1",
                title: "Design new homepage",
                description: "Create mockups in Figma.",
                status: TaskStatus::Done,
                image_url: Some(HOMEPAGE_IMAGE),
            },
            SampleTask {
                id: "task-2",
                title: "Develop homepage components",
                description: "Use React and Tailwind.",
                status: TaskStatus::InProgress,
                image_url: None,
            },
            SampleTask {
                id: "task-3",
                title: "Setup CI/CD pipeline",
                description: "Use GitHub Actions.",
                status: TaskStatus::ToDo,
                image_url: None,
            },
            SampleTask {
                id: "task-4",
                title: "Write user documentation",
                description: "For all new components.",
                status: TaskStatus::ToDo,
                image_url: None,
            },
        ],
    },
    SampleProject {
        id: "proj-2",
        name: "Mobile App Launch",
        tasks: &[
            SampleTask {
                id: "task-5",
                title: "Plan marketing campaign",
                description: "",
                status: TaskStatus::InProgress,
                image_url: None,
            },
            SampleTask {
                id: "task-6",
                title: "Finalize app store screenshots",
                description: "",
                status: TaskStatus::ToDo,
                image_url: None,
            },
        ],
    },
];

/// Returns the two demonstration projects shown on first start.
///
/// Samples that fail validation are skipped, so the result is always a
/// well-formed collection.
#[must_use]
pub fn sample_projects() -> Vec<Project> {
    SAMPLES.iter().filter_map(build_project).collect()
}

fn build_project(sample: &SampleProject) -> Option<Project> {
    let id = ProjectId::new(sample.id).ok()?;
    sample
        .tasks
        .iter()
        .try_fold(Project::new(id, sample.name).ok()?, |project, task| {
            project.with_task(build_task(task)?).ok()
        })
}

fn build_task(sample: &SampleTask) -> Option<Task> {
    let id = TaskId::new(sample.id).ok()?;
    let task = Task::new(id, sample.title, sample.description, sample.status).ok()?;
    Some(
        sample
            .image_url
            .into_iter()
            .fold(task, |task_without_image, image_url| {
                task_without_image.with_image(image_url)
            }),
    )
}
