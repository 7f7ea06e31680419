//! Given steps for report refinement BDD scenarios.

use rstest_bdd_macros::given;
use taskboard::board::domain::sample_projects;
use taskboard::report::ports::TextGenerationError;

use super::world::ReportWorld;

#[given(r#"the sample project "{name}""#)]
fn sample_project(world: &mut ReportWorld, name: String) -> Result<(), eyre::Report> {
    let project = sample_projects()
        .into_iter()
        .find(|project| project.name() == name)
        .ok_or_else(|| eyre::eyre!("no sample project named {name}"))?;
    world.project = Some(project);
    Ok(())
}

#[given(r#"the generator will answer "{text}""#)]
fn generator_answers(world: &mut ReportWorld, text: String) {
    world.generator.push_text(text);
}

#[given(r#"the generator will fail with "{message}""#)]
fn generator_fails(world: &mut ReportWorld, message: String) {
    world
        .generator
        .push_error(TextGenerationError::Service(message));
}
