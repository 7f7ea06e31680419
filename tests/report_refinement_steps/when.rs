//! When steps for report refinement BDD scenarios.

use rstest_bdd_macros::when;

use super::world::{ReportWorld, run_async};

#[when("a report is generated")]
fn generate_report(world: &mut ReportWorld) -> Result<(), eyre::Report> {
    let result = run_async(world.orchestrator.generate(world.project()?));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the report is refined with "{instruction}""#)]
fn refine_report(world: &mut ReportWorld, instruction: String) -> Result<(), eyre::Report> {
    refine_with(world, &instruction)
}

#[when("the report is refined with a blank instruction")]
fn refine_with_blank(world: &mut ReportWorld) -> Result<(), eyre::Report> {
    refine_with(world, "   ")
}

fn refine_with(world: &mut ReportWorld, instruction: &str) -> Result<(), eyre::Report> {
    let prior = world.orchestrator.current_report().unwrap_or_default();
    let result = run_async(
        world
            .orchestrator
            .refine(world.project()?, &prior, instruction),
    );
    world.last_result = Some(result);
    Ok(())
}
