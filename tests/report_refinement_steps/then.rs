//! Then steps for report refinement BDD scenarios.

use rstest_bdd_macros::then;
use taskboard::report::domain::ReportError;

use super::world::ReportWorld;

#[then("the refinement is rejected as empty")]
fn refinement_rejected(world: &ReportWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing report result"))?;

    if result != &Err(ReportError::EmptyInstruction) {
        return Err(eyre::eyre!("expected EmptyInstruction, got {result:?}"));
    }
    Ok(())
}

#[then("the generator was called {count:usize} times")]
fn generator_called(world: &ReportWorld, count: usize) -> Result<(), eyre::Report> {
    let calls = world.generator.call_count();
    if calls != count {
        return Err(eyre::eyre!("expected {count} generator calls, found {calls}"));
    }
    Ok(())
}

#[then(r#"the report phase is "{phase}""#)]
fn report_phase_is(world: &ReportWorld, phase: String) -> Result<(), eyre::Report> {
    let actual = world.orchestrator.phase();
    if actual.as_str() != phase {
        return Err(eyre::eyre!("expected phase {phase}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the current report is "{report}""#)]
fn current_report_is(world: &ReportWorld, report: String) -> Result<(), eyre::Report> {
    let actual = world.orchestrator.current_report();
    if actual.as_deref() != Some(report.as_str()) {
        return Err(eyre::eyre!("expected report {report:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the report error mentions "{message}""#)]
fn report_error_mentions(world: &ReportWorld, message: String) -> Result<(), eyre::Report> {
    let snapshot = world.orchestrator.snapshot();
    let error = snapshot
        .error
        .ok_or_else(|| eyre::eyre!("no error recorded"))?;
    if !error.contains(&message) {
        return Err(eyre::eyre!("expected error to mention {message:?}, found {error:?}"));
    }
    Ok(())
}
