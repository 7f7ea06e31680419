//! In-memory integration tests for report generation and refinement.

use std::sync::Arc;

use eyre::ensure;
use rstest::rstest;
use taskboard::board::{
    adapters::InMemoryKeyValueStore,
    domain::{NewTask, Project, TaskStatus},
};
use taskboard::report::{
    adapters::ScriptedTextGenerator,
    domain::{ReportError, ReportPhase},
    ports::TextGenerationError,
    services::ReportOrchestrator,
};

use super::helpers::{open_workspace, persistence, website};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn generate_then_blank_refine_makes_one_call(website: Project) -> eyre::Result<()> {
    let generator = Arc::new(ScriptedTextGenerator::with_responses([Ok("OK".to_owned())]));
    let orchestrator = ReportOrchestrator::new(Arc::clone(&generator));

    let report = orchestrator.generate(&website).await?;
    let refined = orchestrator.refine(&website, &report, "").await;

    ensure!(report == "OK");
    ensure!(refined == Err(ReportError::EmptyInstruction));
    ensure!(generator.call_count() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn transport_failure_keeps_ready_report(website: Project) -> eyre::Result<()> {
    let generator = Arc::new(ScriptedTextGenerator::with_responses([
        Ok("# Website Redesign\nOn track.".to_owned()),
        Err(TextGenerationError::transport(std::io::Error::other(
            "dns lookup failed",
        ))),
    ]));
    let orchestrator = ReportOrchestrator::new(Arc::clone(&generator));
    orchestrator.generate(&website).await?;

    let failed = orchestrator.generate(&website).await;

    let snapshot = orchestrator.snapshot();
    ensure!(matches!(failed, Err(ReportError::Generation(_))));
    ensure!(snapshot.phase == ReportPhase::Failed);
    ensure!(snapshot.report.as_deref() == Some("# Website Redesign\nOn track."));
    ensure!(
        snapshot
            .error
            .as_deref()
            .is_some_and(|error| error.contains("dns lookup failed"))
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_reflects_latest_board_edits(
    persistence: Arc<InMemoryKeyValueStore>,
) -> eyre::Result<()> {
    let mut workspace = open_workspace(&persistence);
    let generator = Arc::new(ScriptedTextGenerator::with_responses([
        Ok("first".to_owned()),
        Ok("second".to_owned()),
    ]));
    let orchestrator = ReportOrchestrator::new(Arc::clone(&generator));
    let before = workspace
        .selected_project()
        .cloned()
        .ok_or_else(|| eyre::eyre!("no project selected"))?;
    let first = orchestrator.generate(&before).await?;

    workspace.add_task(NewTask::new("Accessibility audit", TaskStatus::ToDo))?;
    let after = workspace
        .selected_project()
        .cloned()
        .ok_or_else(|| eyre::eyre!("no project selected"))?;
    orchestrator
        .refine(&after, &first, "Call out accessibility work")
        .await?;

    let prompts = generator.prompts();
    ensure!(prompts.len() == 2);
    ensure!(prompts.first().is_some_and(|p| !p.contains("Accessibility audit")));
    ensure!(prompts.get(1).is_some_and(|p| {
        p.contains("Accessibility audit")
            && p.contains("Call out accessibility work")
            && p.contains("Previous Report:\nfirst")
    }));
    ensure!(orchestrator.current_report().as_deref() == Some("second"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dismiss_resets_the_view(website: Project) -> eyre::Result<()> {
    let generator = Arc::new(ScriptedTextGenerator::with_responses([Ok("OK".to_owned())]));
    let orchestrator = ReportOrchestrator::new(generator);
    orchestrator.generate(&website).await?;

    orchestrator.dismiss();

    ensure!(orchestrator.phase() == ReportPhase::Idle);
    ensure!(orchestrator.current_report().is_none());
    let refine = orchestrator.refine(&website, "OK", "Shorter").await;
    ensure!(matches!(refine, Err(ReportError::InvalidPhase { .. })));
    Ok(())
}
