//! Generate and refine lifecycle for project reports.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use crate::board::domain::Project;
use crate::report::{
    domain::{
        ReportError, ReportOperation, ReportPhase, ReportResult, ReportSnapshot, initial_prompt,
        refinement_prompt,
    },
    ports::{TextGenerationError, TextGenerationResult, TextGenerator},
};

#[derive(Debug, Default)]
struct OrchestratorState {
    phase: ReportPhase,
    report: Option<String>,
    error: Option<String>,
    epoch: u64,
}

/// Drives report requests through [`ReportPhase`].
///
/// At most one request is outstanding at a time; a second call while one is
/// in flight is rejected with [`ReportError::RequestInFlight`]. State lives
/// behind a mutex that is released before awaiting the generator, so the
/// phase can be observed while a request runs.
///
/// [`ReportOrchestrator::dismiss`] starts a new epoch. A request begun in an
/// earlier epoch still resolves for its caller but never writes its outcome
/// into the orchestrator state.
pub struct ReportOrchestrator<G>
where
    G: TextGenerator + ?Sized,
{
    generator: Arc<G>,
    state: Mutex<OrchestratorState>,
}

impl<G> ReportOrchestrator<G>
where
    G: TextGenerator + ?Sized,
{
    /// Creates an idle orchestrator.
    #[must_use]
    pub fn new(generator: Arc<G>) -> Self {
        Self {
            generator,
            state: Mutex::new(OrchestratorState::default()),
        }
    }

    /// Returns the current phase, report and error.
    #[must_use]
    pub fn snapshot(&self) -> ReportSnapshot {
        let state = self.lock();
        ReportSnapshot {
            phase: state.phase,
            report: state.report.clone(),
            error: state.error.clone(),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> ReportPhase {
        self.lock().phase
    }

    /// Returns the most recent successful report.
    #[must_use]
    pub fn current_report(&self) -> Option<String> {
        self.lock().report.clone()
    }

    /// Generates a fresh report for `project`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::RequestInFlight`] while another request runs,
    /// [`ReportError::Prompt`] when the prompt cannot be built, or
    /// [`ReportError::Generation`] when the collaborator fails or returns no
    /// text.
    pub async fn generate(&self, project: &Project) -> ReportResult<String> {
        let prompt = initial_prompt(project)?;
        self.run(ReportOperation::Generate, project, &prompt).await
    }

    /// Regenerates the report for `project` under `instruction`.
    ///
    /// `prior_report` is the report being refined; it is usually the value
    /// of [`ReportOrchestrator::current_report`]. A blank instruction fails
    /// before anything else happens.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyInstruction`] for a blank instruction,
    /// [`ReportError::InvalidPhase`] when there is no previous outcome to
    /// refine, [`ReportError::RequestInFlight`] while another request runs,
    /// or [`ReportError::Generation`] when the collaborator fails.
    pub async fn refine(
        &self,
        project: &Project,
        prior_report: &str,
        instruction: &str,
    ) -> ReportResult<String> {
        let prompt = refinement_prompt(project, prior_report, instruction)?;
        self.run(ReportOperation::Refine, project, &prompt).await
    }

    /// Resets the view state to [`ReportPhase::Idle`].
    ///
    /// Any outstanding request keeps running, but its outcome is discarded.
    pub fn dismiss(&self) {
        let mut state = self.lock();
        state.epoch = state.epoch.wrapping_add(1);
        state.phase = ReportPhase::Idle;
        state.report = None;
        state.error = None;
        debug!(epoch = state.epoch, "report view dismissed");
    }

    async fn run(
        &self,
        operation: ReportOperation,
        project: &Project,
        prompt: &str,
    ) -> ReportResult<String> {
        let mut request = self.begin(operation)?;
        debug!(%operation, project_id = %project.id(), "report request started");
        let outcome = self.generator.generate_text(prompt).await;
        request.settled = true;
        self.finish(request.epoch, operation, outcome)
    }

    fn begin(&self, operation: ReportOperation) -> ReportResult<InFlight<'_, G>> {
        let mut state = self.lock();
        if state.phase.is_in_flight() {
            return Err(ReportError::RequestInFlight(state.phase));
        }
        if !state.phase.permits(operation) {
            return Err(ReportError::InvalidPhase {
                phase: state.phase,
                operation,
            });
        }
        let previous = state.phase;
        state.phase = operation.in_flight_phase();
        let previous_error = state.error.take();
        Ok(InFlight {
            orchestrator: self,
            epoch: state.epoch,
            previous,
            previous_error,
            settled: false,
        })
    }

    fn finish(
        &self,
        epoch: u64,
        operation: ReportOperation,
        outcome: TextGenerationResult<String>,
    ) -> ReportResult<String> {
        let result = outcome
            .and_then(|text| {
                if text.trim().is_empty() {
                    Err(TextGenerationError::EmptyResponse)
                } else {
                    Ok(text)
                }
            })
            .map_err(|err| ReportError::Generation(err.to_string()));

        let mut state = self.lock();
        if state.epoch != epoch {
            debug!(%operation, "report outcome discarded after dismissal");
            return result;
        }
        match &result {
            Ok(report) => {
                state.phase = ReportPhase::Ready;
                state.report = Some(report.clone());
                state.error = None;
                info!(%operation, report_len = report.len(), "report ready");
            }
            Err(err) => {
                state.phase = ReportPhase::Failed;
                state.error = Some(err.to_string());
                warn!(%operation, error = %err, "report request failed");
            }
        }
        result
    }

    fn lock(&self) -> MutexGuard<'_, OrchestratorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks a request as outstanding.
///
/// When the request future is dropped before the generator answers, the
/// phase and error it replaced are restored so the orchestrator does not
/// stay in flight forever and a `Failed` phase keeps its message.
struct InFlight<'a, G>
where
    G: TextGenerator + ?Sized,
{
    orchestrator: &'a ReportOrchestrator<G>,
    epoch: u64,
    previous: ReportPhase,
    previous_error: Option<String>,
    settled: bool,
}

impl<G> Drop for InFlight<'_, G>
where
    G: TextGenerator + ?Sized,
{
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.orchestrator.lock();
        if state.epoch == self.epoch && state.phase.is_in_flight() {
            state.phase = self.previous;
            state.error = self.previous_error.take();
            debug!(phase = %self.previous, "abandoned report request rolled back");
        }
    }
}
