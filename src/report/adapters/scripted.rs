//! Deterministic text generator answering from a queue.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::report::ports::{TextGenerationError, TextGenerationResult, TextGenerator};

#[derive(Debug, Default)]
struct ScriptState {
    responses: VecDeque<TextGenerationResult<String>>,
    prompts: Vec<String>,
}

/// In-memory [`TextGenerator`] replaying queued responses in order.
///
/// Every prompt it receives is recorded. Once the queue is exhausted each
/// call fails with [`TextGenerationError::Service`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedTextGenerator {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedTextGenerator {
    /// Creates a generator with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that answers with `responses` in order.
    #[must_use]
    pub fn with_responses(
        responses: impl IntoIterator<Item = TextGenerationResult<String>>,
    ) -> Self {
        let generator = Self::new();
        generator.lock().responses.extend(responses);
        generator
    }

    /// Queues a successful response.
    pub fn push_text(&self, text: impl Into<String>) {
        self.lock().responses.push_back(Ok(text.into()));
    }

    /// Queues a failure.
    pub fn push_error(&self, error: TextGenerationError) {
        self.lock().responses.push_back(Err(error));
    }

    /// Returns every prompt received so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Returns how many times the generator was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().prompts.len()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    async fn generate_text(&self, prompt: &str) -> TextGenerationResult<String> {
        let mut state = self.lock();
        state.prompts.push(prompt.to_owned());
        state.responses.pop_front().unwrap_or_else(|| {
            Err(TextGenerationError::Service(
                "no scripted response left".to_owned(),
            ))
        })
    }
}
