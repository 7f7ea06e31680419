//! Text generation collaborator port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for text generation.
pub type TextGenerationResult<T> = Result<T, TextGenerationError>;

/// Produces free-form text from a prompt.
///
/// Implementations own their transport, credentials and timeout policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`TextGenerationError`] when the backend cannot be reached,
    /// rejects the request or answers with no usable text.
    async fn generate_text(&self, prompt: &str) -> TextGenerationResult<String>;
}

/// Errors returned by text generation adapters.
#[derive(Debug, Clone, Error)]
pub enum TextGenerationError {
    /// The request did not complete, including timeouts.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The service answered with a non-success status.
    #[error("service rejected the request with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The service reported an error in its payload.
    #[error("service error: {0}")]
    Service(String),

    /// The response could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response contained no text.
    #[error("the service returned an empty response")]
    EmptyResponse,
}

impl TextGenerationError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
