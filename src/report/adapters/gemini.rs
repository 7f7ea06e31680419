//! Gemini text generation over the `generateContent` REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::report::ports::{TextGenerationError, TextGenerationResult, TextGenerator};

/// Default Gemini model used for reports.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the Gemini API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for [`GeminiTextGenerator`].
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Model name, for example `gemini-2.5-flash`.
    pub model: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// API base URL without a trailing slash.
    pub base_url: String,
}

impl GeminiConfig {
    /// Creates settings for `api_key` with the default model, timeout and
    /// endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            timeout: Duration::from_secs(60),
            base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
        }
    }

    /// Returns the `generateContent` endpoint for the configured model.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GenerateResponse {
    /// Concatenates the text parts of the first candidate.
    pub(crate) fn into_text(self) -> TextGenerationResult<String> {
        if let Some(error) = self.error {
            return Err(TextGenerationError::Service(error.message));
        }
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(TextGenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Returns the body of a rejected response, or a note naming why it could
/// not be read.
pub(crate) fn rejected_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|err| {
        warn!(error = %err, "failed to read rejected response body");
        format!("<response body unavailable: {err}>")
    })
}

/// [`TextGenerator`] backed by Google's Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiTextGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiTextGenerator {
    /// Builds a generator whose HTTP client enforces the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TextGenerationError::Transport`] when the HTTP client cannot
    /// be constructed.
    pub fn new(config: GeminiConfig) -> TextGenerationResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TextGenerationError::transport)?;
        Ok(Self { client, config })
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate_text(&self, prompt: &str) -> TextGenerationResult<String> {
        let request = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        };
        debug!(model = %self.config.model, prompt_len = prompt.len(), "sending generateContent request");
        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", self.config.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(TextGenerationError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TextGenerationError::Rejected {
                status: status.as_u16(),
                body: rejected_body(response.text().await),
            });
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|err| TextGenerationError::Malformed(err.to_string()))?;
        payload.into_text()
    }
}
