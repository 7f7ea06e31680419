//! Environment-driven configuration for the taskboard binary.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TASKBOARD_DATA_DIR` | directory of the file-backed store | `.taskboard` |
//! | `GEMINI_API_KEY` (or `API_KEY`) | enables AI reports | unset |
//! | `TASKBOARD_GEMINI_MODEL` | Gemini model name | `gemini-2.5-flash` |
//! | `TASKBOARD_AI_TIMEOUT_SECS` | report request timeout in seconds | `60` |
//! | `TASKBOARD_LOG` | log level (`error` through `trace`) | `warn` |
//!
//! Blank values are treated as unset.

use camino::Utf8PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

use crate::report::adapters::{DEFAULT_GEMINI_MODEL, GeminiConfig};

/// Variable naming the data directory.
pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";
/// Preferred variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Fallback variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "API_KEY";
/// Variable naming the Gemini model.
pub const GEMINI_MODEL_ENV: &str = "TASKBOARD_GEMINI_MODEL";
/// Variable holding the report request timeout in seconds.
pub const AI_TIMEOUT_ENV: &str = "TASKBOARD_AI_TIMEOUT_SECS";
/// Variable holding the log level.
pub const LOG_ENV: &str = "TASKBOARD_LOG";

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".taskboard";

const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The timeout is not a positive whole number of seconds.
    #[error("{AI_TIMEOUT_ENV} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout {
        /// Rejected value.
        value: String,
    },
    /// The log level is not recognised.
    #[error("{LOG_ENV} must be one of error, warn, info, debug or trace, got '{value}'")]
    InvalidLogLevel {
        /// Rejected value.
        value: String,
    },
    /// AI reports were requested but no API key is configured.
    #[error("AI reports need {GEMINI_API_KEY_ENV} or {API_KEY_ENV} to be set")]
    MissingApiKey,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory of the file-backed store.
    pub data_dir: Utf8PathBuf,
    /// Gemini settings, present when an API key is configured.
    pub gemini: Option<GeminiConfig>,
    /// Log level for the binary's subscriber.
    pub log_level: Level,
}

impl AppConfig {
    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let data_dir = read(DATA_DIR_ENV)
            .map_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR), Utf8PathBuf::from);
        let log_level = read(LOG_ENV)
            .map(|value| parse_log_level(&value))
            .transpose()?
            .unwrap_or(Level::WARN);
        let timeout = read(AI_TIMEOUT_ENV)
            .map(|value| parse_timeout(&value))
            .transpose()?
            .unwrap_or(Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS));
        let gemini = read(GEMINI_API_KEY_ENV)
            .or_else(|| read(API_KEY_ENV))
            .map(|api_key| {
                let mut config = GeminiConfig::new(api_key);
                config.model =
                    read(GEMINI_MODEL_ENV).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_owned());
                config.timeout = timeout;
                config
            });

        Ok(Self {
            data_dir,
            gemini,
            log_level,
        })
    }

    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Returns the Gemini settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no key is configured.
    pub fn require_gemini(&self) -> Result<&GeminiConfig, ConfigError> {
        self.gemini.as_ref().ok_or(ConfigError::MissingApiKey)
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            value: value.to_owned(),
        }),
    }
}

fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    value
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel {
            value: value.to_owned(),
        })
}
