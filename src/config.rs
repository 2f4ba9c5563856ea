//! Process-wide configuration, built once from the environment at startup.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::llm::{LlmBackend, LlmConfig};

/// Application configuration.
///
/// Constructed before any session begins and read-only thereafter. A missing
/// API key is a fatal startup condition, never a per-call failure.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// - `REG_ASSIST_BACKEND` — `openai` (default) or `anthropic`
    /// - `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` — required for the chosen backend
    /// - `REG_ASSIST_MODEL` — optional model override
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match std::env::var("REG_ASSIST_BACKEND") {
            Ok(value) => LlmBackend::from_str(&value)?,
            Err(_) => LlmBackend::OpenAi,
        };

        let key_var = backend.key_env_var();
        let api_key = std::env::var(key_var)
            .map_err(|_| ConfigError::MissingEnvVar(key_var.to_string()))?;

        let model = std::env::var("REG_ASSIST_MODEL")
            .unwrap_or_else(|_| backend.default_model().to_string());

        Ok(Self {
            llm: LlmConfig {
                backend,
                api_key: secrecy::SecretString::from(api_key),
                model,
            },
        })
    }
}
