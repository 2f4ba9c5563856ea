//! LLM integration for Reg Assist.
//!
//! Supports:
//! - **OpenAI**: Chat Completions API
//! - **Anthropic**: Messages API
//!
//! Both backends implement the `LlmProvider` trait, which is the seam the
//! gateway (and the tests) depend on.

mod anthropic;
mod openai;
pub mod provider;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;
pub use provider::{ChatMessage, CompletionRequest, CompletionResponse, LlmProvider, Role};

use std::str::FromStr;
use std::sync::Arc;

use crate::error::{ConfigError, LlmError};

/// Supported LLM backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    OpenAi,
    Anthropic,
}

impl LlmBackend {
    /// Environment variable holding the API key for this backend.
    pub fn key_env_var(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Default model when none is configured.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-4o-mini",
            Self::Anthropic => "claude-sonnet-4-20250514",
        }
    }
}

impl FromStr for LlmBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            other => Err(ConfigError::InvalidValue {
                key: "REG_ASSIST_BACKEND".to_string(),
                message: format!("Unknown backend '{other}' (expected 'openai' or 'anthropic')"),
            }),
        }
    }
}

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub backend: LlmBackend,
    pub api_key: secrecy::SecretString,
    pub model: String,
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let provider: Arc<dyn LlmProvider> = match config.backend {
        LlmBackend::OpenAi => Arc::new(OpenAiProvider::new(
            config.api_key.clone(),
            &config.model,
        )?),
        LlmBackend::Anthropic => Arc::new(AnthropicProvider::new(
            config.api_key.clone(),
            &config.model,
        )?),
    };
    tracing::info!(model = %config.model, "LLM provider ready");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_from_str() {
        assert_eq!("openai".parse::<LlmBackend>().unwrap(), LlmBackend::OpenAi);
        assert_eq!(
            "Anthropic".parse::<LlmBackend>().unwrap(),
            LlmBackend::Anthropic
        );
        assert!("cohere".parse::<LlmBackend>().is_err());
    }

    #[test]
    fn backend_defaults() {
        assert_eq!(LlmBackend::OpenAi.key_env_var(), "OPENAI_API_KEY");
        assert_eq!(LlmBackend::Anthropic.key_env_var(), "ANTHROPIC_API_KEY");
        assert_eq!(LlmBackend::OpenAi.default_model(), "gpt-4o-mini");
    }

    #[test]
    fn create_provider_constructs_with_any_key() {
        // API keys are not checked at construction time; auth failures
        // surface on the first request.
        let config = LlmConfig {
            backend: LlmBackend::OpenAi,
            api_key: secrecy::SecretString::from("sk-test"),
            model: "gpt-4o-mini".to_string(),
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.model_name(), "gpt-4o-mini");
    }
}
