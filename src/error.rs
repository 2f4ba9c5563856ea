//! Error types for Reg Assist.

/// Top-level error type for the intake agent.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors. All of these are fatal at startup — no
/// session begins with a broken configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Schema construction errors, surfaced once at load time.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema has no fields")]
    Empty,

    #[error("Duplicate field key: {0}")]
    DuplicateKey(String),

    #[error("Invalid validation pattern for field {key}: {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// LLM provider errors. These never cross the gateway boundary — the gateway
/// converts them into placeholder text.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the intake agent.
pub type Result<T> = std::result::Result<T, Error>;
