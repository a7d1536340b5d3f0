//! Error Types

use thiserror::Error;

/// Result type alias for oracle operations
pub type Result<T> = std::result::Result<T, OracleError>;

/// Message shown to the visitor for every failed consultation
pub const DISRUPTED_MESSAGE: &str = "The connection to the ether is disrupted. (Check API Key)";

/// Oracle error types
///
/// The variants exist for diagnostics only. Every one of them collapses to
/// [`DISRUPTED_MESSAGE`] when shown to a visitor.
#[derive(Error, Debug)]
pub enum OracleError {
    /// LLM provider returned an error response
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unreachable (DNS, connect, TLS, reset)
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// Missing or rejected credential
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Provider quota exhausted
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Response body could not be understood
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl OracleError {
    /// Short label for log fields
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Provider(_) => "provider",
            Self::Unavailable(_) => "unavailable",
            Self::Auth(_) => "auth",
            Self::RateLimited(_) => "rate_limited",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::Json(_) => "json",
            Self::Other(_) => "other",
        }
    }

    /// Convert to the visitor-facing message.
    ///
    /// Identical for every variant; the cause only ever reaches the logs.
    pub const fn user_message(&self) -> &'static str {
        DISRUPTED_MESSAGE
    }
}

impl From<anyhow::Error> for OracleError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
