//! LLM Provider Strategy Pattern
//!
//! Defines the interface the oracle uses to reach a generative-text service.
//! The assistant and the server proxy work exclusively through this trait, so
//! Gemini can be swapped for a scripted provider in tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use oracle_core::provider::{GenerationOptions, LlmProvider};
//!
//! let provider = GeminiProvider::from_config(config);
//! let completion = provider.generate("What is beauty?", &options).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a single generation request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,

    /// System-level instruction sent alongside the prompt
    #[serde(default)]
    pub system_instruction: Option<String>,

    /// Sampling temperature; `None` keeps the provider default
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Output token cap; `None` keeps the provider default
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: crate::config::DEFAULT_MODEL.into(),
            system_instruction: None,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// Response from a generation request
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text, `None` when the provider returned no text part
    pub text: Option<String>,

    /// Model that generated this response
    pub model: String,

    /// Token usage statistics (if available)
    pub usage: Option<TokenUsage>,

    /// Finish reason as reported by the provider
    pub finish_reason: Option<FinishReason>,
}

impl Completion {
    /// Completion carrying `text`
    pub fn text(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Completion with no text at all
    pub fn empty(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// The text if it has any content
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Finish reason and token counts, for logs
    pub fn summary(&self) -> String {
        let finish = self
            .finish_reason
            .as_ref()
            .map_or_else(|| "unknown".to_owned(), ToString::to_string);
        match &self.usage {
            Some(u) => format!(
                "finish={finish} tokens={}+{}={}",
                u.prompt_tokens, u.completion_tokens, u.total_tokens
            ),
            None => format!("finish={finish}"),
        }
    }
}

/// Token usage statistics
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Reason for completion finishing
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    Safety,
    Other(String),
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Length => write!(f, "length"),
            Self::Safety => write!(f, "safety"),
            Self::Other(reason) => write!(f, "{}", reason.to_lowercase()),
        }
    }
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new backends.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logs and health output
    fn name(&self) -> &str;

    /// Check if the provider is reachable and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// Generate a completion for a single prompt
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.model, "gemini-2.5-flash");
        assert!(opts.system_instruction.is_none());
        assert!(opts.temperature.is_none());
    }

    #[test]
    fn test_non_empty_text() {
        assert_eq!(Completion::text("m", "hi").non_empty_text(), Some("hi"));
        assert_eq!(Completion::text("m", "").non_empty_text(), None);
        assert_eq!(Completion::empty("m").non_empty_text(), None);
    }

    #[test]
    fn test_completion_summary() {
        assert_eq!(Completion::empty("m").summary(), "finish=unknown");

        let completion = Completion {
            usage: Some(TokenUsage {
                prompt_tokens: 12,
                completion_tokens: 7,
                total_tokens: 19,
            }),
            finish_reason: Some(FinishReason::Stop),
            ..Completion::text("m", "Stillness.")
        };
        assert_eq!(completion.summary(), "finish=stop tokens=12+7=19");

        let blocked = Completion {
            finish_reason: Some(FinishReason::Other("RECITATION".into())),
            ..Completion::empty("m")
        };
        assert_eq!(blocked.summary(), "finish=recitation");
    }
}
