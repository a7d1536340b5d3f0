//! Gemini LLM Provider
//!
//! Implementation of `LlmProvider` for the Google Generative Language API
//! (`models/{model}:generateContent`).

use std::time::Duration;

use async_trait::async_trait;
use oracle_core::{
    error::{OracleError, Result},
    provider::{Completion, FinishReason, GenerationOptions, LlmProvider, TokenUsage},
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; a missing key fails each call rather than construction
    pub api_key: Option<String>,

    /// API root, without the version segment
    pub base_url: String,

    /// Request timeout; `None` keeps the HTTP client default (no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Read `GEMINI_API_KEY` (or `API_KEY`), `GEMINI_BASE_URL` and
    /// `GEMINI_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY"));
        let base_url = non_empty("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout_secs = non_empty("GEMINI_TIMEOUT_SECS").and_then(|t| match t.trim().parse::<u64>() {
            Ok(0) => {
                tracing::warn!("GEMINI_TIMEOUT_SECS is 0, leaving the request timeout unset");
                None
            }
            Ok(secs) => Some(secs),
            Err(e) => {
                tracing::warn!(value = %t, error = %e, "ignoring invalid GEMINI_TIMEOUT_SECS");
                None
            }
        });

        Self {
            api_key,
            base_url,
            timeout_secs,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Gemini LLM provider
pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create from configuration
    pub fn from_config(config: GeminiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| OracleError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(GeminiConfig::from_env())
    }

    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| OracleError::Auth("no API key configured (set GEMINI_API_KEY)".into()))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{API_VERSION}/{path}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Map a non-success response to an error
    fn status_error(status: StatusCode, body: &str) -> OracleError {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.chars().take(200).collect());
        let detail = format!("{status}: {message}");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => OracleError::Auth(detail),
            StatusCode::BAD_REQUEST if message.contains("API key") => OracleError::Auth(detail),
            StatusCode::TOO_MANY_REQUESTS => OracleError::RateLimited(detail),
            _ => OracleError::Provider(detail),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn health_check(&self) -> Result<bool> {
        let key = self.api_key()?;
        let response = self
            .client
            .get(self.url("models?pageSize=1"))
            .header(API_KEY_HEADER, key)
            .send()
            .await;

        match response {
            Ok(r) if r.status().is_success() => Ok(true),
            Ok(r) => {
                tracing::warn!("Gemini health check returned {}", r.status());
                Ok(false)
            }
            Err(e) => {
                tracing::warn!("Gemini health check failed: {}", e);
                Ok(false)
            }
        }
    }

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<Completion> {
        let key = self.api_key()?;
        let url = self.url(&format!("models/{}:generateContent", options.model));
        let body = GenerateContentRequest::new(prompt, options);

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))?;

        Ok(parsed.into_completion(&options.model))
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str, options: &'a GenerationOptions) -> Self {
        let generation_config = (options.temperature.is_some() || options.max_output_tokens.is_some())
            .then(|| GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
            });

        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: options.system_instruction.as_deref().map(|text| Content {
                role: None,
                parts: vec![Part { text }],
            }),
            generation_config,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, thoughts excluded
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    fn into_completion(self, requested_model: &str) -> Completion {
        let text = self.text();
        let finish_reason = self
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .map(|r| match r {
                "STOP" => FinishReason::Stop,
                "MAX_TOKENS" => FinishReason::Length,
                "SAFETY" => FinishReason::Safety,
                other => FinishReason::Other(other.to_string()),
            });

        Completion {
            text,
            model: self.model_version.unwrap_or_else(|| requested_model.to_string()),
            usage: self.usage_metadata.map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
            finish_reason,
        }
    }
}
