//! Oracle Configuration
//!
//! Everything the assistant needs besides the provider itself. The
//! credential is not here: it belongs to the provider, which is built once
//! and injected.

use serde::{Deserialize, Serialize};

use crate::error::DISRUPTED_MESSAGE;
use crate::provider::GenerationOptions;

/// Model used when nothing else is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Shown instead of blank output when the provider answers with no text
pub const SILENT_MESSAGE: &str = "The void is silent today.";

/// Persona directive sent with every request
pub const ORACLE_PERSONA: &str = "You are the 'Digital Oracle' of this website called Centi-Tenka. \
You speak in a poetic, slightly cryptic, but insightful manner. \
You value minimalism, aesthetics, and digital philosophy. \
Keep answers concise (under 80 words) and profound. \
Do not act like a robot, act like a curator of a digital museum.";

/// Oracle configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// System-level persona instruction
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Text stored when a successful response is empty
    #[serde(default = "default_fallback")]
    pub fallback_message: String,

    /// Text stored when the request fails for any reason
    #[serde(default = "default_error")]
    pub error_message: String,
}

fn default_model() -> String { DEFAULT_MODEL.into() }
fn default_persona() -> String { ORACLE_PERSONA.into() }
fn default_fallback() -> String { SILENT_MESSAGE.into() }
fn default_error() -> String { DISRUPTED_MESSAGE.into() }

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            persona: default_persona(),
            fallback_message: default_fallback(),
            error_message: default_error(),
        }
    }
}

impl OracleConfig {
    /// Defaults, with the model overridable through `ORACLE_MODEL`
    pub fn from_env() -> Self {
        let model = std::env::var("ORACLE_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(default_model);

        Self {
            model,
            ..Default::default()
        }
    }

    /// Use a different model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generation options for one consultation
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            model: self.model.clone(),
            system_instruction: Some(self.persona.clone()),
            ..Default::default()
        }
    }
}
