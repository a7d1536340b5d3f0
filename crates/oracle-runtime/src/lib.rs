//! # oracle-runtime
//!
//! Runtime providers for the Centi-Tenka oracle.
//!
//! ## Providers
//!
//! - **Gemini** (default): Google Generative Language API, `generateContent`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use oracle_runtime::gemini::{GeminiConfig, GeminiProvider};
//!
//! let provider = GeminiProvider::from_config(GeminiConfig::from_env())?;
//! let oracle = QueryAssistant::new(Arc::new(provider), OracleConfig::from_env());
//! ```

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiConfig, GeminiProvider};

// Re-export core types for convenience
pub use oracle_core::{
    LlmProvider, OracleConfig, OracleError, OracleState, Outcome, QueryAssistant, Result,
    Submission,
};
