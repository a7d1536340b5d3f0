//! Application State

use std::sync::Arc;

use oracle_core::{LlmProvider, OracleConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Generative-text provider, credential already injected
    pub provider: Arc<dyn LlmProvider>,

    /// Model, persona, and display texts
    pub config: Arc<OracleConfig>,
}
