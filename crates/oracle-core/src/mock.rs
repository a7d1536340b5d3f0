//! Scripted Provider
//!
//! For testing and local demos. Replies come from a queue instead of the
//! network, and a request can be held open to observe the pending state.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::error::{OracleError, Result};
use crate::provider::{Completion, GenerationOptions, LlmProvider};

/// A request as the provider received it
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub prompt: String,
    pub options: GenerationOptions,
}

/// Provider that answers from a script
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<Completion>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    calls: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every request until [`release`](Self::release) is called
    #[must_use]
    pub fn held(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Queue a text reply
    #[must_use]
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(Completion::text("scripted", text)));
        self
    }

    /// Queue a successful reply with no text
    #[must_use]
    pub fn empty_reply(self) -> Self {
        self.push(Ok(Completion::empty("scripted")));
        self
    }

    /// Queue a failure
    #[must_use]
    pub fn failure(self, err: OracleError) -> Self {
        self.push(Err(err));
        self
    }

    /// Let one held request through
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Number of `generate` calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, reply: Result<Completion>) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<Completion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                prompt: prompt.to_owned(),
                options: options.clone(),
            });

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| OracleError::Other(e.to_string()))?
                .forget();
        }

        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(OracleError::Other("script exhausted".into())))
    }
}
