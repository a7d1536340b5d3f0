//! Query Assistant
//!
//! Drives [`OracleState`] through one consultation per accepted submission.
//! State lives in a `watch` channel: the channel is both the storage and the
//! update notification for whatever renders it.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::OracleConfig;
use crate::provider::LlmProvider;
use crate::state::{IgnoreReason, OracleState, Outcome};

/// What happened to a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Nothing was sent
    Ignored(IgnoreReason),
    /// One request was sent and has settled
    Settled(Outcome),
}

/// Send one prompt with the persona and collapse the result.
///
/// Failure detail is logged here and goes no further.
pub async fn consult(provider: &dyn LlmProvider, config: &OracleConfig, prompt: &str) -> Outcome {
    let options = config.generation_options();
    tracing::debug!(provider = provider.name(), model = %options.model, "consulting oracle");

    let result = provider.generate(prompt, &options).await;
    let summary = match &result {
        Ok(completion) => {
            let summary = completion.summary();
            tracing::debug!(
                provider = provider.name(),
                model = %completion.model,
                %summary,
                "oracle replied"
            );
            summary
        }
        Err(e) => {
            tracing::error!(
                provider = provider.name(),
                kind = e.kind(),
                error = %e,
                "oracle consultation failed"
            );
            String::new()
        }
    };

    let outcome = Outcome::from_result(result, config);
    if matches!(outcome, Outcome::Silent(_)) {
        tracing::info!(provider = provider.name(), %summary, "oracle returned an empty payload");
    }
    outcome
}

/// The interactive oracle component
pub struct QueryAssistant {
    provider: Arc<dyn LlmProvider>,
    config: OracleConfig,
    state: watch::Sender<OracleState>,
}

impl QueryAssistant {
    /// Create with an already configured provider
    pub fn new(provider: Arc<dyn LlmProvider>, config: OracleConfig) -> Self {
        let (state, _) = watch::channel(OracleState::new());
        Self {
            provider,
            config,
            state,
        }
    }

    pub const fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Observe every state change
    pub fn subscribe(&self) -> watch::Receiver<OracleState> {
        self.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> OracleState {
        self.state.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Overwrite the query
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_if_modified(|s| {
            if s.query() == query {
                return false;
            }
            s.set_query(query);
            true
        });
    }

    /// Submit the current query.
    ///
    /// Blank queries and submissions made while a request is outstanding
    /// are ignored without touching the state. Otherwise exactly one request
    /// is issued and the assistant leaves the pending state when it settles,
    /// even if this future is dropped first.
    pub async fn submit(&self) -> Submission {
        let mut begun = Err(IgnoreReason::Pending);
        self.state.send_if_modified(|s| {
            begun = s.begin();
            begun.is_ok()
        });

        let prompt = match begun {
            Ok(prompt) => prompt,
            Err(reason) => {
                tracing::debug!(%reason, "submission ignored");
                return Submission::Ignored(reason);
            }
        };

        let guard = PendingGuard {
            state: &self.state,
            config: &self.config,
            armed: true,
        };
        let outcome = consult(self.provider.as_ref(), &self.config, &prompt).await;
        guard.settle(&outcome);

        Submission::Settled(outcome)
    }
}

/// Settles the state as failed if a submission is dropped mid-flight
struct PendingGuard<'a> {
    state: &'a watch::Sender<OracleState>,
    config: &'a OracleConfig,
    armed: bool,
}

impl PendingGuard<'_> {
    fn settle(mut self, outcome: &Outcome) {
        self.armed = false;
        self.state.send_if_modified(|s| s.settle(outcome));
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("oracle submission dropped before settling");
            let outcome = Outcome::disrupted(self.config);
            self.state.send_if_modified(|s| s.settle(&outcome));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SILENT_MESSAGE;
    use crate::error::{DISRUPTED_MESSAGE, OracleError};
    use crate::mock::ScriptedProvider;
    use crate::state::{Phase, Settlement};

    fn assistant(provider: &Arc<ScriptedProvider>) -> Arc<QueryAssistant> {
        Arc::new(QueryAssistant::new(provider.clone(), OracleConfig::default()))
    }

    #[tokio::test]
    async fn test_blank_query_sends_nothing() {
        let provider = Arc::new(ScriptedProvider::new().reply("unused"));
        let oracle = assistant(&provider);
        oracle.set_query("   ");

        let before = oracle.snapshot();
        assert_eq!(oracle.submit().await, Submission::Ignored(IgnoreReason::EmptyQuery));
        assert_eq!(provider.calls(), 0);
        assert_eq!(oracle.snapshot(), before);
    }

    #[tokio::test]
    async fn test_answer_is_displayed_verbatim() {
        let provider = Arc::new(ScriptedProvider::new().reply("Beauty is silence made visible."));
        let oracle = assistant(&provider);
        oracle.set_query("What is the essence of beauty?");

        let submission = oracle.submit().await;
        assert_eq!(
            submission,
            Submission::Settled(Outcome::Answered("Beauty is silence made visible.".into()))
        );

        let state = oracle.snapshot();
        assert_eq!(state.response(), "Beauty is silence made visible.");
        assert_eq!(state.phase(), Phase::Settled(Settlement::Success));
        assert!(!oracle.is_pending());
    }

    #[tokio::test]
    async fn test_prompt_and_persona_are_sent() {
        let provider = Arc::new(ScriptedProvider::new().reply("ok"));
        let oracle = assistant(&provider);
        oracle.set_query("Why minimalism?");
        oracle.submit().await;

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "Why minimalism?");
        assert_eq!(requests[0].options.model, "gemini-2.5-flash");
        assert!(requests[0]
            .options
            .system_instruction
            .as_deref()
            .is_some_and(|p| p.contains("Digital Oracle")));
    }

    #[tokio::test]
    async fn test_empty_payload_shows_fallback() {
        let provider = Arc::new(ScriptedProvider::new().empty_reply());
        let oracle = assistant(&provider);
        oracle.set_query("Speak");
        oracle.submit().await;

        assert_eq!(oracle.snapshot().response(), SILENT_MESSAGE);
        assert!(!oracle.is_pending());
    }

    #[tokio::test]
    async fn test_failure_hides_detail() {
        let provider = Arc::new(
            ScriptedProvider::new().failure(OracleError::Unavailable("tcp connect error: 10.0.0.1".into())),
        );
        let oracle = assistant(&provider);
        oracle.set_query("Speak");

        let submission = oracle.submit().await;
        assert_eq!(submission, Submission::Settled(Outcome::Disrupted(DISRUPTED_MESSAGE.into())));

        let state = oracle.snapshot();
        assert_eq!(state.error(), DISRUPTED_MESSAGE);
        assert!(!state.error().contains("tcp"));
        assert_eq!(state.response(), "");
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_clears_error() {
        let provider = Arc::new(
            ScriptedProvider::new()
                .failure(OracleError::Auth("bad key".into()))
                .reply("The second answer.")
                .held(),
        );
        let oracle = assistant(&provider);
        oracle.set_query("first");

        provider.release();
        oracle.submit().await;
        assert_eq!(oracle.snapshot().error(), DISRUPTED_MESSAGE);

        let mut rx = oracle.subscribe();
        let task = tokio::spawn({
            let oracle = oracle.clone();
            async move { oracle.submit().await }
        });

        let pending = rx.wait_for(OracleState::is_pending).await.unwrap().clone();
        assert_eq!(pending.error(), "");
        assert_eq!(pending.response(), "");

        provider.release();
        task.await.unwrap();
        assert_eq!(oracle.snapshot().response(), "The second answer.");
        assert_eq!(oracle.snapshot().error(), "");
    }

    #[tokio::test]
    async fn test_submission_while_pending_is_ignored() {
        let provider = Arc::new(ScriptedProvider::new().reply("once").held());
        let oracle = assistant(&provider);
        oracle.set_query("hello");

        let mut rx = oracle.subscribe();
        let first = tokio::spawn({
            let oracle = oracle.clone();
            async move { oracle.submit().await }
        });
        rx.wait_for(OracleState::is_pending).await.unwrap();

        assert_eq!(oracle.submit().await, Submission::Ignored(IgnoreReason::Pending));
        assert_eq!(provider.calls(), 1);

        provider.release();
        assert!(matches!(first.await.unwrap(), Submission::Settled(Outcome::Answered(_))));
        assert_eq!(provider.calls(), 1);
        assert!(!oracle.is_pending());
    }

    #[tokio::test]
    async fn test_dropped_submission_does_not_stick_pending() {
        let provider = Arc::new(ScriptedProvider::new().reply("never seen").held());
        let oracle = assistant(&provider);
        oracle.set_query("hello");

        let mut rx = oracle.subscribe();
        let task = tokio::spawn({
            let oracle = oracle.clone();
            async move { oracle.submit().await }
        });
        rx.wait_for(OracleState::is_pending).await.unwrap();

        task.abort();
        assert!(task.await.is_err());

        let state = oracle.snapshot();
        assert!(!state.is_pending());
        assert_eq!(state.error(), DISRUPTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_subscribers_see_pending_then_settled() {
        let provider = Arc::new(ScriptedProvider::new().reply("Light."));
        let oracle = assistant(&provider);
        let mut rx = oracle.subscribe();

        oracle.set_query("q");
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        oracle.submit().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().response(), "Light.");
    }
}
