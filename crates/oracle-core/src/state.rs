//! Query Assistant State Machine
//!
//! ```text
//!   idle ──submit──▶ pending ──success──▶ settled-success ─┐
//!                       ▲    └─failure──▶ settled-error ───┤
//!                       └───────────────submit─────────────┘
//! ```
//!
//! [`OracleState`] is pure data: it performs no I/O and holds no handles, so
//! the same machine backs the native [`QueryAssistant`](crate::QueryAssistant)
//! and the browser component.

use serde::{Deserialize, Serialize};

use crate::config::OracleConfig;
use crate::error::Result;
use crate::provider::Completion;

/// How the last request settled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    Success,
    Error,
}

/// Request lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Settled(Settlement),
}

/// Why a submission was turned away
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Query is empty or whitespace only
    EmptyQuery,
    /// A request is still outstanding
    Pending,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "empty query"),
            Self::Pending => write!(f, "request pending"),
        }
    }
}

/// Result of one consultation as the visitor sees it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "text", rename_all = "snake_case")]
pub enum Outcome {
    /// Provider text, verbatim
    Answered(String),
    /// Provider succeeded with an empty payload; carries the fallback text
    Silent(String),
    /// Any failure; carries the fixed error text
    Disrupted(String),
}

impl Outcome {
    /// Collapse a provider result into one of the visible outcomes
    pub fn from_result(result: Result<Completion>, config: &OracleConfig) -> Self {
        match result {
            Ok(completion) => match completion.non_empty_text() {
                Some(text) => Self::Answered(text.to_owned()),
                None => Self::Silent(config.fallback_message.clone()),
            },
            Err(_) => Self::Disrupted(config.error_message.clone()),
        }
    }

    /// Failure outcome without going through a provider result
    pub fn disrupted(config: &OracleConfig) -> Self {
        Self::Disrupted(config.error_message.clone())
    }

    /// Text to display
    pub fn text(&self) -> &str {
        match self {
            Self::Answered(t) | Self::Silent(t) | Self::Disrupted(t) => t,
        }
    }

    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Disrupted(_))
    }
}

/// What the rendering surface should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleView<'a> {
    pub query: &'a str,
    /// Busy indicator on, submit affordance disabled
    pub busy: bool,
    pub response: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Query, lifecycle flag, and result of the oracle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OracleState {
    query: String,
    phase: Phase,
    response: String,
    error: String,
}

impl OracleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending)
    }

    /// Last response, empty when none
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Last error, empty when none
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether a submission right now would be accepted
    pub fn check_submit(&self) -> std::result::Result<(), IgnoreReason> {
        if self.query.trim().is_empty() {
            return Err(IgnoreReason::EmptyQuery);
        }
        if self.is_pending() {
            return Err(IgnoreReason::Pending);
        }
        Ok(())
    }

    /// Accept a submission: enter pending, clear the previous result, and
    /// hand back the prompt to send.
    ///
    /// A rejected submission leaves the state untouched.
    pub fn begin(&mut self) -> std::result::Result<String, IgnoreReason> {
        self.check_submit()?;
        self.phase = Phase::Pending;
        self.response.clear();
        self.error.clear();
        Ok(self.query.clone())
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Returns `false` (and changes nothing) if no request is pending.
    pub fn settle(&mut self, outcome: &Outcome) -> bool {
        if !self.is_pending() {
            return false;
        }
        match outcome {
            Outcome::Answered(text) | Outcome::Silent(text) => {
                self.response.clone_from(text);
                self.error.clear();
                self.phase = Phase::Settled(Settlement::Success);
            }
            Outcome::Disrupted(text) => {
                self.response.clear();
                self.error.clone_from(text);
                self.phase = Phase::Settled(Settlement::Error);
            }
        }
        true
    }

    pub fn view(&self) -> OracleView<'_> {
        OracleView {
            query: &self.query,
            busy: self.is_pending(),
            response: Some(self.response.as_str()).filter(|r| !r.is_empty()),
            error: Some(self.error.as_str()).filter(|e| !e.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SILENT_MESSAGE;
    use crate::error::{DISRUPTED_MESSAGE, OracleError};

    fn pending(query: &str) -> OracleState {
        let mut state = OracleState::new();
        state.set_query(query);
        state.begin().unwrap();
        state
    }

    #[test]
    fn test_blank_query_is_ignored() {
        for query in ["", "   ", "\n\t "] {
            let mut state = OracleState::new();
            state.set_query(query);
            let before = state.clone();

            assert_eq!(state.begin(), Err(IgnoreReason::EmptyQuery));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_begin_enters_pending_and_returns_prompt() {
        let mut state = OracleState::new();
        state.set_query("  What is the essence of beauty?");

        assert_eq!(state.begin().as_deref(), Ok("  What is the essence of beauty?"));
        assert_eq!(state.phase(), Phase::Pending);
        assert!(state.view().busy);
    }

    #[test]
    fn test_second_begin_while_pending_is_ignored() {
        let mut state = pending("first");
        state.set_query("second");

        assert_eq!(state.begin(), Err(IgnoreReason::Pending));
        assert!(state.is_pending());
    }

    #[test]
    fn test_answer_is_stored_verbatim() {
        let mut state = pending("beauty?");
        let config = OracleConfig::default();
        let outcome = Outcome::from_result(
            Ok(Completion::text("m", "Beauty is silence made visible.")),
            &config,
        );

        assert!(state.settle(&outcome));
        assert_eq!(state.phase(), Phase::Settled(Settlement::Success));
        assert_eq!(state.view().response, Some("Beauty is silence made visible."));
        assert_eq!(state.view().error, None);
        assert!(!state.view().busy);
    }

    #[test]
    fn test_empty_payload_shows_fallback() {
        let mut state = pending("beauty?");
        let config = OracleConfig::default();

        state.settle(&Outcome::from_result(Ok(Completion::empty("m")), &config));
        assert_eq!(state.response(), SILENT_MESSAGE);
        assert_eq!(state.phase(), Phase::Settled(Settlement::Success));
    }

    #[test]
    fn test_failure_shows_fixed_message_only() {
        let mut state = pending("beauty?");
        let config = OracleConfig::default();
        let err = OracleError::Auth("API key not valid. Please pass a valid API key.".into());

        state.settle(&Outcome::from_result(Err(err), &config));
        assert_eq!(state.error(), DISRUPTED_MESSAGE);
        assert!(!state.error().contains("API key not valid"));
        assert_eq!(state.response(), "");
        assert_eq!(state.phase(), Phase::Settled(Settlement::Error));
    }

    #[test]
    fn test_resubmit_after_failure_clears_error() {
        let mut state = pending("first");
        state.settle(&Outcome::disrupted(&OracleConfig::default()));
        assert!(!state.error().is_empty());

        state.set_query("second");
        state.begin().unwrap();
        assert_eq!(state.error(), "");
        assert_eq!(state.response(), "");

        state.settle(&Outcome::Answered("Stillness.".into()));
        assert_eq!(state.response(), "Stillness.");
        assert_eq!(state.error(), "");
    }

    #[test]
    fn test_settle_without_pending_is_noop() {
        let mut state = OracleState::new();
        assert!(!state.settle(&Outcome::Answered("stray".into())));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.response(), "");
    }

    #[test]
    fn test_disrupted_uses_configured_message() {
        let config = OracleConfig {
            error_message: "The ether is quiet.".into(),
            ..OracleConfig::default()
        };

        let outcome = Outcome::from_result(Err(OracleError::Unavailable("dns".into())), &config);
        assert!(!outcome.is_success());
        assert_eq!(outcome.text(), "The ether is quiet.");
        assert_eq!(Outcome::disrupted(&config), outcome);
        assert_eq!(Outcome::disrupted(&OracleConfig::default()).text(), DISRUPTED_MESSAGE);
    }
}
