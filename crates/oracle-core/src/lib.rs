//! # oracle-core
//!
//! The Centi-Tenka oracle: a text box that forwards a question to a
//! generative-text service and shows the reply.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                     QueryAssistant                        │
//! │  ┌──────────────┐   ┌─────────────┐   ┌────────────────┐  │
//! │  │ OracleState  │   │   consult   │   │  LlmProvider   │  │
//! │  │ (idle/pend/  │──▶│ (persona +  │──▶│  (Strategy)    │  │
//! │  │  settled)    │◀──│  collapse)  │◀──│                │  │
//! │  └──────────────┘   └─────────────┘   └────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! `OracleState` carries no I/O so the browser frontend reuses it directly;
//! `QueryAssistant` is the async driver for native callers.

pub mod assistant;
pub mod config;
pub mod error;
pub mod mock;
pub mod provider;
pub mod state;

pub use assistant::{QueryAssistant, Submission, consult};
pub use config::OracleConfig;
pub use error::{DISRUPTED_MESSAGE, OracleError, Result};
pub use provider::{Completion, GenerationOptions, LlmProvider};
pub use state::{IgnoreReason, OracleState, OracleView, Outcome, Phase, Settlement};
