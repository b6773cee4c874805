//! External reasoning adapter for the NPC decision core.
//!
//! The decision core can delegate action selection to an external reasoning
//! capability (typically an LLM behind some transport). This crate owns that
//! boundary: the [`ReasoningClient`] contract, the context payload handed
//! across it, decision prompt construction, and the tolerant parsing of
//! free-text responses carrying an embedded JSON payload.
//!
//! Nothing here performs I/O. A host application supplies the transport by
//! implementing [`TextCompletion`] (prompt-in, text-out) or by implementing
//! [`ReasoningClient`] directly.

pub mod client;
pub mod parse;
pub mod prompt;

pub use client::{
    ActionProposal, PromptReasoner, ReasonerContext, ReasoningClient, TextCompletion, ToolListing,
};
pub use parse::parse_proposal;
pub use prompt::build_decision_prompt;

use thiserror::Error;

/// Errors crossing the reasoning boundary.
///
/// The orchestrator treats every variant identically: log, fall back to the
/// heuristic suggestion. The split exists for diagnostics only.
#[derive(Debug, Error)]
pub enum ReasonerError {
    /// The underlying transport failed (network, process, quota, ...).
    #[error("reasoner transport failed: {0}")]
    Transport(String),
    /// The response contained no recognizable JSON payload.
    #[error("no JSON object found in reasoner response")]
    NoPayload,
    /// The embedded payload was not valid JSON.
    #[error("malformed JSON in reasoner response: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    /// The payload decoded but carried no usable action identifier.
    #[error("reasoner response carried no action identifier")]
    MissingAction,
}
