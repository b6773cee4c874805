//! The reasoning contract and the prompt-and-parse transport shim.

use serde::Serialize;
use serde_json::{Map, Value};

use npc_stimulus::Stimulus;

use crate::parse::parse_proposal;
use crate::prompt::build_decision_prompt;
use crate::ReasonerError;

/// An action proposed by the external reasoner.
#[derive(Debug, Clone, Default)]
pub struct ActionProposal {
    /// Action identifier as the reasoner named it (not yet mapped to a
    /// registered tool)
    pub action: String,
    /// Free-form parameters carried alongside the identifier
    pub parameters: Map<String, Value>,
}

/// One entry of the available-action catalog shown to the reasoner.
#[derive(Debug, Clone, Serialize)]
pub struct ToolListing {
    pub name: String,
    pub description: String,
}

/// Context payload accompanying a stimulus across the reasoning boundary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReasonerContext {
    /// One-line personality summary ("aggressiveness=0.90, dominance=0.80, ...")
    pub personality_summary: String,
    /// Behavioral quirks, verbatim
    pub quirks: Vec<String>,
    /// Coarse descriptor of the current mood modifier
    pub mood: String,
    /// Coarse descriptor of the current stress modifier
    pub stress: String,
    /// Heuristic suggestions, best first, with their sampling weights
    pub ranked_suggestions: Vec<(String, f32)>,
    /// Full catalog of actions the NPC can take
    pub available_tools: Vec<ToolListing>,
}

/// Contract for delegating action selection to an external capability.
///
/// Implementations may fail for transport or parsing reasons; callers must
/// contain every failure locally and fall back to heuristic selection.
pub trait ReasoningClient {
    /// Proposes an action for the given stimulus and context.
    fn propose_action(
        &self,
        stimulus: &Stimulus,
        context: &ReasonerContext,
    ) -> Result<ActionProposal, ReasonerError>;
}

/// Prompt-in, text-out transport supplied by the host application.
pub trait TextCompletion {
    /// Generates a completion for the prompt.
    fn complete(&self, prompt: &str) -> Result<String, ReasonerError>;
}

/// [`ReasoningClient`] implemented over a textual prompt-and-parse transport.
///
/// Builds a decision prompt, sends it through the [`TextCompletion`], and
/// parses the embedded JSON payload out of whatever prose comes back.
pub struct PromptReasoner<T: TextCompletion> {
    transport: T,
}

impl<T: TextCompletion> PromptReasoner<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: TextCompletion> ReasoningClient for PromptReasoner<T> {
    fn propose_action(
        &self,
        stimulus: &Stimulus,
        context: &ReasonerContext,
    ) -> Result<ActionProposal, ReasonerError> {
        let prompt = build_decision_prompt(stimulus, context);
        let response = self.transport.complete(&prompt)?;
        tracing::debug!(len = response.len(), "reasoner response received");
        parse_proposal(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npc_stimulus::StimulusType;

    struct CannedTransport(&'static str);

    impl TextCompletion for CannedTransport {
        fn complete(&self, _prompt: &str) -> Result<String, ReasonerError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingTransport;

    impl TextCompletion for FailingTransport {
        fn complete(&self, _prompt: &str) -> Result<String, ReasonerError> {
            Err(ReasonerError::Transport("connection refused".into()))
        }
    }

    fn stimulus() -> Stimulus {
        Stimulus::new("*raises weapon*", "player", StimulusType::Gesture)
    }

    #[test]
    fn prompt_reasoner_parses_embedded_payload() {
        let reasoner = PromptReasoner::new(CannedTransport(
            "Considering the threat, I choose: {\"action\": \"defend\", \"style\": \"cautious\"}. Good luck!",
        ));
        let proposal = reasoner
            .propose_action(&stimulus(), &ReasonerContext::default())
            .unwrap();
        assert_eq!(proposal.action, "defend");
        assert_eq!(
            proposal.parameters.get("style").and_then(|v| v.as_str()),
            Some("cautious")
        );
    }

    #[test]
    fn prompt_reasoner_propagates_transport_failure() {
        let reasoner = PromptReasoner::new(FailingTransport);
        let result = reasoner.propose_action(&stimulus(), &ReasonerContext::default());
        assert!(matches!(result, Err(ReasonerError::Transport(_))));
    }
}
