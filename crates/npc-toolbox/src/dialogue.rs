//! Direct spoken responses.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    registry.register(ToolDescriptor::new(
        "dialogue_response",
        "Generates an in-character dialogue response.",
        ToolCategory::Dialogue,
        dialogue_response,
    ));
}

/// Renders a spoken reply. Actual line generation belongs to the host; this
/// tool narrates the act of replying and carries the prompt through.
fn dialogue_response(params: &ToolParams) -> String {
    let tone = params.text_or("tone", "neutral");
    match params.text("prompt") {
        Some(prompt) => format!("NPC replies in a {tone} tone, addressing: {prompt}"),
        None => format!("NPC says something in a {tone} tone."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_prompt_and_tone() {
        let mut params = ToolParams::new();
        params.insert("prompt", "Who goes there?");
        params.insert("tone", "wary");
        let line = dialogue_response(&params);
        assert!(line.contains("Who goes there?"));
        assert!(line.contains("wary"));
    }

    #[test]
    fn response_works_without_a_prompt() {
        assert!(!dialogue_response(&ToolParams::new()).is_empty());
    }
}
