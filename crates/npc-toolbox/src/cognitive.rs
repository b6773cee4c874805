//! Thinking and planning actions, all externally visible as body language.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

use crate::pick;

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Cognitive;
    registry.register(ToolDescriptor::new(
        "ponder",
        "NPC pauses to think something over.",
        category,
        ponder,
    ));
    registry.register(ToolDescriptor::new(
        "make_plan",
        "NPC visibly formulates a plan.",
        category,
        make_plan,
    ));
    registry.register(ToolDescriptor::new(
        "reconsider",
        "NPC rethinks a previous position.",
        category,
        reconsider,
    ));
    registry.register(ToolDescriptor::new(
        "daydream",
        "NPC drifts off into their own thoughts.",
        category,
        daydream,
    ));
    registry.register(ToolDescriptor::new(
        "recall_memory",
        "NPC tries to remember something relevant.",
        category,
        recall_memory,
    ));
    registry.register(ToolDescriptor::new(
        "focus_attention",
        "NPC concentrates on one thing.",
        category,
        focus_attention,
    ));
}

fn ponder(params: &ToolParams) -> String {
    let topic = params.text_or("topic", "the current situation");
    let duration = params.text_or("duration", "a moment");
    format!("NPC becomes quiet and appears to ponder {topic} for {duration}.")
}

fn make_plan(params: &ToolParams) -> String {
    let objective = params.text_or("objective", "their next move");
    let complexity = params.text_or("complexity", "simple");
    format!("NPC seems to be formulating a {complexity} plan regarding {objective}.")
}

fn reconsider(params: &ToolParams) -> String {
    let topic = params.text_or("topic", "their stance");
    format!("NPC pauses, appearing to reconsider {topic}.")
}

fn daydream(_: &ToolParams) -> String {
    pick(&[
        "NPC's gaze drifts into the distance, lost in thought.",
        "NPC stares absently at nothing in particular.",
        "NPC seems momentarily somewhere else entirely.",
    ])
}

fn recall_memory(params: &ToolParams) -> String {
    let topic = params.text_or("topic", "a past event");
    match params.text_or("effort_level", "moderate").as_str() {
        "high" => format!("NPC concentrates hard, trying to recall details about {topic}."),
        "low" => format!("NPC casually tries to remember something about {topic}."),
        _ => format!("NPC makes an effort to recall a memory concerning {topic}."),
    }
}

fn focus_attention(params: &ToolParams) -> String {
    let target = params.text_or("target", "the task at hand");
    let intensity = params.number_or("intensity", 0.7);
    if intensity > 0.7 {
        format!("NPC focuses with intense concentration on {target}.")
    } else if intensity > 0.3 {
        format!("NPC directs their attention towards {target}.")
    } else {
        format!("NPC gives fleeting attention to {target}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recall_effort_levels_differ() {
        let mut high = ToolParams::new();
        high.insert("effort_level", "high");
        let mut low = ToolParams::new();
        low.insert("effort_level", "low");
        assert_ne!(recall_memory(&high), recall_memory(&low));
    }

    #[test]
    fn daydream_always_narrates() {
        assert!(!daydream(&ToolParams::new()).is_empty());
    }
}
