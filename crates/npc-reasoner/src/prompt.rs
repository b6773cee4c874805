//! Decision prompt construction.
//!
//! Renders a stimulus plus orchestrator context into the textual prompt the
//! prompt-and-parse transport sends out. The format instructions pin the
//! response to a single JSON object; the parser stays tolerant anyway.

use npc_stimulus::Stimulus;

use crate::client::ReasonerContext;

/// Builds the decision prompt for a stimulus and its context.
pub fn build_decision_prompt(stimulus: &Stimulus, context: &ReasonerContext) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        "Based on the following interpreted stimulus and context, decide the next best action."
            .to_string(),
    );

    parts.push("\n[Interpreted Stimulus]".to_string());
    parts.push(format!("  Raw Content: {}", stimulus.raw_content));
    parts.push(format!("  Actor: {}", stimulus.source));
    parts.push(format!("  Stimulus Type: {}", stimulus.stimulus_type.name()));
    parts.push(format!(
        "  Schema: [{}]",
        stimulus
            .schema
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    parts.push(format!(
        "  Intent: {}",
        stimulus.intent.map(|i| i.name()).unwrap_or("none")
    ));
    parts.push(format!(
        "  Overall Salience: {:.2}",
        stimulus.salience_score()
    ));
    if let Some(location) = &stimulus.location {
        parts.push(format!("  Location: {location}"));
    }

    parts.push("\n[Character Context]".to_string());
    parts.push(format!("  Personality: {}", context.personality_summary));
    if !context.quirks.is_empty() {
        parts.push(format!("  Quirks: {}", context.quirks.join(", ")));
    }
    parts.push(format!("  Mood: {}", context.mood));
    parts.push(format!("  Stress: {}", context.stress));

    if !context.ranked_suggestions.is_empty() {
        parts.push("\n[Heuristic Suggestions]".to_string());
        for (name, weight) in &context.ranked_suggestions {
            parts.push(format!("  - {name} (weight {weight:.3})"));
        }
    }

    if !context.available_tools.is_empty() {
        parts.push("\n[Available Actions]".to_string());
        for tool in &context.available_tools {
            parts.push(format!("  - {}: {}", tool.name, tool.description));
        }
    }

    parts.push("\n[Output Format]".to_string());
    parts.push(
        "Provide your decision as a JSON object with the action and any relevant parameters."
            .to_string(),
    );
    parts.push(r#"Example: {"action": "greet", "target": "Player", "tone": "friendly"}"#.to_string());
    parts.push(r#"Example: {"action": "attack", "target": "Player", "strength": 0.7}"#.to_string());
    parts.push("IMPORTANT: Respond ONLY with the JSON object.".to_string());

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use npc_stimulus::{SalienceDimension, StimulusIntent, StimulusSchema, StimulusType};

    #[test]
    fn prompt_carries_stimulus_and_context() {
        let stimulus = Stimulus::new("You're worthless.", "player", StimulusType::Dialogue)
            .with_schema(StimulusSchema::Insult)
            .with_intent(StimulusIntent::Humiliate)
            .with_salience(SalienceDimension::Emotional, 0.9);
        let context = ReasonerContext {
            personality_summary: "aggressiveness=0.90".to_string(),
            quirks: vec!["quick_to_anger".to_string()],
            mood: "sour".to_string(),
            stress: "elevated".to_string(),
            ranked_suggestions: vec![("argue".to_string(), 0.31)],
            available_tools: vec![crate::client::ToolListing {
                name: "argue".to_string(),
                description: "NPC argues a point.".to_string(),
            }],
        };

        let prompt = build_decision_prompt(&stimulus, &context);
        assert!(prompt.contains("You're worthless."));
        assert!(prompt.contains("Stimulus Type: dialogue"));
        assert!(prompt.contains("Schema: [insult]"));
        assert!(prompt.contains("Intent: humiliate"));
        assert!(prompt.contains("aggressiveness=0.90"));
        assert!(prompt.contains("argue (weight 0.310)"));
        assert!(prompt.contains("Respond ONLY with the JSON object."));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let stimulus = Stimulus::new("thunder", "environment", StimulusType::Environment);
        let prompt = build_decision_prompt(&stimulus, &ReasonerContext::default());
        assert!(prompt.contains("Intent: none"));
        assert!(!prompt.contains("[Heuristic Suggestions]"));
        assert!(!prompt.contains("[Available Actions]"));
    }
}
