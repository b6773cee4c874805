//! Small involuntary-looking tells.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::SubtleExpression;
    registry.register(ToolDescriptor::new(
        "sigh",
        "NPC lets out a sigh.",
        category,
        sigh,
    ));
    registry.register(ToolDescriptor::new(
        "fidget",
        "NPC fidgets restlessly.",
        category,
        fidget,
    ));
    registry.register(ToolDescriptor::new(
        "shift_weight",
        "NPC shifts their weight.",
        category,
        shift_weight,
    ));
    registry.register(ToolDescriptor::new(
        "glance",
        "NPC glances at something.",
        category,
        glance,
    ));
    registry.register(ToolDescriptor::new(
        "raise_eyebrow",
        "NPC raises an eyebrow.",
        category,
        raise_eyebrow,
    ));
    registry.register(ToolDescriptor::new(
        "tighten_lips",
        "NPC presses their lips together.",
        category,
        tighten_lips,
    ));
}

fn sigh(params: &ToolParams) -> String {
    match params.text_or("emotion_implied", "weariness").as_str() {
        "relief" => "NPC exhales a long sigh of relief.".to_string(),
        "frustration" => "NPC sighs sharply in frustration.".to_string(),
        "resignation" => "NPC sighs, resigned to the situation.".to_string(),
        _ => "NPC lets out a weary sigh.".to_string(),
    }
}

fn fidget(params: &ToolParams) -> String {
    let manner = params.text_or("manner", "taps_fingers").replace('_', " ");
    let reason = params.text_or("reason", "nervousness");
    format!("NPC fidgets by {manner}, perhaps due to {reason}.")
}

fn shift_weight(params: &ToolParams) -> String {
    let reason = params.text_or("reason", "discomfort");
    format!("NPC subtly shifts their weight from one foot to the other, possibly indicating {reason}.")
}

fn glance(params: &ToolParams) -> String {
    let target = params.text_or("target", "their surroundings");
    match params.text_or("expression", "neutral").as_str() {
        "suspicious" => format!("NPC shoots a suspicious glance at {target}."),
        "nervous" => format!("NPC glances nervously at {target}."),
        "curious" => format!("NPC steals a curious glance at {target}."),
        _ => format!("NPC glances briefly at {target}."),
    }
}

fn raise_eyebrow(params: &ToolParams) -> String {
    let emotion = params.text_or("emotion_implied", "skepticism");
    format!("NPC raises an eyebrow, subtly expressing {emotion}.")
}

fn tighten_lips(params: &ToolParams) -> String {
    let reason = params.text_or("reason", "displeasure");
    format!("NPC tightens their lips, a sign of {reason}.")
}
