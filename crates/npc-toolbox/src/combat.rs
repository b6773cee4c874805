//! Combat actions.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Combat;
    registry.register(ToolDescriptor::new(
        "attack",
        "NPC attacks a target.",
        category,
        attack,
    ));
    registry.register(ToolDescriptor::new(
        "defend",
        "NPC adopts a defensive stance.",
        category,
        defend,
    ));
    registry.register(ToolDescriptor::new(
        "threaten",
        "NPC makes a threat to intimidate.",
        category,
        threaten,
    ));
    registry.register(ToolDescriptor::new(
        "disarm",
        "NPC tries to remove a weapon from target.",
        category,
        disarm,
    ));
    registry.register(ToolDescriptor::new(
        "stun",
        "NPC attempts to momentarily incapacitate target.",
        category,
        stun,
    ));
}

fn attack(params: &ToolParams) -> String {
    let target = params.text_or("target", "the threat");
    let strength = params.number_or("strength", 0.5);
    if strength < 0.3 {
        format!("NPC makes a hesitant, weak attack toward {target}.")
    } else if strength < 0.7 {
        format!("NPC attacks {target} with moderate force.")
    } else {
        format!("NPC launches a powerful, aggressive attack at {target}!")
    }
}

fn defend(params: &ToolParams) -> String {
    match params.text_or("style", "cautious").as_str() {
        "aggressive" => {
            "NPC adopts an aggressive defensive posture, ready to counter-attack.".to_string()
        }
        "balanced" => "NPC takes a balanced defensive stance, watching for openings.".to_string(),
        _ => "NPC assumes a cautious defensive position, prioritizing protection.".to_string(),
    }
}

fn threaten(params: &ToolParams) -> String {
    let intensity = params.number_or("intensity", 0.5);
    let adverb = if intensity < 0.4 {
        "mildly"
    } else if intensity > 0.7 {
        "severely"
    } else {
        "firmly"
    };
    match params.text_or("threat_type", "verbal").as_str() {
        "physical" => format!("NPC {adverb} threatens with aggressive body language and posturing."),
        "display_weapon" => {
            format!("NPC {adverb} threatens by displaying their weapon menacingly.")
        }
        _ => format!("NPC {adverb} threatens with intimidating words."),
    }
}

fn disarm(params: &ToolParams) -> String {
    let target = params.text_or("target", "the opponent");
    format!("NPC attempts to disarm {target}.")
}

fn stun(params: &ToolParams) -> String {
    let target = params.text_or("target", "the opponent");
    match params.text_or("method", "physical").as_str() {
        "magical" => format!("NPC casts a stunning spell at {target}."),
        "verbal" => format!("NPC shouts a disorienting remark at {target}."),
        _ => format!("NPC attempts to physically stun {target}."),
    }
}
