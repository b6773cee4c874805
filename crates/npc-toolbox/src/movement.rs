//! Positioning and evasion actions.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Movement;
    registry.register(ToolDescriptor::new(
        "approach",
        "NPC moves toward a target.",
        category,
        approach,
    ));
    registry.register(ToolDescriptor::new(
        "retreat",
        "NPC backs away to a safer distance.",
        category,
        retreat,
    ));
    registry.register(ToolDescriptor::new(
        "flee",
        "NPC attempts to flee from danger.",
        category,
        flee,
    ));
    registry.register(ToolDescriptor::new(
        "circle",
        "NPC circles around a target.",
        category,
        circle,
    ));
    registry.register(ToolDescriptor::new(
        "hide",
        "NPC conceals themselves from view.",
        category,
        hide,
    ));
    registry.register(ToolDescriptor::new(
        "take_cover",
        "NPC ducks behind cover.",
        category,
        take_cover,
    ));
}

fn approach(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    match params.text_or("manner", "neutral").as_str() {
        "cautious" => format!("NPC carefully and slowly approaches {target}."),
        "friendly" => format!("NPC approaches {target} with a friendly demeanor."),
        "aggressive" => format!("NPC aggressively advances toward {target}."),
        "stealthy" => format!("NPC quietly sneaks toward {target}, trying to remain unnoticed."),
        _ => format!("NPC approaches {target}."),
    }
}

fn retreat(params: &ToolParams) -> String {
    match params.text_or("speed", "moderate").as_str() {
        "slow" => "NPC backs away slowly, maintaining vigilance.".to_string(),
        "fast" => "NPC quickly retreats to a safer position.".to_string(),
        _ => "NPC retreats at a measured pace to maintain distance.".to_string(),
    }
}

fn flee(params: &ToolParams) -> String {
    match params.text_or("speed", "fast").as_str() {
        "moderate" => "NPC hurries away, putting distance between themselves and the danger."
            .to_string(),
        _ => "NPC turns and runs away to seek safety.".to_string(),
    }
}

fn circle(params: &ToolParams) -> String {
    let target = params.text_or("target", "the opponent");
    match params.text_or("purpose", "evaluate").as_str() {
        "exploit" => format!("NPC circles {target}, looking for a weakness to exploit."),
        "distance" => format!("NPC circles {target}, keeping a safe distance."),
        "confuse" => format!("NPC circles {target} erratically to cause confusion."),
        _ => format!("NPC circles {target}, carefully assessing the situation."),
    }
}

fn hide(params: &ToolParams) -> String {
    let location = params.text_or("location", "nearby cover");
    format!("NPC hides behind {location}.")
}

fn take_cover(params: &ToolParams) -> String {
    let cover = params.text_or("cover_type", "available cover");
    format!("NPC quickly takes cover behind {cover}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_manner_shapes_the_gait() {
        let mut stealthy = ToolParams::new();
        stealthy.insert("manner", "stealthy");
        assert!(approach(&stealthy).contains("sneaks"));
    }

    #[test]
    fn flee_defaults_to_a_full_run() {
        assert!(flee(&ToolParams::new()).contains("runs away"));
    }
}
