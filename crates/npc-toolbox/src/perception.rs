//! Active sensing and assessment.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Perception;
    registry.register(ToolDescriptor::new(
        "scan_for_threats",
        "NPC checks the area for danger.",
        category,
        scan_for_threats,
    ));
    registry.register(ToolDescriptor::new(
        "detect_magic",
        "NPC senses for magical presence.",
        category,
        detect_magic,
    ));
    registry.register(ToolDescriptor::new(
        "assess_intent",
        "NPC tries to work out what someone wants.",
        category,
        assess_intent,
    ));
    registry.register(ToolDescriptor::new(
        "identify_object",
        "NPC tries to identify an unfamiliar object.",
        category,
        identify_object,
    ));
    registry.register(ToolDescriptor::new(
        "track_target",
        "NPC follows a trail.",
        category,
        track_target,
    ));
}

fn scan_for_threats(params: &ToolParams) -> String {
    let thoroughness = params.number_or("thoroughness", 0.6);
    if thoroughness < 0.3 {
        "NPC gives a quick, cursory glance around for threats.".to_string()
    } else if thoroughness < 0.7 {
        "NPC carefully scans the area for potential threats.".to_string()
    } else {
        "NPC meticulously and slowly scans every corner for hidden dangers.".to_string()
    }
}

fn detect_magic(params: &ToolParams) -> String {
    let radius = params.number_or("radius", 10.0) as i64;
    format!("NPC attempts to detect magic within a {radius}-meter radius.")
}

fn assess_intent(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let method = params.text_or("method", "observation");
    format!("NPC carefully observes {target} using {method}, trying to understand their intentions.")
}

fn identify_object(params: &ToolParams) -> String {
    let object = params.text_or("object_name", "the strange device");
    let skill = params.text_or("skill_used", "lore");
    format!("NPC attempts to identify {object} using their knowledge of {skill}.")
}

fn track_target(params: &ToolParams) -> String {
    let target = params.text_or("target", "the fugitive");
    let difficulty = params.number_or("difficulty", 0.5);
    if difficulty < 0.3 {
        format!("NPC easily picks up the trail of {target} and begins tracking.")
    } else if difficulty < 0.7 {
        format!("NPC carefully searches for {target}'s tracks and starts following.")
    } else {
        format!("NPC struggles but manages to find faint tracks of {target} and attempts to follow.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_difficulty_shapes_the_effort() {
        let mut hard = ToolParams::new();
        hard.insert_number("difficulty", 0.9);
        assert!(track_target(&hard).contains("struggles"));
    }

    #[test]
    fn detect_magic_reports_its_radius() {
        let mut params = ToolParams::new();
        params.insert_number("radius", 25.0);
        assert!(detect_magic(&params).contains("25-meter"));
    }
}
