//! Indirect social positioning.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::SocialManeuvering;
    registry.register(ToolDescriptor::new(
        "ignore",
        "NPC deliberately ignores someone.",
        category,
        ignore,
    ));
    registry.register(ToolDescriptor::new(
        "avoid",
        "NPC steers clear of someone or something.",
        category,
        avoid,
    ));
    registry.register(ToolDescriptor::new(
        "join_group",
        "NPC joins a nearby group.",
        category,
        join_group,
    ));
    registry.register(ToolDescriptor::new(
        "leave_group",
        "NPC extracts themselves from a group.",
        category,
        leave_group,
    ));
    registry.register(ToolDescriptor::new(
        "show_politeness",
        "NPC makes a polite gesture.",
        category,
        show_politeness,
    ));
    registry.register(ToolDescriptor::new(
        "show_impatience",
        "NPC signals impatience.",
        category,
        show_impatience,
    ));
}

fn ignore(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    match params.text_or("subtlety", "obvious").as_str() {
        "subtle" => format!("NPC subtly ignores {target}, pretending not to notice."),
        "pointed" => format!("NPC pointedly ignores {target}, making their disinterest clear."),
        _ => format!("NPC obviously ignores {target}."),
    }
}

fn avoid(params: &ToolParams) -> String {
    let target = params.text_or("target", "an awkward situation");
    let reason = params.text_or("reason", "discomfort");
    format!("NPC actively tries to avoid {target} due to {reason}.")
}

fn join_group(params: &ToolParams) -> String {
    let group = params.text_or("group_description", "a nearby group");
    match params.text_or("approach_style", "casually").as_str() {
        "tentative" => format!("NPC tentatively approaches {group}, hoping to join."),
        "confident" => format!("NPC confidently walks over to {group} and joins in."),
        _ => format!("NPC casually tries to join {group}."),
    }
}

fn leave_group(params: &ToolParams) -> String {
    let group = params.text_or("group_description", "the current group");
    match params.text_or("reason", "politely_excuses_self").as_str() {
        "storms_off" => format!("NPC abruptly storms away from {group}."),
        "slips_away" => format!("NPC quietly slips away from {group} unnoticed."),
        _ => format!("NPC politely excuses themselves from {group}."),
    }
}

fn show_politeness(params: &ToolParams) -> String {
    let narration = match params.text_or("gesture", "nod").as_str() {
        "bow" => "NPC gives a respectful bow.",
        "smile" => "NPC offers a courteous smile.",
        "thanks" => "NPC expresses their thanks graciously.",
        _ => "NPC gives a polite nod.",
    };
    match params.text("target") {
        Some(target) => format!("{} (toward {target})", narration),
        None => narration.to_string(),
    }
}

fn show_impatience(params: &ToolParams) -> String {
    let intensity = params.number_or("intensity", 0.5);
    let adverb = if intensity < 0.4 {
        "slightly"
    } else if intensity > 0.7 {
        "very obviously"
    } else {
        "noticeably"
    };
    match params.text_or("behavior", "taps_foot").as_str() {
        "checks_surroundings" => format!("NPC {adverb} keeps glancing around, eager to move on."),
        "sighs" => format!("NPC sighs {adverb}, impatience showing."),
        _ => format!("NPC {adverb} taps their foot, waiting."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn politeness_names_a_target_when_given() {
        let mut params = ToolParams::new();
        params.insert("target", "the merchant");
        assert!(show_politeness(&params).contains("the merchant"));
    }

    #[test]
    fn leaving_styles_differ() {
        let mut storm = ToolParams::new();
        storm.insert("reason", "storms_off");
        assert!(leave_group(&storm).contains("storms"));
    }
}
