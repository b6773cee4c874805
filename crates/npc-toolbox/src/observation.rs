//! Deliberate observation of people and places.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

use crate::pick;

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Observation;
    registry.register(ToolDescriptor::new(
        "observe_person",
        "NPC studies a person closely.",
        category,
        observe_person,
    ));
    registry.register(ToolDescriptor::new(
        "observe_environment",
        "NPC surveys the area.",
        category,
        observe_environment,
    ));
    registry.register(ToolDescriptor::new(
        "eavesdrop",
        "NPC listens in on a conversation.",
        category,
        eavesdrop,
    ));
    registry.register(ToolDescriptor::new(
        "read_body_language",
        "NPC interprets someone's nonverbal cues.",
        category,
        read_body_language,
    ));
    registry.register(ToolDescriptor::new(
        "investigate_anomaly",
        "NPC looks into something out of place.",
        category,
        investigate_anomaly,
    ));
}

fn observe_person(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let subtlety = params.text_or("subtlety", "discreetly");
    match params.text_or("focus", "general_demeanor").as_str() {
        "hands" => format!("NPC {subtlety} watches {target}'s hands for sudden movements."),
        "face" => format!("NPC {subtlety} studies {target}'s face for a tell."),
        "equipment" => format!("NPC {subtlety} sizes up {target}'s gear and weapons."),
        _ => format!("NPC {subtlety} takes in {target}'s overall demeanor."),
    }
}

fn observe_environment(params: &ToolParams) -> String {
    let area = params.text_or("area", "the immediate area");
    match params.text_or("purpose", "situational_awareness").as_str() {
        "escape_routes" => format!("NPC scans {area}, noting possible ways out."),
        "valuables" => format!("NPC looks over {area} with an eye for anything valuable."),
        _ => format!("NPC surveys {area}, building a picture of the situation."),
    }
}

fn eavesdrop(params: &ToolParams) -> String {
    let conversation = params.text_or("target_conversation", "a nearby conversation");
    let stealth = params.number_or("stealth_level", 0.5);
    if stealth > 0.7 {
        format!("NPC very discreetly attempts to overhear {conversation}.")
    } else if stealth > 0.3 {
        format!("NPC tries to subtly listen in on {conversation}.")
    } else {
        format!("NPC poorly attempts to eavesdrop on {conversation}, likely being noticed.")
    }
}

fn read_body_language(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let accuracy = params.number_or("accuracy_chance", 0.6);
    let reading = pick(&[
        "They seem tense.",
        "They appear relaxed.",
        "Something about them reads as evasive.",
        "They look sincere enough.",
    ]);
    if accuracy > 0.7 {
        format!("NPC keenly observes {target}'s body language, gaining insight. ({reading})")
    } else if accuracy > 0.4 {
        format!("NPC attempts to decipher {target}'s body language. ({reading})")
    } else {
        format!(
            "NPC struggles to interpret {target}'s body language. (NPC seems confused by the signals.)"
        )
    }
}

fn investigate_anomaly(params: &ToolParams) -> String {
    let anomaly = params.text_or("anomaly", "a strange noise");
    let caution = params.number_or("caution_level", 0.5);
    if caution > 0.7 {
        format!("NPC cautiously approaches to investigate {anomaly}.")
    } else if caution > 0.3 {
        format!("NPC investigates {anomaly} with moderate caution.")
    } else {
        format!("NPC recklessly rushes to investigate {anomaly}.")
    }
}
