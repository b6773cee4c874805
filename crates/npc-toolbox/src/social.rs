//! Direct social engagement.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Social;
    registry.register(ToolDescriptor::new(
        "greet",
        "NPC greets someone.",
        category,
        greet,
    ));
    registry.register(ToolDescriptor::new(
        "offer_help",
        "NPC offers assistance.",
        category,
        offer_help,
    ));
    registry.register(ToolDescriptor::new(
        "bargain",
        "NPC negotiates a deal.",
        category,
        bargain,
    ));
    registry.register(ToolDescriptor::new(
        "request_info",
        "NPC asks for information.",
        category,
        request_info,
    ));
    registry.register(ToolDescriptor::new(
        "befriend",
        "NPC works at building a friendship.",
        category,
        befriend,
    ));
    registry.register(ToolDescriptor::new(
        "apologize",
        "NPC apologizes for something.",
        category,
        apologize,
    ));
}

fn greet(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    match params.text_or("formality", "neutral").as_str() {
        "formal" => format!("NPC formally greets {target} with proper etiquette."),
        "casual" => format!("NPC casually says hello to {target}."),
        "cold" => format!("NPC acknowledges {target} with a curt, cold greeting."),
        "warm" => format!("NPC warmly welcomes {target} with enthusiasm."),
        _ => format!("NPC greets {target}."),
    }
}

fn offer_help(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let task = params.text_or("task", "the current situation");
    format!("NPC offers to help {target} with {task}.")
}

fn bargain(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let offer = params.text_or("offer", "a deal");
    match params.text_or("stance", "neutral").as_str() {
        "desperate" => format!("NPC desperately tries to negotiate {offer} with {target}."),
        "firm" => format!("NPC firmly states their terms for {offer} to {target}."),
        "aggressive" => format!("NPC aggressively pushes for {offer} in negotiations with {target}."),
        "collaborative" => format!("NPC suggests {offer} to {target} in a collaborative manner."),
        _ => format!("NPC attempts to negotiate {offer} with {target}."),
    }
}

fn request_info(params: &ToolParams) -> String {
    let topic = params.text_or("topic", "the situation");
    match params.text_or("urgency", "normal").as_str() {
        "casual" => format!("NPC casually asks about {topic}."),
        "urgent" => format!("NPC urgently requests information about {topic}."),
        "demanding" => format!("NPC demands to know about {topic}."),
        _ => format!("NPC inquires about {topic}."),
    }
}

fn befriend(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    match params.text_or("approach", "genuine").as_str() {
        "careful" => format!("NPC carefully attempts to build rapport with {target}."),
        "calculated" => format!("NPC tries to gain {target}'s trust with ulterior motives."),
        "enthusiastic" => format!("NPC enthusiastically tries to befriend {target}."),
        _ => format!("NPC makes a genuine effort to befriend {target}."),
    }
}

fn apologize(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let sincerity = params.number_or("sincerity", 0.5);
    if sincerity < 0.3 {
        format!("NPC gives {target} a clearly insincere, forced apology.")
    } else if sincerity > 0.7 {
        format!("NPC offers {target} a deeply sincere, heartfelt apology.")
    } else {
        format!("NPC apologizes to {target}.")
    }
}
