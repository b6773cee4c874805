//! Interactions with the surrounding scene.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Environmental;
    registry.register(ToolDescriptor::new(
        "search_area",
        "NPC searches the surroundings for something.",
        category,
        search_area,
    ));
    registry.register(ToolDescriptor::new(
        "interact_environment",
        "NPC manipulates something in the scene.",
        category,
        interact_environment,
    ));
    registry.register(ToolDescriptor::new(
        "create_distraction",
        "NPC diverts attention elsewhere.",
        category,
        create_distraction,
    ));
    registry.register(ToolDescriptor::new(
        "set_trap",
        "NPC prepares a trap or ambush.",
        category,
        set_trap,
    ));
    registry.register(ToolDescriptor::new(
        "listen",
        "NPC listens carefully to the surroundings.",
        category,
        listen,
    ));
}

fn search_area(params: &ToolParams) -> String {
    let target = params.text_or("target", "anything unusual");
    let area = params.text_or("area", "the surroundings");
    let thoroughness = params.number_or("thoroughness", 0.5);
    if thoroughness < 0.3 {
        format!("NPC quickly glances around {area}, looking for {target}.")
    } else if thoroughness < 0.7 {
        format!("NPC methodically searches {area} for {target}.")
    } else {
        format!("NPC meticulously investigates every part of {area}, determined to find {target}.")
    }
}

fn interact_environment(params: &ToolParams) -> String {
    let object = params.text_or("object_name", "the object");
    let interaction = params.text_or("interaction", "examines");
    format!("NPC {interaction} {object}.")
}

fn create_distraction(params: &ToolParams) -> String {
    let scale = params.text_or("scale", "moderate");
    match params.text_or("method", "noise").as_str() {
        "visual" => format!("NPC creates a {scale} visual distraction to divert attention."),
        "staged" => format!("NPC stages a {scale} event to distract observers."),
        "thrown" => format!("NPC throws something to create a {scale} distraction."),
        _ => format!("NPC creates a {scale} noise to cause a distraction."),
    }
}

fn set_trap(params: &ToolParams) -> String {
    let target = params.text_or("target", "enemies");
    match params.text_or("trap_type", "simple").as_str() {
        "elaborate" => format!("NPC carefully sets up an elaborate trap to catch {target}."),
        "ambush" => format!("NPC prepares an ambush position to surprise {target}."),
        "alarm" => format!("NPC sets a trap that will warn of {target} approaching."),
        _ => format!("NPC quickly sets a simple trap for {target}."),
    }
}

fn listen(params: &ToolParams) -> String {
    let focus = params.text_or("focus", "surroundings");
    let intensity = params.number_or("intensity", 0.5);
    if intensity < 0.3 {
        format!("NPC casually listens to {focus}.")
    } else if intensity < 0.7 {
        format!("NPC attentively listens to {focus}.")
    } else {
        format!("NPC listens intently to {focus}, blocking out all other distractions.")
    }
}
