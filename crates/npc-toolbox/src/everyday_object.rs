//! Mundane object handling, the background texture of daily life.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::EverydayObject;
    registry.register(ToolDescriptor::new(
        "pick_up_object",
        "NPC picks up a nearby object.",
        category,
        pick_up_object,
    ));
    registry.register(ToolDescriptor::new(
        "put_down_object",
        "NPC sets down what they are holding.",
        category,
        put_down_object,
    ));
    registry.register(ToolDescriptor::new(
        "open_object",
        "NPC opens a door, container, or similar.",
        category,
        open_object,
    ));
    registry.register(ToolDescriptor::new(
        "close_object",
        "NPC closes a door, container, or similar.",
        category,
        close_object,
    ));
    registry.register(ToolDescriptor::new(
        "use_everyday_object",
        "NPC uses a mundane object for its purpose.",
        category,
        use_everyday_object,
    ));
    registry.register(ToolDescriptor::new(
        "tidy_up",
        "NPC straightens up their surroundings.",
        category,
        tidy_up,
    ));
    registry.register(ToolDescriptor::new(
        "prepare_food_or_drink",
        "NPC prepares something to eat or drink.",
        category,
        prepare_food_or_drink,
    ));
}

fn pick_up_object(params: &ToolParams) -> String {
    let item = params.text_or("item_name", "a nearby object");
    let purpose = params.text_or("purpose", "examine");
    format!("NPC picks up {item} to {purpose} it.")
}

fn put_down_object(params: &ToolParams) -> String {
    let item = params.text_or("item_name", "the object they are holding");
    let location = params.text_or("location", "a nearby surface");
    format!("NPC puts down {item} on {location}.")
}

fn open_object(params: &ToolParams) -> String {
    let object = params.text_or("object_to_open", "a door");
    let manner = params.text_or("manner", "normally");
    format!("NPC {manner} opens {object}.")
}

fn close_object(params: &ToolParams) -> String {
    let object = params.text_or("object_to_close", "a door");
    let manner = params.text_or("manner", "gently");
    format!("NPC {manner} closes {object}.")
}

fn use_everyday_object(params: &ToolParams) -> String {
    let item = params.text_or("item_name", "a tool");
    let action = params.text_or("action", "its intended purpose");
    format!("NPC uses {item} for {action}.")
}

fn tidy_up(params: &ToolParams) -> String {
    let area = params.text_or("area", "their personal space");
    let thoroughness = params.text_or("thoroughness", "quickly");
    format!("NPC {thoroughness} tidies up {area}.")
}

fn prepare_food_or_drink(params: &ToolParams) -> String {
    let item = params.text_or("item_to_prepare", "a cup of tea");
    let complexity = params.text_or("complexity", "simple");
    format!("NPC prepares a {complexity} {item}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_complete_sentences() {
        let empty = ToolParams::new();
        for narration in [
            pick_up_object(&empty),
            put_down_object(&empty),
            open_object(&empty),
            close_object(&empty),
            use_everyday_object(&empty),
            tidy_up(&empty),
            prepare_food_or_drink(&empty),
        ] {
            assert!(narration.starts_with("NPC"));
            assert!(narration.ends_with('.'));
        }
    }
}
