//! Personal upkeep and recovery.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

use crate::pick;

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::SelfCare;
    registry.register(ToolDescriptor::new(
        "eat",
        "NPC eats something.",
        category,
        eat,
    ));
    registry.register(ToolDescriptor::new(
        "drink",
        "NPC drinks something.",
        category,
        drink,
    ));
    registry.register(ToolDescriptor::new(
        "rest",
        "NPC takes a moment to rest.",
        category,
        rest,
    ));
    registry.register(ToolDescriptor::new(
        "groom",
        "NPC tidies their own appearance.",
        category,
        groom,
    ));
    registry.register(ToolDescriptor::new(
        "seek_comfort",
        "NPC looks for something comforting.",
        category,
        seek_comfort,
    ));
    registry.register(ToolDescriptor::new(
        "stretch",
        "NPC stretches their limbs.",
        category,
        stretch,
    ));
}

fn eat(params: &ToolParams) -> String {
    let food = params.text_or("food_item", "nearby food");
    match params.text_or("manner", "casually").as_str() {
        "ravenously" => format!("NPC devours {food} ravenously."),
        "delicately" => format!("NPC picks delicately at {food}."),
        _ => format!("NPC casually eats {food}."),
    }
}

fn drink(params: &ToolParams) -> String {
    let beverage = params.text_or("beverage_item", "water");
    match params.text_or("manner", "normally").as_str() {
        "gulping" => format!("NPC gulps down {beverage} thirstily."),
        "sipping" => format!("NPC sips {beverage} slowly."),
        _ => format!("NPC drinks some {beverage}."),
    }
}

fn rest(params: &ToolParams) -> String {
    let duration = params.text_or("duration", "briefly");
    match params.text_or("posture", "sits_down").as_str() {
        "leans_against_wall" => format!("NPC leans against a wall to rest {duration}."),
        "lies_down" => format!("NPC lies down to rest {duration}."),
        _ => format!("NPC sits down to rest {duration}."),
    }
}

fn groom(params: &ToolParams) -> String {
    match params.text_or("activity", "smooths_clothes").as_str() {
        "fixes_hair" => "NPC runs a hand through their hair, tidying it.".to_string(),
        "wipes_face" => "NPC wipes their face clean.".to_string(),
        _ => "NPC smooths out the wrinkles in their clothes.".to_string(),
    }
}

fn seek_comfort(params: &ToolParams) -> String {
    match params.text_or("method", "find_quiet_place").as_str() {
        "familiar_object" => "NPC reaches for a familiar object, drawing comfort from it."
            .to_string(),
        "warm_drink" => "NPC fixes themselves a warm drink to settle their nerves.".to_string(),
        _ => "NPC withdraws to a quiet corner to collect themselves.".to_string(),
    }
}

fn stretch(_: &ToolParams) -> String {
    pick(&[
        "NPC stretches their arms above their head with a quiet groan.",
        "NPC rolls their shoulders, working out the stiffness.",
        "NPC arches their back and stretches until something pops.",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_posture_changes_the_narration() {
        let mut lying = ToolParams::new();
        lying.insert("posture", "lies_down");
        assert!(rest(&lying).contains("lies down"));
    }
}
