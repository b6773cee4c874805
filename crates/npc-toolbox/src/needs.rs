//! Survival needs.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Needs;
    registry.register(ToolDescriptor::new(
        "seek_shelter",
        "NPC looks for shelter from danger or weather.",
        category,
        seek_shelter,
    ));
    registry.register(ToolDescriptor::new(
        "find_food",
        "NPC tries to obtain food.",
        category,
        find_food,
    ));
    registry.register(ToolDescriptor::new(
        "find_water",
        "NPC looks for drinkable water.",
        category,
        find_water,
    ));
    registry.register(ToolDescriptor::new(
        "heal_self",
        "NPC tends to their own injuries.",
        category,
        heal_self,
    ));
    registry.register(ToolDescriptor::new(
        "warm_self",
        "NPC tries to get warm.",
        category,
        warm_self,
    ));
}

fn seek_shelter(params: &ToolParams) -> String {
    let reason = params.text_or("reason", "danger");
    let urgency = params.number_or("urgency", 0.7);
    let adverb = if urgency > 0.7 {
        "urgently"
    } else if urgency > 0.3 {
        "purposefully"
    } else {
        "casually"
    };
    format!("NPC {adverb} seeks shelter due to {reason}.")
}

fn find_food(params: &ToolParams) -> String {
    let method = params.text_or("method", "foraging");
    format!("NPC attempts to find food by {method}.")
}

fn find_water(_: &ToolParams) -> String {
    "NPC looks for a source of drinkable water.".to_string()
}

fn heal_self(params: &ToolParams) -> String {
    let method = params.text_or("method", "bandages");
    let severity = params.number_or("severity", 0.5);
    let severity_desc = if severity > 0.7 {
        "serious"
    } else if severity > 0.3 {
        "moderate"
    } else {
        "minor"
    };
    format!("NPC attempts to heal their {severity_desc} injuries using {method}.")
}

fn warm_self(params: &ToolParams) -> String {
    let method = params.text_or("method", "finding a fire");
    format!("NPC attempts to warm themselves by {method}.")
}
