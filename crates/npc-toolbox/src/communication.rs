//! Verbal influence actions beyond plain dialogue.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

use crate::pick_owned;

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Communication;
    registry.register(ToolDescriptor::new(
        "persuade",
        "NPC tries to talk someone into something.",
        category,
        persuade,
    ));
    registry.register(ToolDescriptor::new(
        "deceive",
        "NPC misleads someone deliberately.",
        category,
        deceive,
    ));
    registry.register(ToolDescriptor::new(
        "gossip",
        "NPC shares a rumor about someone.",
        category,
        gossip,
    ));
    registry.register(ToolDescriptor::new(
        "complain",
        "NPC voices dissatisfaction.",
        category,
        complain,
    ));
    registry.register(ToolDescriptor::new(
        "comfort",
        "NPC consoles someone in distress.",
        category,
        comfort,
    ));
    registry.register(ToolDescriptor::new(
        "encourage",
        "NPC cheers someone on.",
        category,
        encourage,
    ));
    registry.register(ToolDescriptor::new(
        "advise",
        "NPC offers advice on a matter.",
        category,
        advise,
    ));
    registry.register(ToolDescriptor::new(
        "argue",
        "NPC pushes back on a point of disagreement.",
        category,
        argue,
    ));
}

fn persuade(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let topic = params.text_or("topic", "a course of action");
    match params.text_or("approach", "logical").as_str() {
        "emotional" => format!("NPC appeals to {target}'s feelings, urging them toward {topic}."),
        "authoritative" => {
            format!("NPC invokes their standing to press {target} about {topic}.")
        }
        _ => format!("NPC lays out a reasoned case to {target} for {topic}."),
    }
}

fn deceive(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let topic = params.text_or("topic", "a secret");
    match params.text_or("method", "omission").as_str() {
        "fabrication" => format!("NPC tells {target} an outright fabrication about {topic}."),
        "misdirection" => {
            format!("NPC steers {target}'s attention away from {topic} with a side remark.")
        }
        _ => format!("NPC answers {target} truthfully but leaves out what matters about {topic}."),
    }
}

fn gossip(params: &ToolParams) -> String {
    let about = params.text_or("about_who", "another character");
    let detail = params.text_or("juicy_detail", "a rumor");
    match params.text_or("tone", "conspiratorial").as_str() {
        "casual" => format!("NPC mentions offhandedly that {about} is connected to {detail}."),
        "malicious" => format!("NPC spreads {detail} about {about} with obvious relish."),
        _ => format!("NPC leans in and whispers {detail} about {about}."),
    }
}

fn complain(params: &ToolParams) -> String {
    let topic = params.text_or("topic", "the situation");
    let intensity = params.number_or("intensity", 0.5);
    let adverb = if intensity < 0.4 {
        "mildly"
    } else if intensity > 0.7 {
        "bitterly"
    } else {
        "audibly"
    };
    match params.text("to_whom") {
        Some(listener) => format!("NPC complains {adverb} about {topic} to {listener}."),
        None => format!("NPC complains {adverb} about {topic}."),
    }
}

fn comfort(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    match params.text_or("method", "verbal").as_str() {
        "physical" => format!("NPC rests a reassuring hand on {target}'s shoulder."),
        "distraction" => {
            format!("NPC tries to take {target}'s mind off their troubles with lighter talk.")
        }
        _ => format!("NPC speaks softly to {target}, offering words of comfort."),
    }
}

fn encourage(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let task = params.text_or("task", "their current endeavor");
    let variants = [
        format!("NPC tells {target} they have what it takes for {task}."),
        format!("NPC claps {target} on the back, urging them on with {task}."),
        format!("NPC reminds {target} how far they have already come with {task}."),
    ];
    pick_owned(&variants)
}

fn advise(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let topic = params.text_or("topic", "a difficult choice");
    let confidence = params.number_or("confidence", 0.6);
    if confidence > 0.7 {
        format!("NPC offers sage advice to {target} concerning {topic}.")
    } else if confidence > 0.3 {
        format!("NPC gives {target} some practical advice about {topic}.")
    } else {
        format!("NPC hesitantly offers some questionable advice to {target} about {topic}.")
    }
}

fn argue(params: &ToolParams) -> String {
    let target = params.text_or("target", "the player");
    let point = params.text_or("point", "a contentious issue");
    match params.text_or("style", "heated").as_str() {
        "cold" => format!("NPC disputes {point} with {target} in a clipped, icy tone."),
        "reasoned" => format!("NPC methodically picks apart {target}'s position on {point}."),
        _ => format!("NPC argues heatedly with {target} over {point}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complain_mentions_listener_when_given() {
        let mut params = ToolParams::new();
        params.insert("to_whom", "the innkeeper");
        assert!(complain(&params).contains("the innkeeper"));
        assert!(!complain(&ToolParams::new()).contains("to "));
    }

    #[test]
    fn advise_confidence_shapes_tone() {
        let mut unsure = ToolParams::new();
        unsure.insert_number("confidence", 0.1);
        assert!(advise(&unsure).contains("hesitantly"));
    }
}
