//! Emotional display actions.

use npc_core::{ToolCategory, ToolDescriptor, ToolParams, ToolRegistry};

use crate::pick;

pub fn register(registry: &mut ToolRegistry) {
    let category = ToolCategory::Emotional;
    registry.register(ToolDescriptor::new(
        "express_emotion",
        "NPC expresses a specific emotion.",
        category,
        express_emotion,
    ));
    registry.register(ToolDescriptor::new(
        "laugh",
        "NPC laughs in response to stimulus.",
        category,
        laugh,
    ));
    registry.register(ToolDescriptor::new(
        "cry",
        "NPC cries in response to stimulus.",
        category,
        cry,
    ));
    registry.register(ToolDescriptor::new(
        "show_confusion",
        "NPC displays confusion or puzzlement.",
        category,
        show_confusion,
    ));
    registry.register(ToolDescriptor::new(
        "panic",
        "NPC displays signs of panic or extreme anxiety.",
        category,
        panic,
    ));
}

fn express_emotion(params: &ToolParams) -> String {
    let intensity = params.number_or("intensity", 0.5);
    let adverb = if intensity < 0.4 {
        "mildly"
    } else if intensity > 0.7 {
        "intensely"
    } else {
        "visibly"
    };
    match params.text_or("emotion", "neutral").to_lowercase().as_str() {
        "anger" => format!("NPC {adverb} glares, fists clenched in anger."),
        "fear" => format!("NPC {adverb} shrinks back, eyes wide with fear."),
        "joy" => format!("NPC's face lights up as they {adverb} smile with joy."),
        "sadness" => format!("NPC's shoulders slump as they look {adverb} downcast."),
        "surprise" => format!("NPC {adverb} gasps, taken aback."),
        "disgust" => format!("NPC {adverb} curls their lip in disgust."),
        _ => "NPC maintains a neutral expression, keeping their feelings hidden.".to_string(),
    }
}

fn laugh(params: &ToolParams) -> String {
    match params.text_or("laugh_type", "genuine").as_str() {
        "nervous" => "NPC laughs nervously, clearly uncomfortable.".to_string(),
        "mocking" => "NPC laughs mockingly with derision.".to_string(),
        "polite" => "NPC gives a polite, restrained laugh.".to_string(),
        _ => "NPC laughs genuinely with amusement.".to_string(),
    }
}

fn cry(params: &ToolParams) -> String {
    let intensity = params.number_or("intensity", 0.5);
    let prefix = if intensity < 0.3 {
        "NPC's eyes well up as they"
    } else if intensity < 0.7 {
        "NPC cries as they"
    } else {
        "NPC sobs uncontrollably as they"
    };
    match params.text_or("cry_type", "sadness").as_str() {
        "joy" => format!("{prefix} experience overwhelming happiness."),
        "fear" => format!("{prefix} face their terror."),
        "anger" => format!("{prefix} express their intense frustration."),
        _ => format!("{prefix} process their sadness."),
    }
}

fn show_confusion(_: &ToolParams) -> String {
    pick(&[
        "NPC tilts their head and furrows their brow in confusion.",
        "NPC looks bewildered, clearly not understanding.",
        "NPC scratches their head, visibly confused.",
        "NPC blinks repeatedly in puzzlement.",
    ])
}

fn panic(params: &ToolParams) -> String {
    let containment = params.number_or("containment", 0.5);
    if containment < 0.3 {
        "NPC completely loses control in blind panic, flailing and crying out.".to_string()
    } else if containment < 0.7 {
        "NPC struggles to contain their rising panic, breathing rapidly and looking fearful."
            .to_string()
    } else {
        "NPC shows signs of internal panic while trying to maintain composure.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_emotion_falls_back_to_neutral() {
        let mut params = ToolParams::new();
        params.insert("emotion", "ennui");
        assert!(express_emotion(&params).contains("neutral"));
    }

    #[test]
    fn panic_containment_scales_the_display() {
        let mut contained = ToolParams::new();
        contained.insert_number("containment", 0.9);
        assert!(panic(&contained).contains("composure"));

        let mut lost = ToolParams::new();
        lost.insert_number("containment", 0.1);
        assert!(panic(&lost).contains("blind panic"));
    }

    #[test]
    fn cry_intensity_escalates_the_prefix() {
        let mut heavy = ToolParams::new();
        heavy.insert_number("intensity", 0.9);
        assert!(cry(&heavy).starts_with("NPC sobs"));
    }
}
