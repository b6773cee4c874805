//! Tool parameters and heuristic parameter building.
//!
//! Tools are deliberately loosely typed renderers: they take a generic
//! key-value bag with documented optional keys and sensible defaults. The
//! builder in this module derives those bags from the stimulus and the
//! personality when the reasoner did not supply its own.

use serde_json::{Map, Number, Value};

use npc_stimulus::{SalienceDimension, Stimulus, StimulusSchema};

use crate::personality::{ModifierDimension, Personality, TraitDimension};

/// Generic parameter bag passed to tool execution functions.
#[derive(Debug, Clone, Default)]
pub struct ToolParams(Map<String, Value>);

impl ToolParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a raw JSON object (e.g. parameters returned by the reasoner).
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Inserts a value under a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Inserts an f32, tolerating non-finite inputs by skipping them.
    pub fn insert_number(&mut self, key: impl Into<String>, value: f32) {
        if let Some(number) = Number::from_f64(value as f64) {
            self.0.insert(key.into(), Value::Number(number));
        }
    }

    /// Reads a string value.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Reads a string value, falling back to a default.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or(default).to_string()
    }

    /// Reads a numeric value, falling back to a default.
    pub fn number_or(&self, key: &str, default: f32) -> f32 {
        self.0
            .get(key)
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Builds the parameter bag for a chosen tool.
///
/// Every bag carries common context (stimulus fields plus a flattened
/// personality snapshot); tools the builder knows about get additional
/// fields computed from named trait/modifier combinations. Each mapping is
/// a small pure function of (stimulus, personality) with no shared state.
pub fn build_params(tool_name: &str, stimulus: &Stimulus, personality: &Personality) -> ToolParams {
    let mut params = common_context(stimulus, personality);

    let aggressiveness = personality.get_trait(TraitDimension::Aggressiveness);
    let neuroticism = personality.get_trait(TraitDimension::Neuroticism);
    let extraversion = personality.get_trait(TraitDimension::Extraversion);
    let agreeableness = personality.get_trait(TraitDimension::Agreeableness);
    let dominance = personality.get_trait(TraitDimension::Dominance);
    let risk_tolerance = personality.get_trait(TraitDimension::RiskTolerance);
    let stress = personality.get_modifier(ModifierDimension::Stress);
    let mood = personality.get_modifier(ModifierDimension::Mood);
    let emotional = stimulus.salience_for(SalienceDimension::Emotional);

    match tool_name {
        "attack" => {
            // Aggression and stress drive force; volatility saps precision
            let strength =
                (aggressiveness * 0.6 + stress * 0.3 - neuroticism * 0.2).clamp(0.2, 1.0);
            params.insert("target", stimulus.source.clone());
            params.insert_number("strength", strength);
        }
        "retreat" | "flee" => {
            let speed = if stress > 0.7 || neuroticism > 0.7 {
                "fast"
            } else if risk_tolerance > 0.6 {
                "slow"
            } else {
                "moderate"
            };
            params.insert("speed", speed);
        }
        "defend" => {
            let style = if aggressiveness > 0.65 {
                "aggressive"
            } else if aggressiveness < 0.35 {
                "cautious"
            } else {
                "balanced"
            };
            params.insert("style", style);
        }
        "threaten" => {
            let intensity = (aggressiveness * 0.5 + dominance * 0.4).clamp(0.1, 1.0);
            params.insert_number("intensity", intensity);
            params.insert(
                "threat_type",
                if dominance > 0.7 { "physical" } else { "verbal" },
            );
        }
        "approach" => {
            let manner = if aggressiveness > 0.7 {
                "aggressive"
            } else if agreeableness > 0.6 && mood > 0.4 {
                "friendly"
            } else if neuroticism > 0.6 {
                "cautious"
            } else {
                "neutral"
            };
            params.insert("target", stimulus.source.clone());
            params.insert("manner", manner);
        }
        "express_emotion" => {
            let emotion = dominant_emotion(stimulus, aggressiveness, mood);
            let intensity = (emotional * 0.6 + neuroticism * 0.4).clamp(0.1, 1.0);
            params.insert("emotion", emotion);
            params.insert_number("intensity", intensity);
        }
        "panic" => {
            let containment = (1.0 - (stress * 0.7 + neuroticism * 0.5)).clamp(0.0, 1.0);
            params.insert_number("containment", containment);
        }
        "cry" => {
            params.insert_number("intensity", (emotional * 0.7 + neuroticism * 0.3).clamp(0.1, 1.0));
        }
        "laugh" => {
            let laugh_type = if stress > 0.6 {
                "nervous"
            } else if agreeableness < 0.3 {
                "mocking"
            } else {
                "genuine"
            };
            params.insert("laugh_type", laugh_type);
        }
        "dialogue_response" => {
            params.insert("prompt", stimulus.raw_content.clone());
            params.insert(
                "tone",
                if mood > 0.6 {
                    "warm"
                } else if mood < 0.35 {
                    "curt"
                } else {
                    "even"
                },
            );
        }
        "argue" => {
            let heat =
                (aggressiveness * 0.5 + stress * 0.3 + (1.0 - agreeableness) * 0.2).clamp(0.1, 1.0);
            let style = if heat > 0.6 {
                "heated"
            } else if agreeableness < 0.3 {
                "cold"
            } else {
                "reasoned"
            };
            params.insert("target", stimulus.source.clone());
            params.insert("style", style);
        }
        "greet" => {
            params.insert("target", stimulus.source.clone());
            params.insert(
                "formality",
                if extraversion > 0.6 { "warm" } else { "neutral" },
            );
        }
        "observe_person" | "read_body_language" | "assess_intent" => {
            params.insert("target", stimulus.source.clone());
        }
        "examine_item" => {
            params.insert_number(
                "thoroughness",
                personality.influence_value(0.5, TraitDimension::Conscientiousness, 0.8),
            );
        }
        "investigate_anomaly" => {
            params.insert_number(
                "caution_level",
                personality.influence_value(0.5, TraitDimension::RiskTolerance, -0.6),
            );
        }
        _ => {}
    }

    params
}

/// Common context included in every parameter bag.
fn common_context(stimulus: &Stimulus, personality: &Personality) -> ToolParams {
    let mut params = ToolParams::new();
    params.insert("stimulus_content", stimulus.raw_content.clone());
    params.insert("stimulus_source", stimulus.source.clone());
    params.insert("stimulus_type", stimulus.stimulus_type.name());
    if let Some(intent) = stimulus.intent {
        params.insert("stimulus_intent", intent.name());
    }
    params.insert_number("stimulus_salience", stimulus.salience_score());

    for dimension in TraitDimension::all() {
        params.insert_number(
            format!("trait_{}", dimension.name()),
            personality.get_trait(*dimension),
        );
    }
    for dimension in ModifierDimension::all() {
        params.insert_number(
            format!("modifier_{}", dimension.name()),
            personality.get_modifier(*dimension),
        );
    }
    if !personality.quirks.is_empty() {
        params.insert("quirks", personality.quirks.join(","));
    }
    params
}

/// Picks the emotion a stimulus most plausibly provokes.
fn dominant_emotion(stimulus: &Stimulus, aggressiveness: f32, mood: f32) -> &'static str {
    if stimulus.has_schema(StimulusSchema::Threat) || stimulus.has_schema(StimulusSchema::Violence)
    {
        if aggressiveness > 0.6 {
            "anger"
        } else {
            "fear"
        }
    } else if stimulus.has_schema(StimulusSchema::Insult) {
        if aggressiveness > 0.5 {
            "anger"
        } else {
            "sadness"
        }
    } else if stimulus.has_schema(StimulusSchema::Praise)
        || stimulus.has_schema(StimulusSchema::Flirtation)
    {
        "joy"
    } else if stimulus.has_schema(StimulusSchema::Betrayal)
        || stimulus.has_schema(StimulusSchema::Abandonment)
    {
        "sadness"
    } else if stimulus.has_schema(StimulusSchema::Disgust) {
        "disgust"
    } else if stimulus.has_schema(StimulusSchema::Mystery) {
        "surprise"
    } else if mood < 0.3 {
        "sadness"
    } else {
        "neutral"
    }
}
