//! The interpreted stimulus record.
//!
//! A `Stimulus` is the normalized perception package handed to the decision
//! core by an external interpreter. The core consumes it read-only; nothing
//! in this workspace ever mutates one after construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{SalienceDimension, StimulusIntent, StimulusSchema, StimulusType};

/// Errors raised when a stimulus fails validation at construction time.
#[derive(Debug, Error)]
pub enum StimulusError {
    /// A salience value fell outside [0, 1].
    #[error("salience value {value} for {dimension:?} is outside [0, 1]")]
    SalienceOutOfRange {
        dimension: SalienceDimension,
        value: f32,
    },
    /// The confidence value fell outside [0, 1].
    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f32),
    /// The payload could not be decoded at all.
    #[error("malformed stimulus payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Normalized perception package passed into the decision engine.
///
/// Schema tags are typed, so an unknown tag cannot be represented; payloads
/// arriving over the wire fail at deserialization instead of reaching the
/// decision core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stimulus {
    /// Raw observed content (utterance text, gesture description, ...)
    pub raw_content: String,
    /// Identifier of the actor that produced the stimulus
    pub source: String,
    /// Modality of the stimulus
    pub stimulus_type: StimulusType,
    /// Archetypal patterns matched by the interpreter (zero or more)
    #[serde(default)]
    pub schema: Vec<StimulusSchema>,
    /// Perceived motive, when one could be read
    #[serde(default)]
    pub intent: Option<StimulusIntent>,
    /// Importance per dimension; missing dimensions were not assessed
    #[serde(default)]
    pub salience: HashMap<SalienceDimension, f32>,
    /// Wall-clock seconds at perception time
    #[serde(default)]
    pub timestamp: Option<f64>,
    /// Where the stimulus occurred
    #[serde(default)]
    pub location: Option<String>,
    /// Interpreter confidence in this reading
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_confidence() -> f32 {
    1.0
}

impl Stimulus {
    /// Creates a stimulus with no schema tags, intent, or salience.
    pub fn new(
        raw_content: impl Into<String>,
        source: impl Into<String>,
        stimulus_type: StimulusType,
    ) -> Self {
        Self {
            raw_content: raw_content.into(),
            source: source.into(),
            stimulus_type,
            schema: Vec::new(),
            intent: None,
            salience: HashMap::new(),
            timestamp: None,
            location: None,
            confidence: 1.0,
        }
    }

    /// Adds a schema tag.
    pub fn with_schema(mut self, schema: StimulusSchema) -> Self {
        self.schema.push(schema);
        self
    }

    /// Sets the perceived intent.
    pub fn with_intent(mut self, intent: StimulusIntent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Records a salience assessment, clamped to [0, 1].
    pub fn with_salience(mut self, dimension: SalienceDimension, value: f32) -> Self {
        self.salience.insert(dimension, value.clamp(0.0, 1.0));
        self
    }

    /// Sets the perception timestamp.
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the location the stimulus occurred at.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the interpreter confidence, clamped to [0, 1].
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Decodes and validates a stimulus from a JSON payload.
    ///
    /// Unknown schema, intent, or type names fail here, before the payload
    /// can reach the decision core.
    pub fn from_json(payload: &str) -> Result<Self, StimulusError> {
        let stimulus: Stimulus = serde_json::from_str(payload)?;
        stimulus.validate()?;
        Ok(stimulus)
    }

    /// Checks range invariants on salience and confidence.
    pub fn validate(&self) -> Result<(), StimulusError> {
        for (dimension, value) in &self.salience {
            if !(0.0..=1.0).contains(value) {
                return Err(StimulusError::SalienceOutOfRange {
                    dimension: *dimension,
                    value: *value,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(StimulusError::ConfidenceOutOfRange(self.confidence));
        }
        Ok(())
    }

    /// Checks whether a schema tag is present.
    pub fn has_schema(&self, schema: StimulusSchema) -> bool {
        self.schema.contains(&schema)
    }

    /// Returns the assessed salience for a dimension, 0.0 if not assessed.
    pub fn salience_for(&self, dimension: SalienceDimension) -> f32 {
        self.salience.get(&dimension).copied().unwrap_or(0.0)
    }

    /// Overall salience score: mean of the assessed dimensions.
    pub fn salience_score(&self) -> f32 {
        if self.salience.is_empty() {
            return 0.0;
        }
        self.salience.values().sum::<f32>() / self.salience.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insult() -> Stimulus {
        Stimulus::new("You're worthless.", "player", StimulusType::Dialogue)
            .with_schema(StimulusSchema::Insult)
            .with_intent(StimulusIntent::Humiliate)
            .with_salience(SalienceDimension::Emotional, 0.9)
            .with_salience(SalienceDimension::Relationship, 0.5)
    }

    #[test]
    fn salience_score_averages_assessed_dimensions() {
        let stimulus = insult();
        assert!((stimulus.salience_score() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn salience_score_of_unassessed_stimulus_is_zero() {
        let stimulus = Stimulus::new("wind howls", "environment", StimulusType::Environment);
        assert_eq!(stimulus.salience_score(), 0.0);
    }

    #[test]
    fn builder_clamps_salience_and_confidence() {
        let stimulus = Stimulus::new("x", "y", StimulusType::Action)
            .with_salience(SalienceDimension::Moral, 4.0)
            .with_confidence(-2.0);
        assert_eq!(stimulus.salience_for(SalienceDimension::Moral), 1.0);
        assert_eq!(stimulus.confidence, 0.0);
    }

    #[test]
    fn from_json_round_trips() {
        let original = insult().with_location("tavern").with_timestamp(120.5);
        let payload = serde_json::to_string(&original).unwrap();
        let decoded = Stimulus::from_json(&payload).unwrap();
        assert_eq!(decoded.raw_content, original.raw_content);
        assert_eq!(decoded.schema, original.schema);
        assert_eq!(decoded.intent, original.intent);
        assert_eq!(decoded.location.as_deref(), Some("tavern"));
    }

    #[test]
    fn from_json_rejects_unknown_schema_tag() {
        let payload = r#"{
            "raw_content": "hm",
            "source": "player",
            "stimulus_type": "dialogue",
            "schema": ["threat", "boredom"]
        }"#;
        assert!(Stimulus::from_json(payload).is_err());
    }

    #[test]
    fn from_json_rejects_out_of_range_salience() {
        let payload = r#"{
            "raw_content": "hm",
            "source": "player",
            "stimulus_type": "dialogue",
            "salience": {"emotional": 3.5}
        }"#;
        assert!(matches!(
            Stimulus::from_json(payload),
            Err(StimulusError::SalienceOutOfRange { .. })
        ));
    }

    #[test]
    fn confidence_defaults_to_full() {
        let payload = r#"{
            "raw_content": "hm",
            "source": "player",
            "stimulus_type": "gesture"
        }"#;
        let stimulus = Stimulus::from_json(payload).unwrap();
        assert_eq!(stimulus.confidence, 1.0);
    }
}
