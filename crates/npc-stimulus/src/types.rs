//! Closed enumerations describing a perceived event.
//!
//! The interpreter classifies raw input along three axes: the modality of
//! the stimulus, the archetypal patterns it matches, and the perceived
//! motive behind it. Salience dimensions weight how much the event matters.

use serde::{Deserialize, Serialize};

/// High-level modality of the incoming stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StimulusType {
    Dialogue,
    Gesture,
    Environment,
    Action,
    ObjectInteraction,
    PhysicalContact,
}

impl StimulusType {
    /// Returns all stimulus type variants.
    pub fn all() -> &'static [StimulusType] {
        &[
            StimulusType::Dialogue,
            StimulusType::Gesture,
            StimulusType::Environment,
            StimulusType::Action,
            StimulusType::ObjectInteraction,
            StimulusType::PhysicalContact,
        ]
    }

    /// Stable string name matching the wire format.
    pub fn name(&self) -> &'static str {
        match self {
            StimulusType::Dialogue => "dialogue",
            StimulusType::Gesture => "gesture",
            StimulusType::Environment => "environment",
            StimulusType::Action => "action",
            StimulusType::ObjectInteraction => "object_interaction",
            StimulusType::PhysicalContact => "physical_contact",
        }
    }
}

/// Archetypal cognitive/narrative patterns applied to a stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StimulusSchema {
    Threat,
    Praise,
    Insult,
    Deception,
    Flirtation,
    DominanceAssertion,
    Submission,
    Betrayal,
    Reassurance,
    Request,
    Violence,
    Compassion,
    Disgust,
    Mystery,
    Abandonment,
    Sacrifice,
}

impl StimulusSchema {
    /// Returns all schema variants.
    pub fn all() -> &'static [StimulusSchema] {
        &[
            StimulusSchema::Threat,
            StimulusSchema::Praise,
            StimulusSchema::Insult,
            StimulusSchema::Deception,
            StimulusSchema::Flirtation,
            StimulusSchema::DominanceAssertion,
            StimulusSchema::Submission,
            StimulusSchema::Betrayal,
            StimulusSchema::Reassurance,
            StimulusSchema::Request,
            StimulusSchema::Violence,
            StimulusSchema::Compassion,
            StimulusSchema::Disgust,
            StimulusSchema::Mystery,
            StimulusSchema::Abandonment,
            StimulusSchema::Sacrifice,
        ]
    }

    /// Parses a wire-format name, rejecting anything outside the closed set.
    pub fn parse(name: &str) -> Option<StimulusSchema> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.name() == name)
    }

    /// Stable string name matching the wire format.
    pub fn name(&self) -> &'static str {
        match self {
            StimulusSchema::Threat => "threat",
            StimulusSchema::Praise => "praise",
            StimulusSchema::Insult => "insult",
            StimulusSchema::Deception => "deception",
            StimulusSchema::Flirtation => "flirtation",
            StimulusSchema::DominanceAssertion => "dominance_assertion",
            StimulusSchema::Submission => "submission",
            StimulusSchema::Betrayal => "betrayal",
            StimulusSchema::Reassurance => "reassurance",
            StimulusSchema::Request => "request",
            StimulusSchema::Violence => "violence",
            StimulusSchema::Compassion => "compassion",
            StimulusSchema::Disgust => "disgust",
            StimulusSchema::Mystery => "mystery",
            StimulusSchema::Abandonment => "abandonment",
            StimulusSchema::Sacrifice => "sacrifice",
        }
    }
}

/// Perceived motive behind the stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StimulusIntent {
    Provoke,
    Humiliate,
    TestLoyalty,
    BuildRapport,
    Warn,
    AssertControl,
    EscapeBlame,
    SeekHelp,
    ExpressLove,
    AskForForgiveness,
    Manipulate,
}

impl StimulusIntent {
    /// Returns all intent variants.
    pub fn all() -> &'static [StimulusIntent] {
        &[
            StimulusIntent::Provoke,
            StimulusIntent::Humiliate,
            StimulusIntent::TestLoyalty,
            StimulusIntent::BuildRapport,
            StimulusIntent::Warn,
            StimulusIntent::AssertControl,
            StimulusIntent::EscapeBlame,
            StimulusIntent::SeekHelp,
            StimulusIntent::ExpressLove,
            StimulusIntent::AskForForgiveness,
            StimulusIntent::Manipulate,
        ]
    }

    /// Stable string name matching the wire format.
    pub fn name(&self) -> &'static str {
        match self {
            StimulusIntent::Provoke => "provoke",
            StimulusIntent::Humiliate => "humiliate",
            StimulusIntent::TestLoyalty => "test_loyalty",
            StimulusIntent::BuildRapport => "build_rapport",
            StimulusIntent::Warn => "warn",
            StimulusIntent::AssertControl => "assert_control",
            StimulusIntent::EscapeBlame => "escape_blame",
            StimulusIntent::SeekHelp => "seek_help",
            StimulusIntent::ExpressLove => "express_love",
            StimulusIntent::AskForForgiveness => "ask_for_forgiveness",
            StimulusIntent::Manipulate => "manipulate",
        }
    }
}

/// Dimensions which contribute to overall importance weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalienceDimension {
    Emotional,
    Relationship,
    Narrative,
    Existential,
    Moral,
}

impl SalienceDimension {
    /// Returns all salience dimensions.
    pub fn all() -> &'static [SalienceDimension] {
        &[
            SalienceDimension::Emotional,
            SalienceDimension::Relationship,
            SalienceDimension::Narrative,
            SalienceDimension::Existential,
            SalienceDimension::Moral,
        ]
    }

    /// Stable string name matching the wire format.
    pub fn name(&self) -> &'static str {
        match self {
            SalienceDimension::Emotional => "emotional",
            SalienceDimension::Relationship => "relationship",
            SalienceDimension::Narrative => "narrative",
            SalienceDimension::Existential => "existential",
            SalienceDimension::Moral => "moral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_parse_round_trips() {
        for schema in StimulusSchema::all() {
            assert_eq!(StimulusSchema::parse(schema.name()), Some(*schema));
        }
    }

    #[test]
    fn schema_parse_rejects_unknown() {
        assert_eq!(StimulusSchema::parse("ennui"), None);
        assert_eq!(StimulusSchema::parse(""), None);
    }

    #[test]
    fn serde_names_are_snake_case() {
        let json = serde_json::to_string(&StimulusType::ObjectInteraction).unwrap();
        assert_eq!(json, "\"object_interaction\"");

        let intent: StimulusIntent = serde_json::from_str("\"ask_for_forgiveness\"").unwrap();
        assert_eq!(intent, StimulusIntent::AskForForgiveness);
    }

    #[test]
    fn salience_dimension_catalog_is_stable() {
        let names: Vec<&str> = SalienceDimension::all().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            ["emotional", "relationship", "narrative", "existential", "moral"]
        );
    }

    #[test]
    fn unknown_variant_fails_deserialization() {
        let result: Result<StimulusSchema, _> = serde_json::from_str("\"nostalgia\"");
        assert!(result.is_err());
    }
}
