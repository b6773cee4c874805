//! Personality model.
//!
//! A personality is a set of fixed trait values plus transient modifiers,
//! both on a [0, 1] scale where 0.5 is neutral. Traits never change after
//! creation; modifiers drift over a session as stimuli land. The model also
//! provides the two stochastic utilities the probability engine leans on:
//! trait-directed influence and bounded jitter.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed personality dimensions, loosely based on psychological trait models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitDimension {
    /// Fight vs flight tendencies
    Aggressiveness,
    /// Social engagement vs reserve
    Extraversion,
    /// Emotional volatility vs stability
    Neuroticism,
    /// Curiosity vs caution
    Openness,
    /// Methodical vs spontaneous
    Conscientiousness,
    /// Cooperative vs competitive
    Agreeableness,
    /// Leading vs following
    Dominance,
    /// Bold vs cautious
    RiskTolerance,
}

impl TraitDimension {
    /// Returns all trait dimensions.
    pub fn all() -> &'static [TraitDimension] {
        &[
            TraitDimension::Aggressiveness,
            TraitDimension::Extraversion,
            TraitDimension::Neuroticism,
            TraitDimension::Openness,
            TraitDimension::Conscientiousness,
            TraitDimension::Agreeableness,
            TraitDimension::Dominance,
            TraitDimension::RiskTolerance,
        ]
    }

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            TraitDimension::Aggressiveness => "aggressiveness",
            TraitDimension::Extraversion => "extraversion",
            TraitDimension::Neuroticism => "neuroticism",
            TraitDimension::Openness => "openness",
            TraitDimension::Conscientiousness => "conscientiousness",
            TraitDimension::Agreeableness => "agreeableness",
            TraitDimension::Dominance => "dominance",
            TraitDimension::RiskTolerance => "risk_tolerance",
        }
    }
}

/// Transient state dimensions, mutated during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierDimension {
    /// Acute pressure; amplifies volatile behavior
    Stress,
    /// Current emotional valence
    Mood,
    /// Comfort with the situation or person
    Familiarity,
    /// Trust toward the interaction partner
    Trust,
    /// Relative social position in the exchange
    PowerDynamic,
}

impl ModifierDimension {
    /// Returns all modifier dimensions.
    pub fn all() -> &'static [ModifierDimension] {
        &[
            ModifierDimension::Stress,
            ModifierDimension::Mood,
            ModifierDimension::Familiarity,
            ModifierDimension::Trust,
            ModifierDimension::PowerDynamic,
        ]
    }

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            ModifierDimension::Stress => "stress",
            ModifierDimension::Mood => "mood",
            ModifierDimension::Familiarity => "familiarity",
            ModifierDimension::Trust => "trust",
            ModifierDimension::PowerDynamic => "power_dynamic",
        }
    }
}

/// Behavioral quirk identifiers.
///
/// A quirk is a free-text flavor tag; these constants name the vocabulary
/// the random generator samples from and the ones the probability engine
/// knows how to react to.
pub mod quirk {
    pub const LAUGHS_WHEN_NERVOUS: &str = "laughs_when_nervous";
    pub const AVOIDS_EYE_CONTACT: &str = "avoids_eye_contact";
    pub const SPEAKS_IN_METAPHORS: &str = "speaks_in_metaphors";
    pub const FIDGETS_WHEN_LYING: &str = "fidgets_when_lying";
    pub const DISTRACTED_BY_SHINY_OBJECTS: &str = "distracted_by_shiny_objects";
    pub const CANNOT_RESIST_A_CHALLENGE: &str = "cannot_resist_a_challenge";
    pub const ALWAYS_LOOKING_OVER_SHOULDER: &str = "always_looking_over_shoulder";
    pub const HUMS_WHEN_THINKING: &str = "hums_when_thinking";
    pub const REFUSES_TO_ADMIT_MISTAKES: &str = "refuses_to_admit_mistakes";
    pub const COLLECTS_TROPHIES: &str = "collects_trophies";
    pub const QUICK_TO_ANGER: &str = "quick_to_anger";
    pub const ENJOYS_INTIMIDATION: &str = "enjoys_intimidation";
    pub const LOOKS_FOR_ESCAPE_ROUTES: &str = "looks_for_escape_routes";
    pub const PLANS_BEFORE_ACTING: &str = "plans_before_acting";
    pub const SMILES_FREQUENTLY: &str = "smiles_frequently";
    pub const DIFFUSES_TENSION: &str = "diffuses_tension";

    /// Vocabulary the random personality generator samples from.
    pub const VOCABULARY: &[&str] = &[
        LAUGHS_WHEN_NERVOUS,
        AVOIDS_EYE_CONTACT,
        SPEAKS_IN_METAPHORS,
        FIDGETS_WHEN_LYING,
        DISTRACTED_BY_SHINY_OBJECTS,
        CANNOT_RESIST_A_CHALLENGE,
        ALWAYS_LOOKING_OVER_SHOULDER,
        HUMS_WHEN_THINKING,
        REFUSES_TO_ADMIT_MISTAKES,
        COLLECTS_TROPHIES,
    ];
}

/// One agent's personality: fixed traits, drifting modifiers, quirks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personality {
    /// Unique instance id
    pub id: Uuid,
    /// Display name
    pub name: String,
    traits: HashMap<TraitDimension, f32>,
    modifiers: HashMap<ModifierDimension, f32>,
    /// Behavioral flavor tags
    pub quirks: Vec<String>,
    /// Optional human-readable description
    pub description: Option<String>,
}

impl Personality {
    /// Creates a personality with no explicit traits (everything reads as
    /// neutral 0.5 until set).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            traits: HashMap::new(),
            modifiers: HashMap::new(),
            quirks: Vec::new(),
            description: None,
        }
    }

    /// Sets a trait value, clamped to [0, 1]. Construction-time only.
    pub fn with_trait(mut self, dimension: TraitDimension, value: f32) -> Self {
        self.traits.insert(dimension, value.clamp(0.0, 1.0));
        self
    }

    /// Adds a quirk tag.
    pub fn with_quirk(mut self, quirk: impl Into<String>) -> Self {
        self.quirks.push(quirk.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a trait value, defaulting to 0.5 (neutral) if not set.
    pub fn get_trait(&self, dimension: TraitDimension) -> f32 {
        self.traits.get(&dimension).copied().unwrap_or(0.5)
    }

    /// Returns a modifier value, defaulting to 0.5 (neutral) if not set.
    pub fn get_modifier(&self, dimension: ModifierDimension) -> f32 {
        self.modifiers.get(&dimension).copied().unwrap_or(0.5)
    }

    /// Updates a modifier, clamping to [0, 1].
    ///
    /// This is the only legal mutation path after construction.
    pub fn update_modifier(&mut self, dimension: ModifierDimension, value: f32) {
        self.modifiers.insert(dimension, value.clamp(0.0, 1.0));
    }

    /// Checks whether a quirk tag is present.
    pub fn has_quirk(&self, quirk: &str) -> bool {
        self.quirks.iter().any(|q| q == quirk)
    }

    /// Biases a base value by a trait, centered on neutral.
    ///
    /// The shift is `(trait - 0.5) * strength`; a neutral trait leaves the
    /// base untouched. Callers encode inverse relationships by passing a
    /// negative strength.
    pub fn influence_value(
        &self,
        base: f32,
        dimension: TraitDimension,
        strength: f32,
    ) -> f32 {
        let shift = (self.get_trait(dimension) - 0.5) * strength;
        (base + shift).clamp(0.0, 1.0)
    }

    /// Adds a uniform offset in `[-spread, +spread]`, clamped to [0, 1].
    ///
    /// This is the sole stochastic primitive; everything nondeterministic in
    /// the decision core funnels through it so tests can pin the generator.
    pub fn add_randomness(&self, rng: &mut impl Rng, value: f32, spread: f32) -> f32 {
        if spread <= 0.0 {
            return value.clamp(0.0, 1.0);
        }
        let offset = rng.gen_range(-spread..=spread);
        (value + offset).clamp(0.0, 1.0)
    }

    /// One-line trait summary for reasoner context.
    pub fn summary(&self) -> String {
        TraitDimension::all()
            .iter()
            .map(|t| format!("{}={:.2}", t.name(), self.get_trait(*t)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Construction helpers for personalities.
pub struct PersonalityFactory;

impl PersonalityFactory {
    /// Generates a personality with uniformly random traits and 1-3 quirks
    /// sampled from the fixed vocabulary.
    pub fn random(name: impl Into<String>, rng: &mut impl Rng) -> Personality {
        let name = name.into();
        let mut personality = Personality::new(name.clone())
            .with_description(format!("Randomly generated personality for {name}"));
        for dimension in TraitDimension::all() {
            personality = personality.with_trait(*dimension, rng.gen_range(0.0..=1.0));
        }
        let quirk_count = rng.gen_range(1..=3);
        for q in quirk::VOCABULARY.choose_multiple(rng, quirk_count) {
            personality = personality.with_quirk(*q);
        }
        personality
    }

    /// Builds a named preset; unrecognized names fall back to the random
    /// generator.
    pub fn preset(kind: &str, rng: &mut impl Rng) -> Personality {
        match kind.to_ascii_lowercase().as_str() {
            "aggressive" => Personality::new("Aggressive Personality")
                .with_trait(TraitDimension::Aggressiveness, 0.9)
                .with_trait(TraitDimension::Dominance, 0.8)
                .with_trait(TraitDimension::Neuroticism, 0.7)
                .with_trait(TraitDimension::Agreeableness, 0.2)
                .with_trait(TraitDimension::RiskTolerance, 0.7)
                .with_quirk(quirk::QUICK_TO_ANGER)
                .with_quirk(quirk::ENJOYS_INTIMIDATION)
                .with_description(
                    "An aggressive, dominant personality that tends to confront rather than flee",
                ),
            "cautious" => Personality::new("Cautious Personality")
                .with_trait(TraitDimension::Aggressiveness, 0.2)
                .with_trait(TraitDimension::Neuroticism, 0.6)
                .with_trait(TraitDimension::Openness, 0.3)
                .with_trait(TraitDimension::Conscientiousness, 0.8)
                .with_trait(TraitDimension::RiskTolerance, 0.2)
                .with_quirk(quirk::LOOKS_FOR_ESCAPE_ROUTES)
                .with_quirk(quirk::PLANS_BEFORE_ACTING)
                .with_description(
                    "A careful, risk-averse personality that prefers safety over confrontation",
                ),
            "friendly" => Personality::new("Friendly Personality")
                .with_trait(TraitDimension::Extraversion, 0.8)
                .with_trait(TraitDimension::Agreeableness, 0.9)
                .with_trait(TraitDimension::Openness, 0.7)
                .with_trait(TraitDimension::Conscientiousness, 0.6)
                .with_trait(TraitDimension::Neuroticism, 0.3)
                .with_quirk(quirk::SMILES_FREQUENTLY)
                .with_quirk(quirk::DIFFUSES_TENSION)
                .with_description(
                    "A warm, social personality that seeks connection and cooperation",
                ),
            other => Self::random(other, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn unset_traits_and_modifiers_read_neutral() {
        let p = Personality::new("blank");
        for dimension in TraitDimension::all() {
            assert_eq!(p.get_trait(*dimension), 0.5);
        }
        for dimension in ModifierDimension::all() {
            assert_eq!(p.get_modifier(*dimension), 0.5);
        }
    }

    #[test]
    fn update_modifier_clamps_extreme_inputs() {
        let mut p = Personality::new("test");
        p.update_modifier(ModifierDimension::Stress, -5.0);
        assert_eq!(p.get_modifier(ModifierDimension::Stress), 0.0);
        p.update_modifier(ModifierDimension::Stress, 10.0);
        assert_eq!(p.get_modifier(ModifierDimension::Stress), 1.0);
    }

    #[test]
    fn trait_construction_clamps() {
        let p = Personality::new("test").with_trait(TraitDimension::Openness, 7.0);
        assert_eq!(p.get_trait(TraitDimension::Openness), 1.0);
    }

    #[test]
    fn neutral_trait_has_zero_influence() {
        let p = Personality::new("neutral");
        for strength in [-1.0, -0.3, 0.0, 0.4, 1.0] {
            assert_eq!(p.influence_value(0.5, TraitDimension::Dominance, strength), 0.5);
        }
    }

    #[test]
    fn influence_shifts_by_centered_trait_times_strength() {
        let p = Personality::new("bold").with_trait(TraitDimension::RiskTolerance, 1.0);
        let shifted = p.influence_value(0.5, TraitDimension::RiskTolerance, 0.4);
        assert!((shifted - 0.7).abs() < 1e-6);

        // Negative strength inverts the relationship
        let inverted = p.influence_value(0.5, TraitDimension::RiskTolerance, -0.4);
        assert!((inverted - 0.3).abs() < 1e-6);
    }

    #[test]
    fn influence_clamps_to_unit_interval() {
        let p = Personality::new("extreme").with_trait(TraitDimension::Aggressiveness, 1.0);
        assert_eq!(p.influence_value(0.9, TraitDimension::Aggressiveness, 1.0), 1.0);
        assert_eq!(p.influence_value(0.1, TraitDimension::Aggressiveness, -1.0), 0.0);
    }

    #[test]
    fn randomness_stays_in_range_and_near_input() {
        let p = Personality::new("test");
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let value = p.add_randomness(&mut rng, 0.5, 0.1);
            assert!((0.0..=1.0).contains(&value));
            assert!((value - 0.5).abs() <= 0.1 + 1e-6);
        }
        // Clamping keeps edge values legal
        for _ in 0..100 {
            let value = p.add_randomness(&mut rng, 0.0, 0.2);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn random_factory_sets_every_trait_and_some_quirks() {
        let mut rng = SmallRng::seed_from_u64(99);
        let p = PersonalityFactory::random("npc_7", &mut rng);
        assert!((1..=3).contains(&p.quirks.len()));
        // Values must be in range; all dimensions were rolled explicitly
        for dimension in TraitDimension::all() {
            let value = p.get_trait(*dimension);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn presets_carry_their_trait_profile() {
        let mut rng = SmallRng::seed_from_u64(1);
        let aggressive = PersonalityFactory::preset("aggressive", &mut rng);
        assert_eq!(aggressive.get_trait(TraitDimension::Aggressiveness), 0.9);
        assert_eq!(aggressive.get_trait(TraitDimension::Agreeableness), 0.2);
        // Unset traits read neutral
        assert_eq!(aggressive.get_trait(TraitDimension::Openness), 0.5);
        assert!(aggressive.has_quirk(quirk::QUICK_TO_ANGER));

        // Case-insensitive lookup
        let friendly = PersonalityFactory::preset("FRIENDLY", &mut rng);
        assert_eq!(friendly.get_trait(TraitDimension::Agreeableness), 0.9);
    }

    #[test]
    fn unknown_preset_falls_back_to_random() {
        let mut rng = SmallRng::seed_from_u64(3);
        let p = PersonalityFactory::preset("stoic", &mut rng);
        assert_eq!(p.name, "stoic");
        assert!(!p.quirks.is_empty());
    }

    #[test]
    fn summary_lists_all_traits() {
        let p = Personality::new("sum").with_trait(TraitDimension::Dominance, 0.8);
        let summary = p.summary();
        assert!(summary.contains("dominance=0.80"));
        assert!(summary.contains("openness=0.50"));
    }
}
