//! Probability engine.
//!
//! Turns a stimulus and a personality into a normalized probability
//! distribution over every registered tool, then weighted-samples one.
//! The pipeline is additive and table-driven:
//!
//! 1. Category relevance: base + boosts from stimulus type, schema tags,
//!    and intent, normalized to sum 1.
//! 2. Tool seeding: floor weight plus an even share of the owning
//!    category's relevance.
//! 3. Stimulus-specific group deltas for exact tag combinations.
//! 4. Trait, modifier, and quirk group deltas.
//! 5. Minimum-weight clamp, per-tool jitter, prune, renormalize.
//!
//! Weighted sampling keeps behavioral variety; tests assert statistical
//! tendencies over many trials rather than exact picks.

use std::collections::HashMap;

use rand::Rng;

use npc_stimulus::{Stimulus, StimulusIntent, StimulusSchema, StimulusType};

use crate::groups;
use crate::personality::{quirk, ModifierDimension, Personality, TraitDimension};
use crate::registry::{ToolCategory, ToolRegistry};
use crate::tuning::EngineTuning;

/// Name of the tool the engine fails open to when the candidate pool
/// empties.
pub const DEFAULT_TOOL: &str = "dialogue_response";

/// One entry of a tool probability distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedTool {
    pub name: String,
    pub weight: f32,
}

/// Category boosts applied for each stimulus type.
fn type_boosts(stimulus_type: StimulusType) -> &'static [(ToolCategory, f32)] {
    use ToolCategory::*;
    match stimulus_type {
        StimulusType::Dialogue => &[
            (Dialogue, 0.30),
            (Social, 0.20),
            (Emotional, 0.15),
            (Communication, 0.15),
        ],
        StimulusType::Gesture => &[
            (SubtleExpression, 0.20),
            (Observation, 0.20),
            (Emotional, 0.15),
            (Social, 0.10),
        ],
        StimulusType::Environment => &[
            (Environmental, 0.25),
            (Observation, 0.20),
            (Perception, 0.15),
            (Movement, 0.10),
        ],
        StimulusType::Action => &[
            (Movement, 0.20),
            (Combat, 0.15),
            (Observation, 0.15),
            (Perception, 0.10),
        ],
        StimulusType::ObjectInteraction => &[
            (Item, 0.25),
            (EverydayObject, 0.20),
            (Observation, 0.15),
        ],
        StimulusType::PhysicalContact => &[
            (Combat, 0.20),
            (Emotional, 0.20),
            (Movement, 0.15),
            (Social, 0.10),
        ],
    }
}

/// Category boosts applied for each schema tag present.
fn schema_boosts(schema: StimulusSchema) -> &'static [(ToolCategory, f32)] {
    use ToolCategory::*;
    match schema {
        StimulusSchema::Threat => &[(Combat, 0.25), (Movement, 0.25), (Perception, 0.10)],
        StimulusSchema::Violence => &[(Combat, 0.30), (Movement, 0.20)],
        StimulusSchema::Praise => &[(Social, 0.20), (Emotional, 0.20)],
        StimulusSchema::Insult => &[(Emotional, 0.20), (Combat, 0.15), (Dialogue, 0.10)],
        StimulusSchema::Deception => &[
            (Observation, 0.20),
            (Cognitive, 0.15),
            (Communication, 0.10),
        ],
        StimulusSchema::Flirtation => &[
            (Social, 0.25),
            (Emotional, 0.15),
            (SubtleExpression, 0.10),
        ],
        StimulusSchema::DominanceAssertion => &[
            (Combat, 0.15),
            (SocialManeuvering, 0.15),
            (Emotional, 0.10),
        ],
        StimulusSchema::Submission => &[(Social, 0.15), (Emotional, 0.10)],
        StimulusSchema::Betrayal => &[(Emotional, 0.25), (Cognitive, 0.15)],
        StimulusSchema::Reassurance => &[(Social, 0.20), (Emotional, 0.15)],
        StimulusSchema::Request => &[(Dialogue, 0.25), (Communication, 0.20)],
        StimulusSchema::Compassion => &[(Social, 0.20), (Emotional, 0.15)],
        StimulusSchema::Disgust => &[(Emotional, 0.20), (SubtleExpression, 0.10)],
        StimulusSchema::Mystery => &[(Observation, 0.25), (Cognitive, 0.20)],
        StimulusSchema::Abandonment => &[(Emotional, 0.25), (SelfCare, 0.10)],
        StimulusSchema::Sacrifice => &[(Emotional, 0.20), (Cognitive, 0.15)],
    }
}

/// Category boosts applied for the perceived intent.
fn intent_boosts(intent: StimulusIntent) -> &'static [(ToolCategory, f32)] {
    use ToolCategory::*;
    match intent {
        StimulusIntent::Provoke => &[(Combat, 0.20), (Emotional, 0.15)],
        StimulusIntent::Humiliate => &[(Emotional, 0.20), (Combat, 0.15)],
        StimulusIntent::TestLoyalty => &[(Cognitive, 0.15), (SocialManeuvering, 0.15)],
        StimulusIntent::BuildRapport => &[(Social, 0.25), (Dialogue, 0.15)],
        StimulusIntent::Warn => &[(Movement, 0.15), (Perception, 0.15), (Observation, 0.10)],
        StimulusIntent::AssertControl => &[(SocialManeuvering, 0.20), (Combat, 0.10)],
        StimulusIntent::EscapeBlame => &[(SocialManeuvering, 0.15), (Communication, 0.10)],
        StimulusIntent::SeekHelp => &[(Dialogue, 0.20), (Social, 0.15)],
        StimulusIntent::ExpressLove => &[(Social, 0.20), (Dialogue, 0.15), (Emotional, 0.10)],
        StimulusIntent::AskForForgiveness => &[(Social, 0.20), (Emotional, 0.15)],
        StimulusIntent::Manipulate => &[(SocialManeuvering, 0.25), (Cognitive, 0.10)],
    }
}

/// Action groups a trait's high extreme favors and disfavors.
fn trait_preferences(dimension: TraitDimension) -> (&'static [&'static str], &'static [&'static str]) {
    match dimension {
        TraitDimension::Aggressiveness => (groups::CONFRONT, groups::ESCAPE),
        TraitDimension::Extraversion => (groups::OUTGOING, groups::WITHDRAWN),
        TraitDimension::Neuroticism => (groups::VOLATILE, groups::COMPOSED),
        TraitDimension::Openness => (groups::CURIOUS, groups::WITHDRAWN),
        TraitDimension::Conscientiousness => (groups::METHODICAL, groups::IMPULSIVE),
        TraitDimension::Agreeableness => (groups::WARM, groups::ABRASIVE),
        TraitDimension::Dominance => (groups::COMMANDING, groups::DEFERENTIAL),
        TraitDimension::RiskTolerance => (groups::DARING, groups::SHELTERED),
    }
}

/// Stimulus-specific adjustment rule: a group of tools and the total delta
/// split evenly across them.
struct GroupDelta {
    group: &'static [&'static str],
    delta: f32,
}

/// Explicit tag-combination rules, independent of category relevance.
fn stimulus_rules(stimulus: &Stimulus) -> Vec<GroupDelta> {
    let mut rules = Vec::new();

    if stimulus.has_schema(StimulusSchema::Threat) {
        rules.push(GroupDelta { group: groups::ESCAPE, delta: 0.30 });
    }
    if stimulus.has_schema(StimulusSchema::Violence) {
        rules.push(GroupDelta { group: groups::BRACE, delta: 0.25 });
    }
    if stimulus.stimulus_type == StimulusType::Dialogue
        && stimulus.intent == Some(StimulusIntent::Humiliate)
    {
        rules.push(GroupDelta { group: groups::INDIGNANT, delta: 0.25 });
    }
    if stimulus.has_schema(StimulusSchema::Praise) {
        rules.push(GroupDelta { group: groups::GRATIFIED, delta: 0.20 });
    }
    if stimulus.has_schema(StimulusSchema::Request)
        || stimulus.intent == Some(StimulusIntent::SeekHelp)
    {
        rules.push(GroupDelta { group: groups::RESPONSIVE, delta: 0.20 });
    }
    if stimulus.has_schema(StimulusSchema::Mystery) {
        rules.push(GroupDelta { group: groups::INQUISITIVE, delta: 0.20 });
    }
    if stimulus.has_schema(StimulusSchema::Flirtation) {
        rules.push(GroupDelta { group: groups::CHARMED, delta: 0.15 });
    }
    if stimulus.stimulus_type == StimulusType::Environment
        && stimulus.has_schema(StimulusSchema::Threat)
    {
        rules.push(GroupDelta { group: groups::ALARMED, delta: 0.20 });
    }
    if stimulus.has_schema(StimulusSchema::Reassurance)
        || stimulus.intent == Some(StimulusIntent::AskForForgiveness)
    {
        rules.push(GroupDelta { group: groups::CONCILIATORY, delta: 0.15 });
    }

    rules
}

/// Quirk effects: group boosted when the quirk's condition holds.
fn quirk_effect(
    quirk_tag: &str,
    stimulus: &Stimulus,
    personality: &Personality,
) -> Option<&'static [&'static str]> {
    match quirk_tag {
        quirk::ALWAYS_LOOKING_OVER_SHOULDER | quirk::LOOKS_FOR_ESCAPE_ROUTES => {
            Some(groups::VIGILANT)
        }
        quirk::LAUGHS_WHEN_NERVOUS
            if personality.get_modifier(ModifierDimension::Stress) > 0.5 =>
        {
            Some(&["laugh"])
        }
        quirk::CANNOT_RESIST_A_CHALLENGE
            if stimulus.has_schema(StimulusSchema::DominanceAssertion)
                || stimulus.intent == Some(StimulusIntent::Provoke) =>
        {
            Some(groups::CONFRONT)
        }
        quirk::DIFFUSES_TENSION
            if stimulus.has_schema(StimulusSchema::Threat)
                || stimulus.has_schema(StimulusSchema::Insult) =>
        {
            Some(groups::CONCILIATORY)
        }
        quirk::PLANS_BEFORE_ACTING => Some(groups::METHODICAL),
        quirk::HUMS_WHEN_THINKING if stimulus.has_schema(StimulusSchema::Mystery) => {
            Some(&["ponder"])
        }
        _ => None,
    }
}

/// The weighting pipeline. Holds tuning only; all per-call state flows
/// through arguments.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityEngine {
    tuning: EngineTuning,
}

impl ProbabilityEngine {
    pub fn new(tuning: EngineTuning) -> Self {
        Self { tuning }
    }

    /// Computes the normalized distribution over all registered tools,
    /// sorted by descending weight.
    ///
    /// Returns an empty distribution only when the registry itself is
    /// empty; an exhausted candidate pool fails open to [`DEFAULT_TOOL`]
    /// (or any one registered tool) at full probability.
    pub fn distribution(
        &self,
        registry: &ToolRegistry,
        stimulus: &Stimulus,
        personality: &Personality,
        rng: &mut impl Rng,
    ) -> Vec<WeightedTool> {
        if registry.is_empty() {
            return Vec::new();
        }

        let relevance = self.category_relevance(stimulus);
        let mut weights = self.seed_tool_weights(registry, &relevance);
        self.apply_stimulus_rules(&mut weights, stimulus);
        self.apply_personality(&mut weights, stimulus, personality);

        // Floor enforcement before jitter keeps every tool alive
        for weight in weights.values_mut() {
            *weight = weight.max(self.tuning.min_weight);
        }

        for weight in weights.values_mut() {
            *weight = personality.add_randomness(rng, *weight, self.tuning.jitter_spread);
        }

        self.prune_and_normalize(registry, weights)
    }

    /// Draws one tool name from a distribution using weights as sampling
    /// probabilities.
    pub fn sample(&self, distribution: &[WeightedTool], rng: &mut impl Rng) -> Option<String> {
        if distribution.is_empty() {
            return None;
        }
        let total: f32 = distribution.iter().map(|t| t.weight).sum();
        if total <= 0.0 {
            return Some(distribution[0].name.clone());
        }
        let mut roll: f32 = rng.gen::<f32>() * total;
        for tool in distribution {
            roll -= tool.weight;
            if roll <= 0.0 {
                return Some(tool.name.clone());
            }
        }
        // Floating point slack lands on the last entry
        distribution.last().map(|t| t.name.clone())
    }

    /// Category relevance pass: base + type/schema/intent boosts,
    /// normalized to sum 1.
    fn category_relevance(&self, stimulus: &Stimulus) -> HashMap<ToolCategory, f32> {
        let mut relevance: HashMap<ToolCategory, f32> = ToolCategory::all()
            .iter()
            .map(|c| (*c, self.tuning.category_base))
            .collect();

        for (category, boost) in type_boosts(stimulus.stimulus_type) {
            *relevance.entry(*category).or_default() += boost;
        }
        for schema in &stimulus.schema {
            for (category, boost) in schema_boosts(*schema) {
                *relevance.entry(*category).or_default() += boost;
            }
        }
        if let Some(intent) = stimulus.intent {
            for (category, boost) in intent_boosts(intent) {
                *relevance.entry(*category).or_default() += boost;
            }
        }

        let total: f32 = relevance.values().sum();
        if total > 0.0 {
            for value in relevance.values_mut() {
                *value /= total;
            }
        }
        relevance
    }

    /// Seeds every tool with the floor plus an even share of its
    /// category's relevance.
    fn seed_tool_weights(
        &self,
        registry: &ToolRegistry,
        relevance: &HashMap<ToolCategory, f32>,
    ) -> HashMap<String, f32> {
        let mut weights = HashMap::with_capacity(registry.len());
        let by_category = registry.list_by_category();
        for (category, tools) in &by_category {
            let share = relevance.get(category).copied().unwrap_or(0.0) / tools.len() as f32;
            for tool in tools {
                weights.insert(tool.name().to_string(), self.tuning.tool_floor + share);
            }
        }
        weights
    }

    /// Applies explicit tag-combination rules.
    fn apply_stimulus_rules(&self, weights: &mut HashMap<String, f32>, stimulus: &Stimulus) {
        for rule in stimulus_rules(stimulus) {
            add_group_delta(weights, rule.group, rule.delta);
        }
    }

    /// Applies trait, modifier, and quirk group adjustments.
    fn apply_personality(
        &self,
        weights: &mut HashMap<String, f32>,
        stimulus: &Stimulus,
        personality: &Personality,
    ) {
        let tuning = &self.tuning;

        for dimension in TraitDimension::all() {
            let centered = personality.get_trait(*dimension) - 0.5;
            if centered.abs() < f32::EPSILON {
                continue;
            }
            let delta = centered * tuning.trait_scale;
            let (favored, disfavored) = trait_preferences(*dimension);
            add_each(weights, favored, delta);
            add_each(weights, disfavored, -delta);
        }

        let stress = personality.get_modifier(ModifierDimension::Stress);
        if stress > tuning.stress_high {
            let delta = (stress - tuning.stress_high) * tuning.modifier_scale;
            add_each(weights, groups::VOLATILE, delta);
            add_each(weights, groups::ESCAPE, delta * 0.5);
            add_each(weights, groups::COMPOSED, -delta);
        } else if stress < tuning.stress_low {
            let delta = (tuning.stress_low - stress) * tuning.modifier_scale;
            add_each(weights, groups::RECUPERATIVE, delta);
        }

        let mood = personality.get_modifier(ModifierDimension::Mood);
        if mood > tuning.mood_high {
            let delta = (mood - tuning.mood_high) * tuning.modifier_scale;
            add_each(weights, groups::BUOYANT, delta);
        } else if mood < tuning.mood_low {
            let delta = (tuning.mood_low - mood) * tuning.modifier_scale;
            add_each(weights, groups::DEJECTED, delta);
            add_each(weights, groups::BUOYANT, -delta);
        }

        for quirk_tag in &personality.quirks {
            if let Some(group) = quirk_effect(quirk_tag, stimulus, personality) {
                add_each(weights, group, tuning.quirk_delta);
            }
        }
    }

    /// Drops negligible weights and renormalizes; fails open when the pool
    /// empties.
    fn prune_and_normalize(
        &self,
        registry: &ToolRegistry,
        weights: HashMap<String, f32>,
    ) -> Vec<WeightedTool> {
        let mut survivors: Vec<WeightedTool> = weights
            .into_iter()
            .filter(|(_, weight)| *weight > self.tuning.prune_threshold)
            .map(|(name, weight)| WeightedTool { name, weight })
            .collect();

        if survivors.is_empty() {
            let fallback = if registry.contains(DEFAULT_TOOL) {
                DEFAULT_TOOL.to_string()
            } else {
                match registry.iter().next() {
                    Some(tool) => tool.name().to_string(),
                    None => return Vec::new(),
                }
            };
            tracing::warn!(tool = %fallback, "candidate pool exhausted; failing open");
            return vec![WeightedTool { name: fallback, weight: 1.0 }];
        }

        let total: f32 = survivors.iter().map(|t| t.weight).sum();
        for tool in survivors.iter_mut() {
            tool.weight /= total;
        }
        survivors.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        survivors
    }
}

/// Adds `delta` split evenly across the group members present in the map.
fn add_group_delta(weights: &mut HashMap<String, f32>, group: &[&str], delta: f32) {
    let present: Vec<&str> = group
        .iter()
        .copied()
        .filter(|name| weights.contains_key(*name))
        .collect();
    if present.is_empty() {
        return;
    }
    let share = delta / present.len() as f32;
    for name in present {
        if let Some(weight) = weights.get_mut(name) {
            *weight += share;
        }
    }
}

/// Adds `delta` to every group member present in the map.
fn add_each(weights: &mut HashMap<String, f32>, group: &[&str], delta: f32) {
    for name in group {
        if let Some(weight) = weights.get_mut(*name) {
            *weight += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolDescriptor;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn descriptor(name: &'static str, category: ToolCategory) -> ToolDescriptor {
        ToolDescriptor::new(name, format!("{name} tool"), category, move |_| {
            format!("NPC performs {name}.")
        })
    }

    fn small_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(descriptor("dialogue_response", ToolCategory::Dialogue));
        registry.register(descriptor("flee", ToolCategory::Movement));
        registry.register(descriptor("hide", ToolCategory::Movement));
        registry.register(descriptor("take_cover", ToolCategory::Movement));
        registry.register(descriptor("attack", ToolCategory::Combat));
        registry.register(descriptor("defend", ToolCategory::Combat));
        registry.register(descriptor("laugh", ToolCategory::Emotional));
        registry.register(descriptor("panic", ToolCategory::Emotional));
        registry.register(descriptor("observe_person", ToolCategory::Observation));
        registry.register(descriptor("ponder", ToolCategory::Cognitive));
        registry
    }

    fn threat() -> Stimulus {
        Stimulus::new("*raises weapon*", "player", StimulusType::Gesture)
            .with_schema(StimulusSchema::Threat)
            .with_schema(StimulusSchema::Violence)
            .with_intent(StimulusIntent::Warn)
    }

    #[test]
    fn distribution_is_normalized_and_positive() {
        let engine = ProbabilityEngine::default();
        let registry = small_registry();
        let personality = Personality::new("test");
        let mut rng = SmallRng::seed_from_u64(11);

        for _ in 0..50 {
            let distribution = engine.distribution(&registry, &threat(), &personality, &mut rng);
            let total: f32 = distribution.iter().map(|t| t.weight).sum();
            assert!((total - 1.0).abs() < 1e-4, "sum was {total}");
            for tool in &distribution {
                assert!(tool.weight > 0.0, "{} had weight {}", tool.name, tool.weight);
            }
        }
    }

    #[test]
    fn distribution_is_sorted_descending() {
        let engine = ProbabilityEngine::default();
        let registry = small_registry();
        let personality = Personality::new("test");
        let mut rng = SmallRng::seed_from_u64(5);
        let distribution = engine.distribution(&registry, &threat(), &personality, &mut rng);
        for pair in distribution.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }

    #[test]
    fn category_relevance_sums_to_one() {
        let engine = ProbabilityEngine::default();
        let relevance = engine.category_relevance(&threat());
        let total: f32 = relevance.values().sum();
        assert!((total - 1.0).abs() < 1e-5);
        // Threat + violence push combat and movement above baseline
        assert!(relevance[&ToolCategory::Combat] > relevance[&ToolCategory::Needs]);
        assert!(relevance[&ToolCategory::Movement] > relevance[&ToolCategory::Needs]);
    }

    #[test]
    fn empty_registry_yields_empty_distribution() {
        let engine = ProbabilityEngine::default();
        let registry = ToolRegistry::new();
        let personality = Personality::new("test");
        let mut rng = SmallRng::seed_from_u64(2);
        assert!(engine
            .distribution(&registry, &threat(), &personality, &mut rng)
            .is_empty());
    }

    #[test]
    fn exhausted_pool_fails_open_to_default() {
        // Prune threshold above any achievable weight empties the pool
        let mut tuning = EngineTuning::default();
        tuning.prune_threshold = 10.0;
        let engine = ProbabilityEngine::new(tuning);
        let registry = small_registry();
        let personality = Personality::new("test");
        let mut rng = SmallRng::seed_from_u64(4);

        let distribution = engine.distribution(&registry, &threat(), &personality, &mut rng);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution[0].name, DEFAULT_TOOL);
        assert_eq!(distribution[0].weight, 1.0);
    }

    #[test]
    fn exhausted_pool_without_default_picks_any_tool() {
        let mut tuning = EngineTuning::default();
        tuning.prune_threshold = 10.0;
        let engine = ProbabilityEngine::new(tuning);
        let mut registry = ToolRegistry::new();
        registry.register(descriptor("stretch", ToolCategory::Needs));
        let personality = Personality::new("test");
        let mut rng = SmallRng::seed_from_u64(4);

        let distribution = engine.distribution(&registry, &threat(), &personality, &mut rng);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution[0].name, "stretch");
    }

    #[test]
    fn sampling_respects_weights() {
        let engine = ProbabilityEngine::default();
        let mut rng = SmallRng::seed_from_u64(12345);
        let distribution = vec![
            WeightedTool { name: "rare".to_string(), weight: 0.1 },
            WeightedTool { name: "common".to_string(), weight: 0.9 },
        ];

        let mut common = 0;
        for _ in 0..1000 {
            if engine.sample(&distribution, &mut rng).as_deref() == Some("common") {
                common += 1;
            }
        }
        assert!(common > 750, "common sampled only {common} times");
    }

    #[test]
    fn timid_personality_escapes_more_than_bold_one() {
        let engine = ProbabilityEngine::default();
        let registry = small_registry();

        let bold = Personality::new("bold")
            .with_trait(TraitDimension::RiskTolerance, 0.9)
            .with_trait(TraitDimension::Neuroticism, 0.1)
            .with_trait(TraitDimension::Aggressiveness, 0.8);
        let timid = Personality::new("timid")
            .with_trait(TraitDimension::RiskTolerance, 0.1)
            .with_trait(TraitDimension::Neuroticism, 0.9)
            .with_trait(TraitDimension::Aggressiveness, 0.2);

        let escape = ["flee", "hide", "take_cover"];
        let mut rng = SmallRng::seed_from_u64(777);
        let mut count = |personality: &Personality, rng: &mut SmallRng| {
            let mut hits = 0;
            for _ in 0..1000 {
                let distribution = engine.distribution(&registry, &threat(), personality, rng);
                let pick = engine.sample(&distribution, rng).unwrap();
                if escape.contains(&pick.as_str()) {
                    hits += 1;
                }
            }
            hits
        };

        let bold_hits = count(&bold, &mut rng);
        let timid_hits = count(&timid, &mut rng);
        assert!(
            timid_hits > bold_hits,
            "timid escaped {timid_hits} times vs bold {bold_hits}"
        );
    }

    #[test]
    fn stress_boosts_volatile_reactions() {
        let engine = ProbabilityEngine::default();
        let registry = small_registry();
        let mut rng = SmallRng::seed_from_u64(31);

        let mut calm = Personality::new("calm");
        calm.update_modifier(ModifierDimension::Stress, 0.1);
        let mut frantic = Personality::new("frantic");
        frantic.update_modifier(ModifierDimension::Stress, 0.95);

        let weight_of = |personality: &Personality, rng: &mut SmallRng| {
            let distribution = engine.distribution(&registry, &threat(), personality, rng);
            distribution
                .iter()
                .find(|t| t.name == "panic")
                .map(|t| t.weight)
                .unwrap_or(0.0)
        };

        // Average over trials to wash the jitter out
        let mut calm_total = 0.0;
        let mut frantic_total = 0.0;
        for _ in 0..200 {
            calm_total += weight_of(&calm, &mut rng);
            frantic_total += weight_of(&frantic, &mut rng);
        }
        assert!(frantic_total > calm_total);
    }
}
