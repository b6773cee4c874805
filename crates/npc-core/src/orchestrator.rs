//! Decision orchestrator.
//!
//! Drives one full reaction: update emotional modifiers from the stimulus,
//! select a tool (heuristic sampling, or external reasoner with the
//! heuristic ranking as advisory context), build parameters, execute, and
//! record the decision. The whole path is infallible: every internal
//! failure degrades to the heuristic pipeline and every call returns a
//! narration string.

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::Value;
use uuid::Uuid;

use npc_reasoner::{ReasonerContext, ReasoningClient, ToolListing};
use npc_stimulus::{SalienceDimension, Stimulus, StimulusIntent, StimulusSchema};

use crate::params::{build_params, ToolParams};
use crate::personality::{ModifierDimension, Personality};
use crate::probability::{ProbabilityEngine, WeightedTool, DEFAULT_TOOL};
use crate::registry::ToolRegistry;
use crate::tuning::Tuning;

/// Identifier aliases for action names the reasoner commonly invents.
const ALIASES: &[(&str, &str)] = &[
    ("run", "flee"),
    ("run_away", "flee"),
    ("escape", "flee"),
    ("respond", "dialogue_response"),
    ("talk", "dialogue_response"),
    ("speak", "dialogue_response"),
    ("say", "dialogue_response"),
    ("reply", "dialogue_response"),
    ("cover", "take_cover"),
    ("duck", "take_cover"),
    ("emote", "express_emotion"),
    ("investigate", "investigate_anomaly"),
    ("thank", "show_politeness"),
    ("watch", "observe_person"),
    ("look", "observe_environment"),
    ("fight", "attack"),
    ("help", "offer_help"),
    ("calm_down", "rest"),
    ("think", "ponder"),
];

/// One completed decision, append-only.
#[derive(Debug, Clone)]
pub struct DecisionRecord {
    pub id: Uuid,
    /// Raw content of the stimulus that triggered the decision
    pub stimulus: String,
    pub source: String,
    /// Registered tool that was executed
    pub tool: String,
    /// Narration the tool produced
    pub outcome: String,
    /// Whether the external reasoner picked the tool
    pub via_reasoner: bool,
    /// Stress and mood after the modifier update, for replay inspection
    pub stress: f32,
    pub mood: f32,
}

/// Per-agent decision loop. Owns the personality (mutable modifier state),
/// shares the tool registry, and optionally defers tool choice to an
/// external reasoner.
pub struct DecisionOrchestrator {
    personality: Personality,
    registry: Arc<ToolRegistry>,
    engine: ProbabilityEngine,
    tuning: Tuning,
    reasoner: Option<Box<dyn ReasoningClient>>,
    history: Vec<DecisionRecord>,
    rng: SmallRng,
}

impl DecisionOrchestrator {
    pub fn new(personality: Personality, registry: Arc<ToolRegistry>, tuning: Tuning) -> Self {
        Self {
            engine: ProbabilityEngine::new(tuning.engine.clone()),
            personality,
            registry,
            tuning,
            reasoner: None,
            history: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Routes tool choice through an external reasoner. The heuristic
    /// pipeline remains the fallback for every reasoner failure.
    pub fn with_reasoner(mut self, reasoner: Box<dyn ReasoningClient>) -> Self {
        self.reasoner = Some(reasoner);
        self
    }

    /// Fixes the sampling seed, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    pub fn history(&self) -> &[DecisionRecord] {
        &self.history
    }

    /// Runs the full reaction pipeline for one stimulus and returns the
    /// tool's narration. Never fails; an empty registry yields a stock
    /// hesitation line.
    pub fn decide_and_act(&mut self, stimulus: &Stimulus) -> String {
        self.apply_stimulus_pressure(stimulus);

        let distribution =
            self.engine
                .distribution(&self.registry, stimulus, &self.personality, &mut self.rng);
        if distribution.is_empty() {
            tracing::warn!("no tools registered; emitting stock response");
            return format!("{} hesitates, unsure how to react.", self.personality.name);
        }

        let (tool_name, reasoner_params) = self.select_tool(stimulus, &distribution);
        let via_reasoner = reasoner_params.is_some();

        let params = match reasoner_params {
            Some(map) => ToolParams::from_map(map),
            None => build_params(&tool_name, stimulus, &self.personality),
        };

        let outcome = match self.registry.get(&tool_name) {
            Ok(descriptor) => descriptor.execute(&params),
            // select_tool only returns registered names; belt and braces
            Err(error) => {
                tracing::error!(%error, "selected tool vanished from registry");
                format!("{} hesitates, unsure how to react.", self.personality.name)
            }
        };

        tracing::info!(
            agent = %self.personality.name,
            tool = %tool_name,
            via_reasoner,
            "decision executed"
        );

        self.history.push(DecisionRecord {
            id: Uuid::new_v4(),
            stimulus: stimulus.raw_content.clone(),
            source: stimulus.source.clone(),
            tool: tool_name,
            outcome: outcome.clone(),
            via_reasoner,
            stress: self.personality.get_modifier(ModifierDimension::Stress),
            mood: self.personality.get_modifier(ModifierDimension::Mood),
        });

        outcome
    }

    /// Shifts stress and mood from the stimulus tags, scaled by emotional
    /// salience.
    fn apply_stimulus_pressure(&mut self, stimulus: &Stimulus) {
        let reaction = &self.tuning.reaction;
        let emotional = stimulus.salience_for(SalienceDimension::Emotional);
        let scale = (reaction.baseline + reaction.salience_weight * emotional)
            * reaction.intensity
            * stimulus.confidence;

        let mut stress_delta = 0.0f32;
        let mut mood_delta = 0.0f32;

        for schema in &stimulus.schema {
            let (stress, mood) = match schema {
                StimulusSchema::Threat => (0.15, -0.05),
                StimulusSchema::Violence => (0.20, -0.10),
                StimulusSchema::Insult => (0.10, -0.10),
                StimulusSchema::Betrayal => (0.15, -0.15),
                StimulusSchema::Deception => (0.05, -0.05),
                StimulusSchema::Abandonment => (0.10, -0.15),
                StimulusSchema::Disgust => (0.05, -0.05),
                StimulusSchema::Praise => (-0.05, 0.10),
                StimulusSchema::Reassurance => (-0.10, 0.05),
                StimulusSchema::Compassion => (-0.05, 0.10),
                StimulusSchema::Flirtation => (0.0, 0.05),
                _ => (0.0, 0.0),
            };
            stress_delta += stress;
            mood_delta += mood;
        }

        if let Some(intent) = stimulus.intent {
            let (stress, mood) = match intent {
                StimulusIntent::Humiliate => (0.10, -0.10),
                StimulusIntent::Provoke => (0.10, -0.05),
                StimulusIntent::Manipulate => (0.05, -0.05),
                StimulusIntent::BuildRapport => (-0.05, 0.05),
                StimulusIntent::ExpressLove => (-0.05, 0.10),
                StimulusIntent::AskForForgiveness => (-0.05, 0.05),
                _ => (0.0, 0.0),
            };
            stress_delta += stress;
            mood_delta += mood;
        }

        if stress_delta != 0.0 {
            let current = self.personality.get_modifier(ModifierDimension::Stress);
            self.personality
                .update_modifier(ModifierDimension::Stress, current + stress_delta * scale);
        }
        if mood_delta != 0.0 {
            let current = self.personality.get_modifier(ModifierDimension::Mood);
            self.personality
                .update_modifier(ModifierDimension::Mood, current + mood_delta * scale);
        }
    }

    /// Picks the tool to run. Returns reasoner-supplied parameters when the
    /// reasoner made the pick.
    fn select_tool(
        &mut self,
        stimulus: &Stimulus,
        distribution: &[WeightedTool],
    ) -> (String, Option<serde_json::Map<String, Value>>) {
        if let Some(reasoner) = &self.reasoner {
            let context = self.reasoner_context(distribution);
            match reasoner.propose_action(stimulus, &context) {
                Ok(proposal) => {
                    if let Some(tool) = self.resolve_identifier(&proposal.action) {
                        return (tool, Some(proposal.parameters));
                    }
                    tracing::warn!(
                        action = %proposal.action,
                        "reasoner proposed unknown action; falling back to heuristics"
                    );
                    return (self.fallback_tool(distribution), None);
                }
                Err(error) => {
                    tracing::warn!(%error, "reasoner failed; falling back to heuristics");
                    return (self.fallback_tool(distribution), None);
                }
            }
        }

        let pick = self
            .engine
            .sample(distribution, &mut self.rng)
            .unwrap_or_else(|| distribution[0].name.clone());
        (pick, None)
    }

    /// Maps a reasoner identifier onto a registered tool name, consulting
    /// the alias table for near misses.
    fn resolve_identifier(&self, action: &str) -> Option<String> {
        let normalized = action.trim().to_lowercase().replace([' ', '-'], "_");
        if self.registry.contains(&normalized) {
            return Some(normalized);
        }
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, tool)| tool.to_string())
            .filter(|tool| self.registry.contains(tool))
    }

    /// Fallback when the reasoner path produced nothing usable: the top
    /// heuristic suggestion, then the default tool, then anything.
    fn fallback_tool(&self, distribution: &[WeightedTool]) -> String {
        if let Some(top) = distribution.first() {
            return top.name.clone();
        }
        if self.registry.contains(DEFAULT_TOOL) {
            return DEFAULT_TOOL.to_string();
        }
        // Callers only reach here with a non-empty distribution, but keep
        // the chain total
        self.registry
            .iter()
            .next()
            .map(|t| t.name().to_string())
            .unwrap_or_else(|| DEFAULT_TOOL.to_string())
    }

    fn reasoner_context(&self, distribution: &[WeightedTool]) -> ReasonerContext {
        let ranked_suggestions: Vec<(String, f32)> = distribution
            .iter()
            .take(self.tuning.orchestrator.advisory_limit)
            .map(|t| (t.name.clone(), t.weight))
            .collect();

        let available_tools: Vec<ToolListing> = self
            .registry
            .iter()
            .map(|t| ToolListing {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect();

        ReasonerContext {
            personality_summary: self.personality.summary(),
            quirks: self.personality.quirks.clone(),
            mood: describe_level(self.personality.get_modifier(ModifierDimension::Mood)),
            stress: describe_level(self.personality.get_modifier(ModifierDimension::Stress)),
            ranked_suggestions,
            available_tools,
        }
    }

    /// Per-tool pick counts over the recorded history.
    pub fn tool_usage(&self) -> HashMap<String, usize> {
        let mut usage = HashMap::new();
        for record in &self.history {
            *usage.entry(record.tool.clone()).or_insert(0) += 1;
        }
        usage
    }
}

fn describe_level(value: f32) -> String {
    let label = if value < 0.2 {
        "very low"
    } else if value < 0.4 {
        "low"
    } else if value < 0.6 {
        "moderate"
    } else if value < 0.8 {
        "high"
    } else {
        "very high"
    };
    format!("{label} ({value:.2})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ToolCategory, ToolDescriptor};
    use npc_reasoner::{ActionProposal, ReasonerError};
    use npc_stimulus::StimulusType;
    use serde_json::Map;

    fn registry() -> Arc<ToolRegistry> {
        let mut registry = ToolRegistry::new();
        for (name, category) in [
            ("dialogue_response", ToolCategory::Dialogue),
            ("flee", ToolCategory::Movement),
            ("take_cover", ToolCategory::Movement),
            ("attack", ToolCategory::Combat),
            ("defend", ToolCategory::Combat),
            ("express_emotion", ToolCategory::Emotional),
            ("laugh", ToolCategory::Emotional),
            ("observe_person", ToolCategory::Observation),
        ] {
            registry.register(ToolDescriptor::new(
                name,
                format!("{name} tool"),
                category,
                move |_| format!("NPC performs {name}."),
            ));
        }
        Arc::new(registry)
    }

    fn orchestrator() -> DecisionOrchestrator {
        DecisionOrchestrator::new(Personality::new("Mira"), registry(), Tuning::default())
            .with_seed(42)
    }

    fn insult() -> Stimulus {
        Stimulus::new("You're pathetic.", "rival", StimulusType::Dialogue)
            .with_schema(StimulusSchema::Insult)
            .with_intent(StimulusIntent::Humiliate)
            .with_salience(SalienceDimension::Emotional, 0.9)
    }

    struct FailingReasoner;
    impl ReasoningClient for FailingReasoner {
        fn propose_action(
            &self,
            _: &Stimulus,
            _: &ReasonerContext,
        ) -> Result<ActionProposal, ReasonerError> {
            Err(ReasonerError::Transport("connection refused".to_string()))
        }
    }

    struct FixedReasoner(&'static str);
    impl ReasoningClient for FixedReasoner {
        fn propose_action(
            &self,
            _: &Stimulus,
            _: &ReasonerContext,
        ) -> Result<ActionProposal, ReasonerError> {
            Ok(ActionProposal {
                action: self.0.to_string(),
                parameters: Map::new(),
            })
        }
    }

    #[test]
    fn every_call_appends_one_history_record() {
        let mut orchestrator = orchestrator();
        for round in 1..=5 {
            let outcome = orchestrator.decide_and_act(&insult());
            assert!(!outcome.is_empty());
            assert_eq!(orchestrator.history().len(), round);
        }
    }

    #[test]
    fn insult_raises_stress_and_lowers_mood() {
        let mut orchestrator = orchestrator();
        let before_stress = orchestrator.personality().get_modifier(ModifierDimension::Stress);
        let before_mood = orchestrator.personality().get_modifier(ModifierDimension::Mood);

        orchestrator.decide_and_act(&insult());

        assert!(
            orchestrator.personality().get_modifier(ModifierDimension::Stress) > before_stress
        );
        assert!(orchestrator.personality().get_modifier(ModifierDimension::Mood) < before_mood);
    }

    #[test]
    fn praise_relaxes_the_agent() {
        let mut orchestrator = orchestrator();
        orchestrator
            .personality
            .update_modifier(ModifierDimension::Stress, 0.8);

        let praise = Stimulus::new("Well done!", "friend", StimulusType::Dialogue)
            .with_schema(StimulusSchema::Praise)
            .with_salience(SalienceDimension::Emotional, 0.7);
        orchestrator.decide_and_act(&praise);

        assert!(orchestrator.personality().get_modifier(ModifierDimension::Stress) < 0.8);
    }

    #[test]
    fn failing_reasoner_still_produces_an_outcome() {
        let mut orchestrator = DecisionOrchestrator::new(
            Personality::new("Mira"),
            registry(),
            Tuning::default(),
        )
        .with_seed(7)
        .with_reasoner(Box::new(FailingReasoner));

        let outcome = orchestrator.decide_and_act(&insult());
        assert!(outcome.starts_with("NPC performs"));
        assert!(!orchestrator.history()[0].via_reasoner);
    }

    #[test]
    fn reasoner_identifier_is_alias_mapped() {
        let mut orchestrator = DecisionOrchestrator::new(
            Personality::new("Mira"),
            registry(),
            Tuning::default(),
        )
        .with_seed(7)
        .with_reasoner(Box::new(FixedReasoner("Run Away")));

        orchestrator.decide_and_act(&insult());
        let record = &orchestrator.history()[0];
        assert_eq!(record.tool, "flee");
        assert!(record.via_reasoner);
    }

    #[test]
    fn unknown_reasoner_action_falls_back_to_heuristics() {
        let mut orchestrator = DecisionOrchestrator::new(
            Personality::new("Mira"),
            registry(),
            Tuning::default(),
        )
        .with_seed(7)
        .with_reasoner(Box::new(FixedReasoner("summon_dragon")));

        let outcome = orchestrator.decide_and_act(&insult());
        assert!(outcome.starts_with("NPC performs"));
        assert!(!orchestrator.history()[0].via_reasoner);
    }

    #[test]
    fn empty_registry_yields_stock_response() {
        let mut orchestrator = DecisionOrchestrator::new(
            Personality::new("Mira"),
            Arc::new(ToolRegistry::new()),
            Tuning::default(),
        )
        .with_seed(7);

        let outcome = orchestrator.decide_and_act(&insult());
        assert!(outcome.contains("hesitates"));
        assert!(orchestrator.history().is_empty());
    }

    #[test]
    fn tool_usage_counts_history() {
        let mut orchestrator = orchestrator();
        for _ in 0..10 {
            orchestrator.decide_and_act(&insult());
        }
        let total: usize = orchestrator.tool_usage().values().sum();
        assert_eq!(total, 10);
    }
}
