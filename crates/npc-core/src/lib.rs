//! NPC cognition core.
//!
//! Personality model, tool registry, probability engine, and decision
//! orchestrator. A [`DecisionOrchestrator`] owns one agent's
//! [`Personality`], weighs every registered tool against an interpreted
//! stimulus, and executes one pick per call, optionally deferring the
//! final choice to an external [`ReasoningClient`].
//!
//! ```
//! use std::sync::Arc;
//! use npc_core::{
//!     DecisionOrchestrator, Personality, ToolCategory, ToolDescriptor, ToolRegistry,
//!     TraitDimension, Tuning,
//! };
//! use npc_stimulus::{Stimulus, StimulusSchema, StimulusType};
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(ToolDescriptor::new(
//!     "dialogue_response",
//!     "Say something in response",
//!     ToolCategory::Dialogue,
//!     |_| "The NPC says something.".to_string(),
//! ));
//!
//! let guard = Personality::new("Guard").with_trait(TraitDimension::Aggressiveness, 0.8);
//! let mut orchestrator =
//!     DecisionOrchestrator::new(guard, Arc::new(registry), Tuning::default());
//!
//! let stimulus = Stimulus::new("Halt!", "stranger", StimulusType::Dialogue)
//!     .with_schema(StimulusSchema::Threat);
//! let narration = orchestrator.decide_and_act(&stimulus);
//! assert!(!narration.is_empty());
//! ```

pub mod groups;
pub mod orchestrator;
pub mod params;
pub mod personality;
pub mod probability;
pub mod registry;
pub mod tuning;

pub use orchestrator::{DecisionOrchestrator, DecisionRecord};
pub use params::{build_params, ToolParams};
pub use personality::{
    quirk, ModifierDimension, Personality, PersonalityFactory, TraitDimension,
};
pub use probability::{ProbabilityEngine, WeightedTool, DEFAULT_TOOL};
pub use registry::{RegistryError, ToolCategory, ToolDescriptor, ToolRegistry};
pub use tuning::{EngineTuning, OrchestratorTuning, ReactionTuning, Tuning, TuningError};

// The reasoning boundary types are part of the orchestrator's public
// surface, so re-export them for downstream crates.
pub use npc_reasoner::{
    ActionProposal, PromptReasoner, ReasonerContext, ReasonerError, ReasoningClient,
    TextCompletion, ToolListing,
};
