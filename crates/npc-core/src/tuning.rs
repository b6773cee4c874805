//! Tunable constants for the decision core.
//!
//! Every hand-tuned number in the probability engine and the orchestrator
//! lives here rather than inline, loaded from a TOML file when the host
//! wants to override the shipped defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading a tuning file.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Complete decision-core tuning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tuning {
    /// Probability engine weights
    #[serde(default)]
    pub engine: EngineTuning,
    /// Modifier reaction scaling
    #[serde(default)]
    pub reaction: ReactionTuning,
    /// Orchestrator settings
    #[serde(default)]
    pub orchestrator: OrchestratorTuning,
}

impl Tuning {
    /// Loads tuning from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, TuningError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Parses tuning from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Renders the tuning as a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Probability engine weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTuning {
    /// Uniform base relevance every category starts from
    pub category_base: f32,
    /// Positive floor weight every registered tool is seeded with
    pub tool_floor: f32,
    /// Hard minimum any tool weight is clamped to after adjustments
    pub min_weight: f32,
    /// Weights at or below this are dropped before normalization
    pub prune_threshold: f32,
    /// Spread of the per-tool uniform jitter
    pub jitter_spread: f32,
    /// Scale applied to `(trait - 0.5)` for trait group adjustments
    pub trait_scale: f32,
    /// Scale applied to modifier threshold overshoot
    pub modifier_scale: f32,
    /// Fixed delta a matching quirk contributes
    pub quirk_delta: f32,
    /// Stress above this counts as high
    pub stress_high: f32,
    /// Stress below this counts as low
    pub stress_low: f32,
    /// Mood above this counts as high
    pub mood_high: f32,
    /// Mood below this counts as low
    pub mood_low: f32,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            category_base: 0.05,
            tool_floor: 0.01,
            min_weight: 0.001,
            prune_threshold: 0.01,
            jitter_spread: 0.08,
            trait_scale: 0.22,
            modifier_scale: 0.3,
            quirk_delta: 0.08,
            stress_high: 0.6,
            stress_low: 0.3,
            mood_high: 0.7,
            mood_low: 0.3,
        }
    }
}

/// Scaling for stimulus-driven modifier updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionTuning {
    /// Global multiplier on all modifier deltas
    pub intensity: f32,
    /// Baseline term of the salience scale factor
    pub baseline: f32,
    /// How strongly emotional salience amplifies deltas
    pub salience_weight: f32,
}

impl Default for ReactionTuning {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            baseline: 0.5,
            salience_weight: 1.0,
        }
    }
}

/// Orchestrator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorTuning {
    /// How many ranked suggestions the reasoner context carries
    pub advisory_limit: usize,
}

impl Default for OrchestratorTuning {
    fn default() -> Self {
        Self { advisory_limit: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let tuning = Tuning::default();
        assert!(tuning.engine.category_base > 0.0);
        assert!(tuning.engine.min_weight < tuning.engine.prune_threshold);
        assert!(tuning.engine.stress_low < tuning.engine.stress_high);
        assert_eq!(tuning.orchestrator.advisory_limit, 5);
    }

    #[test]
    fn toml_round_trip_preserves_values() {
        let mut tuning = Tuning::default();
        tuning.engine.jitter_spread = 0.12;
        tuning.reaction.intensity = 0.8;
        let rendered = tuning.to_toml().unwrap();
        let parsed = Tuning::from_toml_str(&rendered).unwrap();
        assert!((parsed.engine.jitter_spread - 0.12).abs() < 1e-6);
        assert!((parsed.reaction.intensity - 0.8).abs() < 1e-6);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let parsed = Tuning::from_toml_str("[engine]\njitter_spread = 0.2\n").unwrap();
        assert!((parsed.engine.jitter_spread - 0.2).abs() < 1e-6);
        assert!((parsed.engine.category_base - 0.05).abs() < 1e-6);
        assert!((parsed.reaction.intensity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn from_file_reads_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine]\ntrait_scale = 0.25").unwrap();
        let tuning = Tuning::from_file(file.path()).unwrap();
        assert!((tuning.engine.trait_scale - 0.25).abs() < 1e-6);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Tuning::from_file(Path::new("/nonexistent/tuning.toml"));
        assert!(matches!(result, Err(TuningError::Io(_))));
    }
}
