//! Shared stimulus vocabulary for the NPC cognition workspace.
//!
//! This crate contains the normalized representation of a perceived event
//! as produced by an external interpreter. It is pure data with no
//! decision logic and is a dependency for all other crates in the
//! workspace.

pub mod stimulus;
pub mod types;

pub use stimulus::{Stimulus, StimulusError};
pub use types::{SalienceDimension, StimulusIntent, StimulusSchema, StimulusType};
