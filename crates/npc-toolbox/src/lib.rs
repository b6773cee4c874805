//! Standard action catalog.
//!
//! Eighty-odd tools grouped by category, each a narration renderer over a
//! loose parameter bag. [`register_all`] installs the full catalog into a
//! [`ToolRegistry`]; hosts that want a trimmed vocabulary can call the
//! per-module `register` functions instead.
//!
//! Tools never fail: missing parameters fall back to documented defaults
//! and the output is always a third-person narration line.

use std::sync::atomic::{AtomicUsize, Ordering};

use npc_core::ToolRegistry;

pub mod cognitive;
pub mod combat;
pub mod communication;
pub mod dialogue;
pub mod emotional;
pub mod environmental;
pub mod everyday_object;
pub mod item;
pub mod movement;
pub mod needs;
pub mod observation;
pub mod perception;
pub mod self_care;
pub mod social;
pub mod social_maneuvering;
pub mod subtle_expression;

/// Installs the complete catalog.
pub fn register_all(registry: &mut ToolRegistry) {
    cognitive::register(registry);
    combat::register(registry);
    communication::register(registry);
    dialogue::register(registry);
    emotional::register(registry);
    environmental::register(registry);
    everyday_object::register(registry);
    item::register(registry);
    movement::register(registry);
    needs::register(registry);
    observation::register(registry);
    perception::register(registry);
    self_care::register(registry);
    social::register(registry);
    social_maneuvering::register(registry);
    subtle_expression::register(registry);
}

/// Builds a registry with the complete catalog installed.
pub fn standard_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_all(&mut registry);
    registry
}

static PICK_CURSOR: AtomicUsize = AtomicUsize::new(0);

/// Picks one line from a set of equivalent narration variants.
///
/// Variants rotate on a process-wide cursor rather than drawing from an
/// ambient random source, so repeated renders still vary while the pipeline
/// around them stays reproducible under a seeded orchestrator.
pub(crate) fn pick(variants: &[&str]) -> String {
    if variants.is_empty() {
        return String::new();
    }
    let cursor = PICK_CURSOR.fetch_add(1, Ordering::Relaxed);
    variants[cursor % variants.len()].to_string()
}

/// [`pick`] over already-formatted lines.
pub(crate) fn pick_owned(variants: &[String]) -> String {
    if variants.is_empty() {
        return String::new();
    }
    let cursor = PICK_CURSOR.fetch_add(1, Ordering::Relaxed);
    variants[cursor % variants.len()].clone()
}
