//! Tool registry.
//!
//! Tools are named, parameterized producers of human-readable action
//! descriptions. The host application populates one registry at startup and
//! treats it as read-only afterwards; the orchestrator only ever looks tools
//! up by name or lists them by category.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::ToolParams;

/// Grouping tag over tools, used to scope relevance scoring.
///
/// Assigned explicitly at registration time; nothing is inferred from where
/// a tool happens to be defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Dialogue,
    Combat,
    Movement,
    Social,
    Emotional,
    Item,
    Environmental,
    Communication,
    Observation,
    SelfCare,
    EverydayObject,
    SocialManeuvering,
    Cognitive,
    SubtleExpression,
    Perception,
    Needs,
}

impl ToolCategory {
    /// Returns all category variants.
    pub fn all() -> &'static [ToolCategory] {
        &[
            ToolCategory::Dialogue,
            ToolCategory::Combat,
            ToolCategory::Movement,
            ToolCategory::Social,
            ToolCategory::Emotional,
            ToolCategory::Item,
            ToolCategory::Environmental,
            ToolCategory::Communication,
            ToolCategory::Observation,
            ToolCategory::SelfCare,
            ToolCategory::EverydayObject,
            ToolCategory::SocialManeuvering,
            ToolCategory::Cognitive,
            ToolCategory::SubtleExpression,
            ToolCategory::Perception,
            ToolCategory::Needs,
        ]
    }

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            ToolCategory::Dialogue => "dialogue",
            ToolCategory::Combat => "combat",
            ToolCategory::Movement => "movement",
            ToolCategory::Social => "social",
            ToolCategory::Emotional => "emotional",
            ToolCategory::Item => "item",
            ToolCategory::Environmental => "environmental",
            ToolCategory::Communication => "communication",
            ToolCategory::Observation => "observation",
            ToolCategory::SelfCare => "self_care",
            ToolCategory::EverydayObject => "everyday_object",
            ToolCategory::SocialManeuvering => "social_maneuvering",
            ToolCategory::Cognitive => "cognitive",
            ToolCategory::SubtleExpression => "subtle_expression",
            ToolCategory::Perception => "perception",
            ToolCategory::Needs => "needs",
        }
    }
}

/// Execution function: parameters in, rendered action description out.
pub type ExecuteFn = Arc<dyn Fn(&ToolParams) -> String + Send + Sync>;

/// A registered tool: name, description, category, and execution function.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    category: ToolCategory,
    execute: ExecuteFn,
}

impl ToolDescriptor {
    /// Creates a descriptor from an execution closure.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ToolCategory,
        execute: impl Fn(&ToolParams) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            execute: Arc::new(execute),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ToolCategory {
        self.category
    }

    /// Runs the tool. Missing optional parameters take their documented
    /// defaults; execution never fails.
    pub fn execute(&self, params: &ToolParams) -> String {
        (self.execute)(params)
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Errors from registry lookups.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No tool registered under the requested name.
    #[error("no tool registered under name '{0}'")]
    NotFound(String),
}

/// Mapping from unique tool names to descriptors.
///
/// Populate once at startup, then share read-only. Registering a name twice
/// keeps the later descriptor; the overwrite is logged so it is an explicit,
/// observable event rather than a silent one.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its name. Last write wins.
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        let name = descriptor.name().to_string();
        if self.tools.insert(name.clone(), descriptor).is_some() {
            tracing::warn!(tool = %name, "tool re-registered; previous descriptor replaced");
        }
    }

    /// Looks a tool up by name.
    pub fn get(&self, name: &str) -> Result<&ToolDescriptor, RegistryError> {
        self.tools
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Checks whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Groups all descriptors by their category tag.
    pub fn list_by_category(&self) -> HashMap<ToolCategory, Vec<&ToolDescriptor>> {
        let mut grouped: HashMap<ToolCategory, Vec<&ToolDescriptor>> = HashMap::new();
        for descriptor in self.tools.values() {
            grouped.entry(descriptor.category()).or_default().push(descriptor);
        }
        // Stable order inside each category
        for descriptors in grouped.values_mut() {
            descriptors.sort_by(|a, b| a.name().cmp(b.name()));
        }
        grouped
    }

    /// Iterates over all descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        let mut descriptors: Vec<&ToolDescriptor> = self.tools.values().collect();
        descriptors.sort_by(|a, b| a.name().cmp(b.name()));
        descriptors.into_iter()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
