use serde::{Deserialize, Serialize};
use schemars::JsonSchema;

use crate::Validatable;

/// A trait definition. Trait definitions are shared: the same trait can be
/// attached to many materials, so definitions are registered globally once
/// and referenced by identifier afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Trait Definition")]
pub struct TraitDef {
    /// Globally unique trait identifier
    pub identifier: String,

    /// Short description of the trait's effect
    #[serde(default)]
    pub description: String,
}

impl TraitDef {
    pub fn new(identifier: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
        }
    }
}

impl Validatable for TraitDef {}

/// A tool definition. Tools form an ordered collection: the order they are
/// registered in is the order they show up in crafting UIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Tool Definition")]
pub struct ToolDef {
    /// Unique tool identifier
    pub identifier: String,

    /// Display name of the tool
    pub display_name: String,
}

impl ToolDef {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

impl Validatable for ToolDef {}

/// A modifier definition. Unlike materials, modifiers are expected to be
/// replaced sometimes (a plugin overriding another's modifier), so the
/// registry keeps them in a plain last-writer-wins map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Modifier Definition")]
pub struct Modifier {
    /// Unique modifier identifier
    pub identifier: String,

    /// Display name of the modifier
    pub display_name: String,

    /// Maximum number of times the modifier can be applied to one tool
    #[serde(default = "default_max_level")]
    pub max_level: u32,
}

fn default_max_level() -> u32 {
    1
}

impl Modifier {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            max_level: 1,
        }
    }
}

impl Validatable for Modifier {}
