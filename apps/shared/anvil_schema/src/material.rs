use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use std::collections::HashMap;

use crate::Validatable;
use crate::content::TraitDef;

/// A material that tools and parts can be made from.
///
/// Materials carry their attached stat blocks (keyed by stat kind) and
/// traits. Attachment happens through the registry after the material itself
/// has been registered; a material loaded from a definition file may also
/// ship with stats and traits inline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Material Definition")]
pub struct Material {
    /// Globally unique identifier (lowercase, no whitespace)
    #[schemars(description = "Globally unique material identifier")]
    pub identifier: String,

    /// Human-readable name for UI display
    #[schemars(description = "Display name of the material")]
    pub display_name: String,

    /// Whether parts can be crafted from this material without a smeltery
    #[schemars(description = "True if parts can be crafted directly")]
    #[serde(default)]
    pub craftable: bool,

    /// Stat blocks attached to this material, keyed by stat kind
    #[serde(default)]
    stats: HashMap<String, MaterialStats>,

    /// Traits attached to this material, in attachment order
    #[serde(default)]
    traits: Vec<TraitDef>,
}

impl Material {
    /// Create a material with no stats or traits attached yet.
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            craftable: false,
            stats: HashMap::new(),
            traits: Vec::new(),
        }
    }

    /// Look up the stat block of a given kind, if attached.
    pub fn stats(&self, kind: &str) -> Option<&MaterialStats> {
        self.stats.get(kind)
    }

    /// Attach a stat block, replacing any existing block of the same kind.
    /// Duplicate policy is enforced by the registry, not here.
    pub fn add_stats(&mut self, stats: MaterialStats) {
        self.stats.insert(stats.identifier.clone(), stats);
    }

    /// Check whether a trait is already attached.
    pub fn has_trait(&self, identifier: &str) -> bool {
        self.traits.iter().any(|t| t.identifier == identifier)
    }

    /// Attach a trait. Duplicate policy is enforced by the registry.
    pub fn add_trait(&mut self, trait_def: TraitDef) {
        self.traits.push(trait_def);
    }

    /// Traits attached to this material, in attachment order.
    pub fn traits(&self) -> &[TraitDef] {
        &self.traits
    }

    /// Stat kinds attached to this material.
    pub fn stat_kinds(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }
}

impl Validatable for Material {}

/// A stat block of one kind (e.g. "head", "handle") with its numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Material Stats")]
pub struct MaterialStats {
    /// Stat kind identifier, unique within a material's attached set
    #[schemars(description = "Stat kind this block provides values for")]
    pub identifier: String,

    /// Named numeric values (e.g. durability, mining speed)
    #[serde(default)]
    pub values: HashMap<String, f64>,
}

impl MaterialStats {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            values: HashMap::new(),
        }
    }

    /// Builder-style helper for adding a value.
    pub fn with_value(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_attach_and_lookup() {
        let mut material = Material::new("copper", "Copper");
        assert!(material.stats("head").is_none());

        material.add_stats(MaterialStats::new("head").with_value("durability", 210.0));
        let head = material.stats("head").unwrap();
        assert_eq!(head.value("durability"), Some(210.0));
        assert_eq!(head.value("speed"), None);
    }

    #[test]
    fn test_trait_attach_and_lookup() {
        let mut material = Material::new("cobalt", "Cobalt");
        assert!(!material.has_trait("momentum"));

        material.add_trait(TraitDef::new("momentum", "Speeds up while mining"));
        assert!(material.has_trait("momentum"));
        assert_eq!(material.traits().len(), 1);
    }

    #[test]
    fn test_material_from_json() {
        let json = r#"{
            "identifier": "copper",
            "display_name": "Copper",
            "craftable": true,
            "stats": {
                "head": { "identifier": "head", "values": { "durability": 210.0 } }
            }
        }"#;

        let material = Material::from_json_str(json).unwrap();
        assert_eq!(material.identifier, "copper");
        assert!(material.craftable);
        assert_eq!(
            material.stats("head").unwrap().value("durability"),
            Some(210.0)
        );
    }

    #[test]
    fn test_material_json_defaults() {
        let json = r#"{ "identifier": "stone", "display_name": "Stone" }"#;

        let material = Material::from_json_str(json).unwrap();
        assert!(!material.craftable);
        assert!(material.traits().is_empty());
        assert_eq!(material.stat_kinds().count(), 0);
    }

    #[test]
    fn test_material_json_missing_identifier() {
        let json = r#"{ "display_name": "Nameless" }"#;
        assert!(Material::from_json_str(json).is_err());
    }
}
