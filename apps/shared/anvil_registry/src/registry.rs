//! The registration table itself.
//!
//! One registry instance is owned by the host's load-phase orchestrator and
//! handed by mutable reference to each plugin's init routine. It is **not**
//! thread-safe: all registration must finish on the loading thread before
//! any concurrent read access starts.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use anvil_schema::{Material, MaterialStats, Modifier, ToolDef, TraitDef, validate_identifier};

use crate::error::{RegistryError, Result};
use crate::hooks::{HookAction, NoopHooks, RegistryHooks};
use crate::registrant::{FixedRegistrant, RegistrantProvider, UNKNOWN_REGISTRANT};

/// Identifier of the fallback material. It is the sentinel returned for
/// failed lookups and the holder of default stat blocks: a stat kind can
/// only be attached to materials once the fallback carries defaults for it.
pub const FALLBACK_MATERIAL_ID: &str = "unknown";

/// Conflict-safe, provenance-tracked table of registered game content.
///
/// Four tables are owned exclusively by the registry: materials (with their
/// attached stats and traits), global trait definitions, the ordered tool
/// collection and the modifier map. Entries are created exactly once during
/// the load phase and never deleted; the only way to "remove" something is
/// the cancellation path, which prevents a material from ever committing.
pub struct Registry {
    materials: HashMap<String, Material>,
    traits: HashMap<String, TraitDef>,
    tools: Vec<ToolDef>,
    modifiers: HashMap<String, Modifier>,

    // Who registered what. Written once per successful commit, read when a
    // later plugin collides with an existing entry.
    material_registered_by: HashMap<String, String>,
    stat_registered_by: HashMap<String, HashMap<String, String>>,
    material_trait_registered_by: HashMap<String, HashMap<String, String>>,
    trait_def_registered_by: HashMap<String, String>,

    // Materials vetoed by the hook. Calls touching these are eaten silently.
    cancelled_materials: HashSet<String>,

    fallback: Material,
    registrant: Box<dyn RegistrantProvider>,
    hooks: Box<dyn RegistryHooks>,
}

impl Registry {
    /// Create an empty registry with the given collaborators.
    pub fn new(registrant: Box<dyn RegistrantProvider>, hooks: Box<dyn RegistryHooks>) -> Self {
        Self {
            materials: HashMap::new(),
            traits: HashMap::new(),
            tools: Vec::new(),
            modifiers: HashMap::new(),
            material_registered_by: HashMap::new(),
            stat_registered_by: HashMap::new(),
            material_trait_registered_by: HashMap::new(),
            trait_def_registered_by: HashMap::new(),
            cancelled_materials: HashSet::new(),
            fallback: Material::new(FALLBACK_MATERIAL_ID, "Unknown"),
            registrant,
            hooks,
        }
    }

    /// Registry with an anonymous registrant and no hooks, for hosts that
    /// register everything themselves.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(FixedRegistrant(UNKNOWN_REGISTRANT.to_string())),
            Box::new(NoopHooks),
        )
    }

    /*-----------------------------------------------------------------------
    | Materials
    -----------------------------------------------------------------------*/

    /// Register a material. The identifier has to be lowercase, non-empty
    /// and free of whitespace, and globally unique.
    ///
    /// A hook veto is not an error: the call returns `Ok`, the identifier
    /// goes into the cancellation set and every later attachment against it
    /// is silently ignored.
    pub fn add_material(&mut self, material: Material) -> Result<()> {
        validate_identifier(&material.identifier).map_err(|source| {
            RegistryError::InvalidIdentifier {
                identifier: material.identifier.clone(),
                source,
            }
        })?;

        if self.materials.contains_key(&material.identifier) {
            let registered_by = self.registered_by(&material.identifier).to_string();
            return Err(RegistryError::DuplicateMaterial {
                identifier: material.identifier,
                registered_by,
            });
        }

        if self.hooks.on_material_register(&material) == HookAction::Cancel {
            trace!(
                "Registration of material '{}' cancelled by hook",
                material.identifier
            );
            self.cancelled_materials.insert(material.identifier);
            return Ok(());
        }

        let registrant = self.registrant.current_registrant();
        self.material_registered_by
            .insert(material.identifier.clone(), registrant);
        self.materials.insert(material.identifier.clone(), material);
        Ok(())
    }

    /// Register a material and attach a stat block.
    ///
    /// The attach step runs even when the base registration failed. It then
    /// no-ops for a cancelled material and reports the missing material
    /// otherwise; the base error is the one returned.
    pub fn add_material_with_stats(&mut self, material: Material, stats: MaterialStats) -> Result<()> {
        let identifier = material.identifier.clone();
        let base = self.add_material(material);
        let attach = self.add_material_stats(&identifier, stats);
        base.and(attach)
    }

    /// Register a material and attach a trait. Same sequencing behavior as
    /// [`Registry::add_material_with_stats`].
    pub fn add_material_with_trait(&mut self, material: Material, trait_def: TraitDef) -> Result<()> {
        let identifier = material.identifier.clone();
        let base = self.add_material(material);
        let attach = self.add_material_trait(&identifier, trait_def);
        base.and(attach)
    }

    /// Register a material with both a stat block and a trait.
    pub fn add_material_full(
        &mut self,
        material: Material,
        stats: MaterialStats,
        trait_def: TraitDef,
    ) -> Result<()> {
        let identifier = material.identifier.clone();
        let base = self.add_material(material);
        let stats_attach = self.add_material_stats(&identifier, stats);
        let trait_attach = self.add_material_trait(&identifier, trait_def);
        base.and(stats_attach).and(trait_attach)
    }

    /// Look up a material. Returns the fallback material for unknown
    /// identifiers, never an absent signal, so lookups can be chained.
    pub fn get_material(&self, identifier: &str) -> &Material {
        self.materials.get(identifier).unwrap_or(&self.fallback)
    }

    /// All registered materials.
    pub fn all_materials(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    /// The fallback material ("unknown" sentinel and default stat holder).
    pub fn fallback_material(&self) -> &Material {
        &self.fallback
    }

    /// Whether a material registration was vetoed by the hook.
    pub fn is_cancelled(&self, identifier: &str) -> bool {
        self.cancelled_materials.contains(identifier)
    }

    /*-----------------------------------------------------------------------
    | Stats & traits
    -----------------------------------------------------------------------*/

    /// Attach default values for a stat kind to the fallback material.
    /// Required before that stat kind can be attached to any material.
    pub fn register_default_stats(&mut self, stats: MaterialStats) {
        self.fallback.add_stats(stats);
    }

    /// Attach a stat block to a registered material.
    ///
    /// Silently ignored for cancelled materials. The hook may substitute a
    /// replacement block; the (possibly substituted) block is committed and
    /// traced to the current registrant.
    pub fn add_material_stats(&mut self, identifier: &str, stats: MaterialStats) -> Result<()> {
        if self.cancelled_materials.contains(identifier) {
            return Ok(());
        }

        let Some(material) = self.materials.get(identifier) else {
            return Err(RegistryError::UnknownMaterial {
                identifier: identifier.to_string(),
                attachment: stats.identifier,
            });
        };

        if material.stats(&stats.identifier).is_some() {
            let registered_by = self.stats_registered_by(identifier, &stats.identifier).to_string();
            return Err(RegistryError::DuplicateStats {
                identifier: identifier.to_string(),
                stat_kind: stats.identifier,
                registered_by,
            });
        }

        if self.fallback.stats(&stats.identifier).is_none() {
            return Err(RegistryError::MissingDefaultStats {
                stat_kind: stats.identifier,
            });
        }

        let stats = self.hooks.on_stats_register(material, &stats).unwrap_or(stats);

        let registrant = self.registrant.current_registrant();
        self.stat_registered_by
            .entry(identifier.to_string())
            .or_default()
            .insert(stats.identifier.clone(), registrant);
        if let Some(material) = self.materials.get_mut(identifier) {
            material.add_stats(stats);
        }
        Ok(())
    }

    /// Register a trait definition globally. Idempotent: definitions are
    /// shared between materials and modifiers, so re-registration is not an
    /// error and leaves the first definition (and its trace) in place.
    pub fn add_trait(&mut self, trait_def: TraitDef) {
        if self.traits.contains_key(&trait_def.identifier) {
            return;
        }

        let registrant = self.registrant.current_registrant();
        self.trait_def_registered_by
            .insert(trait_def.identifier.clone(), registrant);
        self.traits.insert(trait_def.identifier.clone(), trait_def);
    }

    /// Attach a trait to a registered material, registering the definition
    /// globally first if it is new.
    ///
    /// Silently ignored for cancelled materials. A hook veto drops only the
    /// attachment; the global definition stays registered.
    pub fn add_material_trait(&mut self, identifier: &str, trait_def: TraitDef) -> Result<()> {
        if self.cancelled_materials.contains(identifier) {
            return Ok(());
        }

        if !self.materials.contains_key(identifier) {
            return Err(RegistryError::UnknownMaterial {
                identifier: identifier.to_string(),
                attachment: trait_def.identifier,
            });
        }

        if self.get_material(identifier).has_trait(&trait_def.identifier) {
            let registered_by = self
                .trait_registered_by(identifier, &trait_def.identifier)
                .to_string();
            return Err(RegistryError::DuplicateTrait {
                identifier: identifier.to_string(),
                trait_id: trait_def.identifier,
                registered_by,
            });
        }

        // The definition survives even if the attachment below is vetoed.
        self.add_trait(trait_def.clone());

        let Some(material) = self.materials.get(identifier) else {
            return Ok(());
        };
        if self.hooks.on_trait_register(material, &trait_def) == HookAction::Cancel {
            trace!(
                "Attachment of trait '{}' to '{}' cancelled by hook",
                trait_def.identifier, identifier
            );
            return Ok(());
        }

        let registrant = self.registrant.current_registrant();
        self.material_trait_registered_by
            .entry(identifier.to_string())
            .or_default()
            .insert(trait_def.identifier.clone(), registrant);
        if let Some(material) = self.materials.get_mut(identifier) {
            material.add_trait(trait_def);
        }
        Ok(())
    }

    /// Look up a globally registered trait definition.
    pub fn get_trait(&self, identifier: &str) -> Option<&TraitDef> {
        self.traits.get(identifier)
    }

    /*-----------------------------------------------------------------------
    | Tools & modifiers
    -----------------------------------------------------------------------*/

    /// Add a tool. Insertion order is preserved; re-adding an identifier
    /// already present is a no-op.
    pub fn add_tool(&mut self, tool: ToolDef) {
        if self.tools.iter().any(|t| t.identifier == tool.identifier) {
            return;
        }
        self.tools.push(tool);
    }

    /// All known tools, in registration order.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Register a modifier. Last writer wins: modifiers are expected to be
    /// replaced sometimes, unlike materials.
    pub fn register_modifier(&mut self, modifier: Modifier) {
        self.modifiers.insert(modifier.identifier.clone(), modifier);
    }

    pub fn get_modifier(&self, identifier: &str) -> Option<&Modifier> {
        self.modifiers.get(identifier)
    }

    pub fn all_modifiers(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.values()
    }

    /*-----------------------------------------------------------------------
    | Provenance
    -----------------------------------------------------------------------*/

    /// Who registered a material, or "unknown" if nobody did.
    pub fn registered_by(&self, identifier: &str) -> &str {
        self.material_registered_by
            .get(identifier)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGISTRANT)
    }

    /// Who attached a stat block of the given kind to a material.
    pub fn stats_registered_by(&self, identifier: &str, stat_kind: &str) -> &str {
        self.stat_registered_by
            .get(identifier)
            .and_then(|per_kind| per_kind.get(stat_kind))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGISTRANT)
    }

    /// Who attached a trait to a material.
    pub fn trait_registered_by(&self, identifier: &str, trait_id: &str) -> &str {
        self.material_trait_registered_by
            .get(identifier)
            .and_then(|per_trait| per_trait.get(trait_id))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGISTRANT)
    }

    /// Who first registered a trait definition globally.
    pub fn trait_def_registered_by(&self, trait_id: &str) -> &str {
        self.trait_def_registered_by
            .get(trait_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_REGISTRANT)
    }
}
