//! Registration hooks.
//!
//! The host injects a single hook implementation when constructing the
//! registry. Hooks are consulted synchronously before a registration commits
//! and can veto it (materials, trait attachments) or substitute the payload
//! (stat blocks). A veto is a business-rule decision, not an error: the
//! registration call still returns `Ok`.

use anvil_schema::{Material, MaterialStats, TraitDef};

/// Outcome of a cancellable hook notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    /// Let the registration commit.
    Proceed,
    /// Veto the registration. For materials this marks the identifier as
    /// permanently cancelled; for trait attachments only the attachment is
    /// dropped.
    Cancel,
}

/// Observer/veto interface for registrations. All methods default to
/// letting the registration through unchanged.
pub trait RegistryHooks {
    /// Called before a material commits. `Cancel` puts the identifier into
    /// the cancellation set; later stat/trait attachments to it become
    /// silent no-ops.
    fn on_material_register(&mut self, _material: &Material) -> HookAction {
        HookAction::Proceed
    }

    /// Called before a stat block commits. Returning `Some` substitutes the
    /// replacement block for the one being registered. Stat registration
    /// cannot be vetoed, only overridden.
    fn on_stats_register(
        &mut self,
        _material: &Material,
        _stats: &MaterialStats,
    ) -> Option<MaterialStats> {
        None
    }

    /// Called before a trait attaches to a material. `Cancel` drops the
    /// attachment; the global trait definition stays registered.
    fn on_trait_register(&mut self, _material: &Material, _trait_def: &TraitDef) -> HookAction {
        HookAction::Proceed
    }
}

/// Hook implementation that lets everything through. Used by hosts that do
/// not need to observe registrations.
pub struct NoopHooks;

impl RegistryHooks for NoopHooks {}
