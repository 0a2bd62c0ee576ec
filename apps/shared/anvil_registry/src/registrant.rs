//! Registrant identity.
//!
//! The registry records which plugin registered what, so duplicate errors
//! can name the original claimant. It does not know about plugins itself; it
//! asks a [`RegistrantProvider`] at commit time for "whoever is executing
//! this registration call right now".

use std::sync::{Arc, RwLock};

/// Registrant id used when nobody announced themselves.
pub const UNKNOWN_REGISTRANT: &str = "unknown";

/// Tells the registry which plugin is currently registering content.
/// Queried synchronously at commit time; must return a stable id.
pub trait RegistrantProvider {
    fn current_registrant(&self) -> String;
}

/// Shared cell tracking the plugin currently in its registration call.
///
/// The load-phase driver keeps one handle and updates it before invoking
/// each plugin's init routine; a clone of the same cell goes into the
/// registry as its provider.
#[derive(Clone, Default)]
pub struct ActiveRegistrant {
    current: Arc<RwLock<Option<String>>>,
}

impl ActiveRegistrant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a plugin as the active registrant.
    pub fn set_active(&self, registrant: impl Into<String>) {
        *self.current.write().unwrap() = Some(registrant.into());
    }

    /// Clear the active registrant (end of the load phase).
    pub fn clear(&self) {
        *self.current.write().unwrap() = None;
    }
}

impl RegistrantProvider for ActiveRegistrant {
    fn current_registrant(&self) -> String {
        self.current
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| UNKNOWN_REGISTRANT.to_string())
    }
}

/// Provider with a fixed id. Useful for hosts that register everything
/// themselves and for tests.
pub struct FixedRegistrant(pub String);

impl RegistrantProvider for FixedRegistrant {
    fn current_registrant(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_until_set() {
        let active = ActiveRegistrant::new();
        assert_eq!(active.current_registrant(), UNKNOWN_REGISTRANT);
    }

    #[test]
    fn test_set_and_clear() {
        let active = ActiveRegistrant::new();
        active.set_active("example_mod");
        assert_eq!(active.current_registrant(), "example_mod");

        active.clear();
        assert_eq!(active.current_registrant(), UNKNOWN_REGISTRANT);
    }

    #[test]
    fn test_clones_share_state() {
        let active = ActiveRegistrant::new();
        let handle = active.clone();
        handle.set_active("example_mod");
        assert_eq!(active.current_registrant(), "example_mod");
    }

    #[test]
    fn test_fixed_registrant() {
        let fixed = FixedRegistrant("host".to_string());
        assert_eq!(fixed.current_registrant(), "host");
    }
}
