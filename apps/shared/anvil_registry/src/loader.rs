//! Load-phase driver.
//!
//! Runs every plugin's registration routine in order against one shared
//! registry. One plugin failing must not abort the whole phase: the failure
//! is logged, recorded in the report and loading continues with the next
//! plugin. The driver also keeps the [`ActiveRegistrant`] cell up to date so
//! provenance traces name the right plugin.

use tracing::{error, info};

use crate::error::{Result, RegistryError};
use crate::registrant::ActiveRegistrant;
use crate::registry::Registry;

/// A plugin participating in the registration phase.
pub struct Plugin {
    /// Stable plugin id, recorded as the registrant for everything the
    /// plugin registers.
    pub id: String,
    init: Box<dyn FnMut(&mut Registry) -> Result<()>>,
}

impl Plugin {
    pub fn new(
        id: impl Into<String>,
        init: impl FnMut(&mut Registry) -> Result<()> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            init: Box::new(init),
        }
    }
}

/// Outcome of a registration phase.
#[derive(Default)]
pub struct LoadReport {
    /// Plugins whose init routine completed without error, in load order.
    pub loaded: Vec<String>,
    /// Plugins whose init routine returned an error, with the error.
    pub failed: Vec<(String, RegistryError)>,
}

impl LoadReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the registration phase for the given plugins, in order.
///
/// `active` must be the same cell the registry was constructed with,
/// otherwise provenance traces will not match the running plugin.
pub fn run_load_phase(
    registry: &mut Registry,
    active: &ActiveRegistrant,
    plugins: Vec<Plugin>,
) -> LoadReport {
    info!("> Running registration phase ({} plugins)", plugins.len());
    let mut report = LoadReport::default();

    for mut plugin in plugins {
        active.set_active(&*plugin.id);
        match (plugin.init)(registry) {
            Ok(()) => report.loaded.push(plugin.id),
            Err(e) => {
                error!("Plugin '{}' failed to register content: {}", plugin.id, e);
                report.failed.push((plugin.id, e));
            }
        }
    }

    active.clear();
    info!(
        "< Registration phase complete (loaded={}, failed={})",
        report.loaded.len(),
        report.failed.len(),
    );
    report
}
