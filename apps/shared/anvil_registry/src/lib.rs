//! Conflict-safe, provenance-tracked registry for game content contributed
//! by independent plugins sharing one process.
//!
//! Plugins register materials, stat blocks, traits, tools and modifiers
//! during a single-threaded load phase. The registry rejects duplicates
//! (naming the original claimant), records who registered what, and lets a
//! host-injected hook veto or override registrations before they commit.
//!
//! # Architecture
//!
//! - **Registration**: plugins call the `add_*` operations during their init
//!   routine; entries are created exactly once and never deleted.
//! - **Provenance**: every successful commit is traced to the plugin the
//!   [`RegistrantProvider`] names at that moment.
//! - **Cancellation**: a hook veto permanently marks a material identifier;
//!   later calls against it are eaten silently instead of erroring.
//!
//! The registry is **not** thread-safe. The host must finish the load phase
//! before sharing it for reads.

pub mod error;
pub mod hooks;
pub mod loader;
pub mod registrant;
pub mod registry;

pub use error::{RegistryError, Result};
pub use hooks::{HookAction, NoopHooks, RegistryHooks};
pub use loader::{LoadReport, Plugin, run_load_phase};
pub use registrant::{ActiveRegistrant, FixedRegistrant, RegistrantProvider, UNKNOWN_REGISTRANT};
pub use registry::{FALLBACK_MATERIAL_ID, Registry};
