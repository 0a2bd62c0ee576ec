use thiserror::Error;

use anvil_schema::IdentifierError;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised by registration calls.
///
/// All of these are detected synchronously in the call that caused them and
/// leave the registry unchanged. The load-phase driver is expected to log
/// them and continue with the next plugin rather than abort the whole phase.
/// A hook veto is not an error and never surfaces here.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Could not register material '{identifier}': {source}")]
    InvalidIdentifier {
        identifier: String,
        #[source]
        source: IdentifierError,
    },

    #[error("Could not register material '{identifier}': it was already registered by {registered_by}")]
    DuplicateMaterial {
        identifier: String,
        registered_by: String,
    },

    #[error("Could not add '{attachment}' to '{identifier}': unknown material")]
    UnknownMaterial {
        identifier: String,
        attachment: String,
    },

    #[error("Could not add stats to '{identifier}': stats of type '{stat_kind}' were already registered by {registered_by}")]
    DuplicateStats {
        identifier: String,
        stat_kind: String,
        registered_by: String,
    },

    #[error("Could not add trait to '{identifier}': trait '{trait_id}' was already registered by {registered_by}")]
    DuplicateTrait {
        identifier: String,
        trait_id: String,
        registered_by: String,
    },

    #[error("Could not add stats of type '{stat_kind}': the fallback material has no default stats for that type. Register default values first")]
    MissingDefaultStats { stat_kind: String },
}
