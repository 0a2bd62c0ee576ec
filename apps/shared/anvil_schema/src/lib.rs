//! Content definition types for the Anvil registry.
//!
//! Defines the records plugins contribute (materials, stat blocks, traits,
//! tools, modifiers), the identifier rules they must follow, and
//! schema-validated JSON loading so hosts can ship content as definition
//! files instead of code.

use serde::Deserialize;
use schemars::JsonSchema;
use std::fs;
use std::path::Path;

pub mod content;
pub mod error;
pub mod identifier;
pub mod material;

pub use content::{Modifier, ToolDef, TraitDef};
pub use error::{IdentifierError, Result, SchemaError};
pub use identifier::validate_identifier;
pub use material::{Material, MaterialStats};

/// Trait for content types that can be loaded from JSON and validated
/// against their generated JSON Schema before deserialization.
pub trait Validatable: JsonSchema + for<'de> Deserialize<'de> {
    /// Load and validate a definition from a JSON file.
    fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SchemaError::IoError(path.display().to_string(), e))?;

        Self::from_json_str(&content)
    }

    /// Load and validate a definition from a JSON string.
    fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let schema = schemars::schema_for!(Self);
        let schema_json = serde_json::to_value(&schema)?;

        let compiled = jsonschema::validator_for(&schema_json)
            .map_err(|e| SchemaError::ValidationError(e.to_string()))?;

        compiled
            .validate(&value)
            .map_err(|e| SchemaError::ValidationError(format!("{}", e)))?;

        serde_json::from_value(value).map_err(SchemaError::ParseError)
    }

    /// Generate the JSON Schema for this definition type.
    fn generate_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Self)
    }
}
