use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read definition file '{0}': {1}")]
    IoError(String, #[source] std::io::Error),

    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Definition does not match schema: {0}")]
    ValidationError(String),
}

/// Why an identifier was rejected. Identifiers name registered content
/// globally, so the rules are strict: non-empty, no whitespace, lowercase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier must not be empty")]
    Empty,

    #[error("identifier '{0}' must not contain any spaces")]
    Whitespace(String),

    #[error("identifier '{0}' must be completely lowercase")]
    Uppercase(String),
}
