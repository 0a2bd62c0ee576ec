use crate::error::IdentifierError;

/// Check that an identifier is safe to register.
///
/// Identifiers are globally unique keys shared between plugins, so they must
/// be non-empty, contain no whitespace and be completely lowercase. Returns
/// the specific rule that was violated, for error reporting.
pub fn validate_identifier(identifier: &str) -> Result<(), IdentifierError> {
    if identifier.is_empty() {
        return Err(IdentifierError::Empty);
    }

    if identifier.chars().any(char::is_whitespace) {
        return Err(IdentifierError::Whitespace(identifier.to_string()));
    }

    if identifier.chars().any(char::is_uppercase) {
        return Err(IdentifierError::Uppercase(identifier.to_string()));
    }

    Ok(())
}
