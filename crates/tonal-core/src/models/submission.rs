use crate::error::ValidationError;

/// Accept the `text` form field for classification.
///
/// Whitespace is kept verbatim; only a missing or zero-length field is
/// rejected.
pub fn validate_text(text: Option<String>) -> Result<String, ValidationError> {
    match text {
        None => Err(ValidationError::MissingText),
        Some(text) if text.is_empty() => Err(ValidationError::EmptyText),
        Some(text) => Ok(text),
    }
}
