//! Errors raised by the catalog, the activity log and the shelf service.

use thiserror::Error;

/// Errors that can occur while operating on the shelf.
///
/// All variants are local and synchronous: retrying with the same input
/// always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    /// A required field was missing or invalid
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// No media item has the requested id
    #[error("Media not found: {0}")]
    NotFound(String),

    /// The shared password did not match
    #[error("Invalid password")]
    Unauthorized,
}

impl ShelfError {
    /// Build a validation error for `field`
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Trim `value` and reject it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, ShelfError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ShelfError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional value; blank text counts as absent.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
