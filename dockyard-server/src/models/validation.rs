//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both of the user fields are absent or empty
    MissingUserFields,

    /// String doesn't match required format (e.g., non-numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded as JSON
    MalformedBody(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUserFields => write!(f, "Name and email are required"),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::MalformedBody(detail) => write!(f, "Invalid JSON body: {}", detail),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::MissingUserFields.to_string(),
            "Name and email are required"
        );

        let err = ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        };
        assert_eq!(err.to_string(), "id: must be an integer");
    }
}
