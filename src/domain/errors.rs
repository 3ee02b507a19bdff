//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided ID is not a well-formed identifier.
    InvalidId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid for the region.
    InvalidPhone(String),

    /// The phone region code is not supported.
    UnknownRegion(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidId(id) => write!(f, "Invalid contact ID: {}", id),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::UnknownRegion(region) => write!(f, "Unsupported phone region: {}", region),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyId.to_string(), "ID cannot be empty");
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "Invalid phone number: 123"
        );
        assert_eq!(
            ValidationError::UnknownRegion("xx-XX".to_string()).to_string(),
            "Unsupported phone region: xx-XX"
        );
    }
}
