//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::services::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when reading or writing the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No contact with the given identifier exists
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Another contact already uses this name
    #[error("Contact name already in use: {0}")]
    DuplicateName(String),

    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded or decoded
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by the contact service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The submitted fields failed one or more checks
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The store rejected or failed the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Contact not found: abc");

        let err = StoreError::DuplicateName("Aceng".to_string());
        assert_eq!(err.to_string(), "Contact name already in use: Aceng");

        let err = ConfigError::InvalidValue {
            var: "PORT".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for PORT: Must be a number");
    }

    #[test]
    fn test_store_error_wraps_into_service_error() {
        let err: ServiceError = StoreError::NotFound("abc".to_string()).into();
        assert!(matches!(err, ServiceError::Store(StoreError::NotFound(_))));
        assert_eq!(err.to_string(), "Contact not found: abc");
    }
}
