//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Date string is not a valid `DD/MM/YYYY` calendar date
    #[error("Invalid travel date: {0}")]
    InvalidTravelDate(String),

    /// Timestamp cannot be represented as a calendar date
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Time zone name is not in the IANA database
    #[error("Invalid time zone: {0}")]
    InvalidTimezone(String),

    /// A name was not present in one of the lookup table namespaces
    #[error("Unknown {namespace} entry: {key}")]
    UnknownLookupKey { namespace: String, key: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an unknown lookup key error
    pub fn unknown_key(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownLookupKey {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}
