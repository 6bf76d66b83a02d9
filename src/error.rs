//! Error types for credstore

use thiserror::Error;

use crate::policy::PolicyViolation;

/// Result type alias for credential store operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Credential store error types
#[derive(Error, Debug)]
pub enum AuthError {
    /// Empty username, duplicate username, confirmation mismatch.
    /// Always carries a specific human-readable reason.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A password policy rule was not satisfied
    #[error("password policy violation: {0}")]
    Policy(#[from] PolicyViolation),

    /// Unknown username and wrong password collapse into this single
    /// variant so callers cannot enumerate registered usernames.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A persisted record's encoded fields could not be decoded
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Underlying read/write failure that is not simply "file absent"
    #[error("storage error: {0}")]
    StorageError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
