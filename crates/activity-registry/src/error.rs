//! Registry errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// The referenced activity does not exist.
    #[error("Activity not found")]
    NotFound(String),

    /// Signup requested for an email already on the roster.
    #[error("Already signed up")]
    AlreadyRegistered { activity: String, email: String },

    /// The roster has reached `max_participants`.
    #[error("Activity is full")]
    Full(String),

    /// Removal requested for an email that is not on the roster.
    #[error("Participant not found in activity")]
    NotRegistered { activity: String, email: String },

    #[error("Invalid seed for activity {activity}: {reason}")]
    InvalidSeed { activity: String, reason: String },

    #[error("Failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Malformed seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
