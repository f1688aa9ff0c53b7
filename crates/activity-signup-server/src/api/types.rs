//! API request and response types.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameters for signup and removal.
#[derive(Debug, Default, Deserialize)]
pub struct ParticipantQuery {
    /// Participant email, treated as an opaque case-sensitive identifier
    pub email: Option<String>,
}

/// Participant email accepted at the API boundary.
///
/// Only presence is checked; any string, including an empty one, is passed
/// to the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<ParticipantQuery> for ParticipantEmail {
    type Error = ApiError;

    fn try_from(query: ParticipantQuery) -> Result<Self, Self::Error> {
        query
            .email
            .map(Self)
            .ok_or(ApiError::MissingParameter("email"))
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Confirmation returned after a roster change.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub activity_count: usize,
    pub participant_count: usize,
}
