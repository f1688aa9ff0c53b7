//! HTTP request handlers.

use super::types::{HealthResponse, MessageResponse, ParticipantEmail, ParticipantQuery};
use super::AppState;
use crate::error::ApiError;
use activity_registry::ActivityMap;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        activity_count: registry.len(),
        participant_count: registry.total_participants(),
    })
}

/// List every activity with its current roster.
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityMap> {
    let registry = state.registry.read().await;
    Json(registry.list_activities().clone())
}

/// Sign a participant up for an activity.
pub async fn signup(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = ParticipantEmail::try_from(query)?;
    info!(activity = %activity_name, email = %email, "Signup request received");

    let mut registry = state.registry.write().await;
    let change = registry
        .signup(&activity_name, email.as_str())
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "Signup rejected");
            ApiError::from(e)
        })?;

    info!(activity = %activity_name, email = %email, "Participant signed up");

    Ok(Json(MessageResponse {
        message: change.to_string(),
    }))
}

/// Remove a participant from an activity.
pub async fn remove_participant(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = ParticipantEmail::try_from(query)?;
    info!(activity = %activity_name, email = %email, "Removal request received");

    let mut registry = state.registry.write().await;
    let change = registry
        .remove_participant(&activity_name, email.as_str())
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "Removal rejected");
            ApiError::Rejected(e)
        })?;

    info!(activity = %activity_name, email = %email, "Participant removed");

    Ok(Json(MessageResponse {
        message: change.to_string(),
    }))
}
