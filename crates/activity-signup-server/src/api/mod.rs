//! HTTP API for the activity registry.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{rate_limit_middleware, RateLimitState};
pub use types::*;

use activity_registry::ActivityRegistry;
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Activity registry; the write lock serializes roster changes
    pub registry: Arc<RwLock<ActivityRegistry>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }
}

/// Create the API router with default rate limiting.
pub fn create_router(state: AppState) -> Router {
    create_router_with_rate_limit(state, RateLimitState::new(600))
}

/// Create the API router with custom rate limiting.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    let limited: Router<AppState> = Router::new()
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:activity_name/signup", post(handlers::signup))
        .route(
            "/activities/:activity_name/participants",
            delete(handlers::remove_participant),
        )
        .layer(axum_middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ));

    Router::new()
        // Health check (no rate limiting)
        .route("/health", get(handlers::health))
        .merge(limited)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
