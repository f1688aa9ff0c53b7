//! Rate limiting middleware.

use crate::error::ApiError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc};
use tracing::warn;

/// Global rate limiter (not keyed by client).
pub type GlobalLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

const FALLBACK_PER_MINUTE: NonZeroU32 = match NonZeroU32::new(600) {
    Some(n) => n,
    None => unreachable!(),
};

/// Rate limiter state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    pub global: Arc<GlobalLimiter>,
}

impl RateLimitState {
    /// Create a limiter allowing `requests_per_minute`; zero falls back to the default.
    pub fn new(requests_per_minute: u32) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(requests_per_minute).unwrap_or(FALLBACK_PER_MINUTE));

        Self {
            global: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Create a permissive rate limiter for testing.
    pub fn permissive() -> Self {
        Self::new(10_000)
    }
}

/// Rejects with 429 once the global quota is spent.
pub async fn rate_limit_middleware(
    State(rate_limit): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if rate_limit.global.check().is_err() {
        warn!("Global rate limit exceeded");
        return Err(ApiError::RateLimitExceeded);
    }

    Ok(next.run(request).await)
}
