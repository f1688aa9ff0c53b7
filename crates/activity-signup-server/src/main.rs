//! Activity Signup Server - Entry point.

use activity_registry::seed::registry_from_optional_file;
use activity_signup_server::{
    api::{create_router_with_rate_limit, AppState, RateLimitState},
    config::Config,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Activity Signup Server");

    // Seed the registry once; it lives for the whole process
    let registry = match registry_from_optional_file(config.registry.seed_path.as_deref()) {
        Ok(r) => {
            info!(
                activities = r.len(),
                participants = r.total_participants(),
                "Registry seeded"
            );
            r
        }
        Err(e) => {
            error!("Failed to seed registry: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(registry);
    let rate_limit = RateLimitState::new(config.rate_limit.global_per_minute);
    let app = create_router_with_rate_limit(state, rate_limit);

    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
