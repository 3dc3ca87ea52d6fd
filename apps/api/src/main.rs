mod config;
mod employees;
mod errors;
mod models;
mod routes;
mod scoring;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{seed::seed_sample_data, ExpertiseStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("expertise_api={},tower_http={}", &config.rust_log, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Expertise API v{}", env!("CARGO_PKG_VERSION"));

    // In-memory store; swap for a durable ExpertiseStore here
    let store: Arc<dyn ExpertiseStore> = Arc::new(MemoryStore::new());
    if config.seed_sample_data {
        seed_sample_data(&*store).await?;
    }

    info!("Score merge policy: {:?}", config.merge_policy);
    let state = AppState::new(store, config.merge_policy);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
