mod assessment;
mod auth;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod profile;
mod recommend;
mod routes;
mod state;
mod trends;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::recommend::scoring::WeightedSumScorer;
use crate::routes::{build_cors, build_router};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the five tables exist
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Match scorer: the deterministic weighted-sum pass over the career catalog
    let match_scorer = Arc::new(WeightedSumScorer);

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        match_scorer,
    };

    // Build router
    let cors = build_cors(&config.allowed_origins)?;
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
