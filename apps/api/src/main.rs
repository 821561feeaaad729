mod algorithms;
mod candidates;
mod config;
mod errors;
mod jobs;
mod models;
mod ranking;
mod routes;
mod seed;
mod skills;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent Ranker API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        hash_bucket_count = config.hash_bucket_count,
        search_trace_limit = config.search_trace_limit,
        "Algorithm settings"
    );

    let store = if config.seed_demo_data {
        RecordStore::seeded()?
    } else {
        info!("Demo data disabled; starting with an empty store");
        RecordStore::new()
    };

    let state = AppState::new(store, config.clone());

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
