mod config;
mod curriculum;
mod errors;
mod export;
mod llm_client;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("curricula_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CURRICULA-GEN API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generation client (model and credential injected here,
    // never read ambiently elsewhere)
    let generator = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_model,
    ));
    info!(
        "LLM client initialized (model: {}, mode: {:?})",
        config.gemini_model, config.generation_mode
    );

    // Per-visit chat sessions; unused in stateless mode
    let sessions = SessionStore::new();

    let state = AppState {
        generator,
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
