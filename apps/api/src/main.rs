mod config;
mod errors;
mod keywords;
mod matching;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::keywords::extractor::KeywordExtractor;
use crate::matching::catalog::SkillCatalog;
use crate::matching::skill_matcher::SkillMatcher;
use crate::routes::build_router;
use crate::state::AppState;

/// Headroom for JSON framing around the two texts of a match request.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume match API v{}", env!("CARGO_PKG_VERSION"));

    // Skill catalog is fixed for the lifetime of the process
    let catalog = SkillCatalog::load(config.skill_catalog_path.as_deref())?;
    let matcher = SkillMatcher::new(catalog).context("Failed to compile skill catalog patterns")?;

    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(matcher),
        keywords: Arc::new(KeywordExtractor::default()),
    };

    let app = build_router(state)
        .layer(DefaultBodyLimit::max(
            config
                .max_text_bytes
                .saturating_mul(2)
                .saturating_add(BODY_OVERHEAD_BYTES),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
