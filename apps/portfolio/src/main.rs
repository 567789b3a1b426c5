mod config;
mod content;
mod errors;
mod models;
mod resume;
mod routes;
mod state;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::ContentStore;
use crate::resume::{PageRasterizer, PdftoppmRasterizer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Content dir: {}, assets dir: {}",
        config.content_dir.display(),
        config.assets_dir.display()
    );

    let content = Arc::new(ContentStore::new(&config));
    info!(
        "Content store ready (experiences TTL {}s)",
        config.experiences_ttl.as_secs()
    );

    let rasterizer = PdftoppmRasterizer::detect(&config.pdftoppm_bin, config.raster_scale)
        .await
        .map(|r| Arc::new(r) as Arc<dyn PageRasterizer>);

    let state = AppState {
        config: config.clone(),
        content,
        rasterizer,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
