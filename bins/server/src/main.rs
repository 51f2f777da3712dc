//! Cascade API Server
//!
//! Loads the MRR dataset once and serves the dashboard over HTTP.

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cascade_api::{AppState, create_router};
use cascade_core::selection::SegmentPicker;
use cascade_data::{DatasetSource, load};
use cascade_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cascade=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Load the dataset; no retries, a failure here ends the process
    let source = DatasetSource::from_config(&config.dataset);
    let dataset = load(
        &source,
        Duration::from_secs(config.dataset.fetch_timeout_secs),
    )
    .await
    .with_context(|| format!("Failed to load dataset from {source}"))?;

    let picker = SegmentPicker::new(config.dataset.skip_fields.iter().cloned());
    info!(
        dimensions = ?picker.dimensions(&dataset),
        months = dataset.months().len(),
        "Segment picker configured"
    );

    // Create router
    let app = create_router(AppState::new(dataset, picker));

    // Start server
    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
