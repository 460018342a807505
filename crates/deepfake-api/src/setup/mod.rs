//! Application setup and initialization
//!
//! Everything `main` needs to go from a loaded [`Config`] to a servable router.

pub mod routes;
pub mod server;
pub mod services;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use deepfake_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let storage = storage::setup_storage(&config).await?;
    let detector = services::setup_detector(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), storage, detector));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
