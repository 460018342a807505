//! Storage setup and initialization

use anyhow::{Context, Result};
use deepfake_core::Config;
use deepfake_storage::{LocalStorage, VideoStorage};
use std::sync::Arc;

/// Create the upload directory (if needed) and wrap it in the storage abstraction.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn VideoStorage>> {
    tracing::info!(upload_dir = %config.upload_dir().display(), "Initializing upload storage...");

    let storage = LocalStorage::new(config.upload_dir())
        .await
        .with_context(|| {
            format!(
                "Failed to prepare upload directory {}",
                config.upload_dir().display()
            )
        })?;

    Ok(Arc::new(storage))
}
