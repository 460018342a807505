//! Detector selection

use anyhow::Result;
use deepfake_core::Config;
use deepfake_detector::{Detector, DetectorRegistry};
use std::sync::Arc;

/// Resolve the detector named by `DETECTOR` from the built-in registry.
pub async fn setup_detector(config: &Config) -> Result<Arc<dyn Detector>> {
    let registry = DetectorRegistry::with_defaults().await;

    if !registry.contains(config.detector()).await {
        let available: Vec<String> = registry.list().await.into_iter().map(|d| d.name).collect();
        anyhow::bail!(
            "Unknown DETECTOR '{}'. Available: {}",
            config.detector(),
            available.join(", ")
        );
    }

    let detector = registry.get(config.detector()).await?;
    match registry.info(config.detector()).await {
        Some(info) => tracing::info!(
            detector = %info.name,
            model_version = %info.model_version,
            description = %info.description,
            "Detector initialized"
        ),
        None => tracing::info!(detector = detector.name(), "Detector initialized"),
    }

    Ok(detector)
}
