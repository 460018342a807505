//! Detector trait and listing metadata

use anyhow::Result;
use async_trait::async_trait;
use deepfake_core::models::{DetectionReport, StoredVideo};
use std::fmt::Debug;

/// Trait that all detectors must implement
#[async_trait]
pub trait Detector: Send + Sync + Debug {
    /// Get the detector name/identifier
    fn name(&self) -> &str;

    /// Classify the video stored at `video.path`
    async fn classify(&self, video: &StoredVideo) -> Result<DetectionReport>;
}

/// Detector information for listing available detectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorInfo {
    /// Detector name/identifier
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Model version reported in analysis results
    pub model_version: String,
}
