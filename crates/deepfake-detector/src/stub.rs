//! Content-independent detector used until a trained model is wired in.

use anyhow::Result;
use async_trait::async_trait;
use deepfake_core::models::{DetectionDetails, DetectionReport, DetectorFinding, StoredVideo};

use crate::detector::{Detector, DetectorInfo};

pub const STUB_DETECTOR_NAME: &str = "stub";
pub const STUB_MODEL_VERSION: &str = "v1.0.0";

const CONFIDENCE: f64 = 0.85;
const DETAILS: DetectionDetails = DetectionDetails {
    facial_manipulation: DetectorFinding::new(false, 0.12),
    audio_inconsistency: DetectorFinding::new(false, 0.08),
    lighting_anomaly: DetectorFinding::new(false, 0.15),
    frame_blinking: DetectorFinding::new(false, 0.05),
};

/// Reports every video as authentic with fixed confidences. It never reads
/// the file.
#[derive(Debug, Clone, Default)]
pub struct StubDetector;

impl StubDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn info() -> DetectorInfo {
        DetectorInfo {
            name: STUB_DETECTOR_NAME.to_string(),
            description: "Placeholder detector returning fixed scores".to_string(),
            model_version: STUB_MODEL_VERSION.to_string(),
        }
    }
}

#[async_trait]
impl Detector for StubDetector {
    fn name(&self) -> &str {
        STUB_DETECTOR_NAME
    }

    async fn classify(&self, video: &StoredVideo) -> Result<DetectionReport> {
        tracing::debug!(
            filename = %video.filename,
            size_bytes = video.size_bytes,
            "Stub detector returning fixed result"
        );

        Ok(DetectionReport {
            is_deepfake: false,
            confidence: CONFIDENCE,
            model_version: STUB_MODEL_VERSION.to_string(),
            processing_time_ms: 0,
            details: DETAILS,
        })
    }
}
