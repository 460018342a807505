use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::video::VideoInfo;
use crate::constants::ANALYSIS_READY_MESSAGE;

/// Outcome of one sub-detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DetectorFinding {
    pub detected: bool,
    pub confidence: f64,
}

impl DetectorFinding {
    pub const fn new(detected: bool, confidence: f64) -> Self {
        Self {
            detected,
            confidence,
        }
    }
}

/// Per-signal breakdown of a detection report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DetectionDetails {
    pub facial_manipulation: DetectorFinding,
    pub audio_inconsistency: DetectorFinding,
    pub lighting_anomaly: DetectorFinding,
    pub frame_blinking: DetectorFinding,
}

/// Result of classifying one stored video. Serialized as the `analysis`
/// block of the analyze response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DetectionReport {
    pub is_deepfake: bool,
    pub confidence: f64,
    pub model_version: String,
    pub processing_time_ms: u64,
    pub details: DetectionDetails,
}

/// Body of a successful `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AnalyzeResponse {
    pub status: String,
    pub message: String,
    pub video_info: VideoInfo,
    pub analysis: DetectionReport,
    /// RFC 3339 timestamp of when the response was assembled
    pub timestamp: String,
}

impl AnalyzeResponse {
    pub fn success(video_info: VideoInfo, analysis: DetectionReport, at: DateTime<Utc>) -> Self {
        Self {
            status: "success".to_string(),
            message: ANALYSIS_READY_MESSAGE.to_string(),
            video_info,
            analysis,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
