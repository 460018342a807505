//! Domain models module
//!
//! Contains the stored-file record, the detection report produced by a
//! detector and the response payloads of the HTTP API.

pub mod analysis;
pub mod health;
pub mod video;

pub use analysis::{AnalyzeResponse, DetectionDetails, DetectionReport, DetectorFinding};
pub use health::HealthResponse;
pub use video::{round_to_hundredths, size_in_mb, StoredVideo, VideoInfo};
