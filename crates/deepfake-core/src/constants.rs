//! Service identity constants reported by the health endpoint and the analysis payload.

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "deepfake-detection";

/// Service version reported by `GET /`.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Human-readable message attached to every successful analysis.
pub const ANALYSIS_READY_MESSAGE: &str = "Video received and ready for analysis";

/// Prefix for generated upload filenames.
pub const STORED_FILENAME_PREFIX: &str = "video_";

/// Bytes per binary megabyte.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
