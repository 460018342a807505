use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utoipa::ToSchema;

use crate::constants::BYTES_PER_MB;

/// A video written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVideo {
    /// Generated filename, e.g. `video_20261017_093000_1f2e3d4c.mp4`
    pub filename: String,
    /// Upload directory joined with `filename`
    pub path: PathBuf,
    /// Size of the file on disk after the write completed
    pub size_bytes: u64,
}

impl StoredVideo {
    pub fn size_mb(&self) -> f64 {
        size_in_mb(self.size_bytes)
    }

    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// Convert a byte count to binary megabytes rounded to two decimals.
pub fn size_in_mb(size_bytes: u64) -> f64 {
    round_to_hundredths(size_bytes as f64 / BYTES_PER_MB)
}

/// Round half to even, so `0.125` becomes `0.12`. Sizes are multiples of 2^-20,
/// which makes exact halves common.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Metadata block of the analyze response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VideoInfo {
    /// Generated filename under the upload directory
    pub filename: String,
    /// Filename as sent by the client
    pub original_filename: String,
    /// Size in binary megabytes, rounded to two decimals
    pub size_mb: f64,
    /// Lower-cased extension including the leading dot
    pub format: String,
    /// Location of the stored file
    pub saved_path: String,
}

impl VideoInfo {
    pub fn new(
        stored: &StoredVideo,
        original_filename: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            filename: stored.filename.clone(),
            original_filename: original_filename.into(),
            size_mb: stored.size_mb(),
            format: format.into(),
            saved_path: stored.display_path(),
        }
    }
}
