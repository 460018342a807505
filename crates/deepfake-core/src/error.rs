//! Error types module
//!
//! All request failures are unified under the `AppError` enum. Client errors
//! (missing file, unsupported format) are 400s; anything that goes wrong while
//! storing or analysing the upload is a 500 whose message is prefixed with
//! "Error processing video".

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client-caused resource issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_FILE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message, rendered as `detail`
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Unsupported file type: {extension}. Allowed: {}", allowed.join(", "))]
    UnsupportedFormat {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short variant name used as a structured log field.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::UnsupportedFormat { .. } => "UnsupportedFormat",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::StorageFailure(_) => "StorageFailure",
            AppError::AnalysisFailed(_) => "AnalysisFailed",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::StorageFailure(err.to_string())
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::MissingFile => (400, "MISSING_FILE", LogLevel::Debug),
        AppError::UnsupportedFormat { .. } => (400, "UNSUPPORTED_FORMAT", LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", LogLevel::Warn),
        AppError::StorageFailure(_) => (500, "STORAGE_FAILURE", LogLevel::Error),
        AppError::AnalysisFailed(_) => (500, "ANALYSIS_FAILED", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile | AppError::UnsupportedFormat { .. } => self.to_string(),
            AppError::InvalidInput(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::NotFound(_) => "Video not found".to_string(),
            AppError::StorageFailure(msg)
            | AppError::AnalysisFailed(msg)
            | AppError::Internal(msg) => format!("Error processing video: {}", msg),
        }
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_client_error() {
        let err = AppError::MissingFile;
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.client_message(), "No file uploaded");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn not_found_hides_the_requested_name() {
        let err = AppError::NotFound("video_20260101_000000_abcd1234.mp4".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.client_message(), "Video not found");
    }

    #[test]
    fn unsupported_format_lists_allowed_extensions() {
        let err = AppError::UnsupportedFormat {
            extension: ".txt".to_string(),
            allowed: vec![".mp4".to_string(), ".avi".to_string()],
        };
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
        assert_eq!(
            err.client_message(),
            "Unsupported file type: .txt. Allowed: .mp4, .avi"
        );
    }

    #[test]
    fn server_errors_are_prefixed() {
        let err = AppError::StorageFailure("disk full".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Error processing video: disk full");

        let err = AppError::AnalysisFailed("model crashed".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Error processing video: model crashed");
    }

    #[test]
    fn io_error_becomes_storage_failure() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        match AppError::from(io_err) {
            AppError::StorageFailure(msg) => assert!(msg.contains("denied")),
            other => panic!("Expected StorageFailure, got {:?}", other),
        }
    }

    #[test]
    fn payload_too_large_maps_to_413() {
        let err = AppError::PayloadTooLarge("too big".to_string());
        assert_eq!(err.http_status_code(), 413);
        assert_eq!(err.log_level(), LogLevel::Warn);
    }
}
