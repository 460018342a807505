//! Deepfake Core Library
//!
//! This crate provides the configuration, error taxonomy, domain models and
//! upload validation shared by the storage, detector and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{
    extract_extension, validate_video_extension, video_content_type, ALLOWED_VIDEO_EXTENSIONS,
};
