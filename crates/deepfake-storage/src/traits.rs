//! Storage abstraction trait
//!
//! This module defines the VideoStorage trait that storage backends implement.

use async_trait::async_trait;
use bytes::Bytes;
use deepfake_core::models::StoredVideo;
use deepfake_core::AppError;
use futures::stream::BoxStream;
use std::path::Path;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Upload stream interrupted: {0}")]
    UploadInterrupted(String),

    #[error("Upload exceeds size limit: {0}")]
    PayloadTooLarge(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid filename: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Chunked upload body handed to a backend. Errors raised by the source (for
/// example a client disconnect) are passed through unchanged.
pub type ByteStream<'a> = BoxStream<'a, StorageResult<Bytes>>;

/// Storage abstraction trait
///
/// The HTTP layer only talks to this trait, so tests can point the service at
/// an isolated directory and other backends can be added without touching the
/// handlers.
#[async_trait]
pub trait VideoStorage: Send + Sync {
    /// Write the stream to a freshly named file and return its record.
    ///
    /// The generated name never replaces an existing file. If the stream or a
    /// write fails, the partial file is removed before the error is returned.
    async fn store_stream(
        &self,
        extension: &str,
        stream: ByteStream<'_>,
    ) -> StorageResult<StoredVideo>;

    /// Check if a stored file exists
    async fn exists(&self, filename: &str) -> StorageResult<bool>;

    /// Get the size in bytes of a stored file
    async fn content_length(&self, filename: &str) -> StorageResult<u64>;

    /// Stream a stored file back in chunks.
    async fn open_stream(&self, filename: &str) -> StorageResult<ByteStream<'static>>;

    /// Directory the backend writes into
    fn base_path(&self) -> &Path;
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::PayloadTooLarge(msg) => AppError::PayloadTooLarge(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::UploadFailed(msg)
            | StorageError::UploadInterrupted(msg)
            | StorageError::ReadFailed(msg)
            | StorageError::ConfigError(msg) => AppError::StorageFailure(msg),
            StorageError::IoError(err) => AppError::StorageFailure(err.to_string()),
        }
    }
}
