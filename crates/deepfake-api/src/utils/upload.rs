//! Common utilities for the multipart upload handler

use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use deepfake_core::AppError;
use deepfake_storage::{ByteStream, StorageError};
use futures::{StreamExt, TryStreamExt};

/// Multipart field that carries the video.
pub const FILE_FIELD: &str = "file";

/// Map an error raised while walking the multipart form.
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds size limit: {}", err.body_text()))
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Map an error raised while streaming the file field's body.
pub fn multipart_stream_error(err: MultipartError) -> StorageError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StorageError::PayloadTooLarge(err.body_text())
    } else {
        StorageError::UploadInterrupted(err.body_text())
    }
}

/// Adapt a multipart field into the chunk stream the storage layer consumes.
pub fn field_stream<'a>(field: Field<'a>) -> ByteStream<'a> {
    field.map_err(multipart_stream_error).boxed()
}
