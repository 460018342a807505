//! Serve previously uploaded videos back to the client.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use deepfake_core::{extract_extension, video_content_type, AppError};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/videos/{filename}",
    tag = "videos",
    params(
        ("filename" = String, Path, description = "Generated filename returned by /analyze")
    ),
    responses(
        (status = 200, description = "Stored video bytes"),
        (status = 400, description = "Filename is not a plain stored name", body = ErrorResponse),
        (status = 404, description = "No stored video with that name", body = ErrorResponse),
        (status = 500, description = "Reading the stored video failed", body = ErrorResponse)
    )
)]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, HttpAppError> {
    if !state.storage.exists(&filename).await? {
        return Err(AppError::NotFound(filename).into());
    }

    let size_bytes = state.storage.content_length(&filename).await?;
    let stream = state.storage.open_stream(&filename).await?;
    let content_type = video_content_type(&extract_extension(&filename));

    tracing::info!(filename = %filename, size_bytes, content_type, "Serving stored video");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, size_bytes)
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", filename),
        )
        .body(Body::from_stream(stream))
        .map_err(|e| {
            HttpAppError::from(AppError::Internal(format!(
                "Failed to build video response: {}",
                e
            )))
        })
}
