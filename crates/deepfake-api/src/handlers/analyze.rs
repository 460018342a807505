use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{field_stream, multipart_error, FILE_FIELD};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use chrono::Utc;
use deepfake_core::models::{AnalyzeResponse, StoredVideo, VideoInfo};
use deepfake_core::{validate_video_extension, AppError};
use std::sync::Arc;

/// The upload as it was received: the stored file plus what the client told us about it.
struct ReceivedVideo {
    stored: StoredVideo,
    original_filename: String,
    extension: String,
}

/// Walk the form until the `file` field, validate its name and stream it to storage.
/// Fields after the first `file` field are not read.
async fn receive_video(
    state: &AppState,
    multipart: &mut Multipart,
) -> Result<ReceivedVideo, HttpAppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field = ?field.name(), "Skipping non-file form field");
            continue;
        }

        let original_filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => return Err(AppError::MissingFile.into()),
        };
        tracing::info!(filename = %original_filename, "Received file");

        let extension = validate_video_extension(&original_filename)?;

        let stored = state
            .storage
            .store_stream(&extension, field_stream(field))
            .await?;

        return Ok(ReceivedVideo {
            stored,
            original_filename,
            extension,
        });
    }

    Err(AppError::MissingFile.into())
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Video in the `file` field (.mp4, .avi, .mov, .mkv, .flv, .wmv)"),
    responses(
        (status = 200, description = "Video stored and analysed", body = AnalyzeResponse),
        (status = 400, description = "No file or unsupported file type", body = ErrorResponse),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Storing or analysing the video failed", body = ErrorResponse)
    )
)]
pub async fn analyze_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, HttpAppError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Request body is not a multipart form");
        AppError::MissingFile
    })?;

    let received = receive_video(&state, &mut multipart).await?;
    let video = &received.stored;

    tracing::info!(
        filename = %video.filename,
        size_mb = format!("{:.2}", video.size_mb()),
        "Stored upload"
    );

    let analysis = state.detector.classify(video).await.map_err(|e| {
        tracing::error!(detector = state.detector.name(), error = %e, "Detector failed");
        AppError::AnalysisFailed(e.to_string())
    })?;

    tracing::info!(
        filename = %received.original_filename,
        detector = state.detector.name(),
        is_deepfake = analysis.is_deepfake,
        confidence = analysis.confidence,
        "Analysis complete"
    );

    let video_info = VideoInfo::new(video, received.original_filename, received.extension);

    Ok(Json(AnalyzeResponse::success(
        video_info,
        analysis,
        Utc::now(),
    )))
}
