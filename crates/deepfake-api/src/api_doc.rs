//! OpenAPI documentation, served at `/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use deepfake_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Deepfake Detection API",
        version = "1.0.0",
        description = "Accepts video uploads and returns a deepfake analysis report. The bundled detector returns fixed placeholder results."
    ),
    paths(
        handlers::health::health_check,
        handlers::analyze::analyze_video,
        handlers::videos::get_video,
    ),
    components(
        schemas(
            models::HealthResponse,
            models::AnalyzeResponse,
            models::VideoInfo,
            models::DetectionReport,
            models::DetectionDetails,
            models::DetectorFinding,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "analysis", description = "Video upload and deepfake analysis"),
        (name = "videos", description = "Stored uploads"),
    )
)]
pub struct ApiDoc;
