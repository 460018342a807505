//! Upload and analysis integration tests.
//!
//! Run with: `cargo test -p deepfake-api --test analyze_test`

mod helpers;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use deepfake_core::models::{DetectionReport, StoredVideo};
use deepfake_detector::Detector;
use helpers::fixtures::{video_bytes, video_form};
use helpers::{setup_test_app, setup_test_app_with};
use std::sync::Arc;

const ALLOWED_SUFFIX: &str = "Allowed: .mp4, .avi, .mov, .mkv, .flv, .wmv";

#[derive(Debug)]
struct FailingDetector;

#[async_trait]
impl Detector for FailingDetector {
    fn name(&self) -> &str {
        "failing"
    }

    async fn classify(&self, _video: &StoredVideo) -> anyhow::Result<DetectionReport> {
        anyhow::bail!("model unavailable")
    }
}

#[tokio::test]
async fn test_analyze_video_success() {
    let app = setup_test_app().await;
    let data = video_bytes(2_097_152);

    let response = app
        .client()
        .post("/analyze")
        .multipart(video_form("clip.MP4", data.clone()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json = response.json::<serde_json::Value>();

    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Video received and ready for analysis");

    let info = &json["video_info"];
    assert_eq!(info["original_filename"], "clip.MP4");
    assert_eq!(info["format"], ".mp4");
    assert_eq!(info["size_mb"], 2.0);

    let filename = info["filename"].as_str().unwrap();
    assert!(filename.starts_with("video_"));
    assert!(filename.ends_with(".mp4"));

    let saved_path = info["saved_path"].as_str().unwrap();
    assert!(saved_path.ends_with(filename));
    assert_eq!(std::fs::read(saved_path).unwrap(), data);

    let analysis = &json["analysis"];
    assert_eq!(analysis["is_deepfake"], false);
    assert_eq!(analysis["confidence"], 0.85);
    assert_eq!(analysis["model_version"], "v1.0.0");
    assert_eq!(analysis["details"]["facial_manipulation"]["detected"], false);
    assert_eq!(analysis["details"]["facial_manipulation"]["confidence"], 0.12);
    assert_eq!(analysis["details"]["audio_inconsistency"]["confidence"], 0.08);
    assert_eq!(analysis["details"]["lighting_anomaly"]["confidence"], 0.15);
    assert_eq!(analysis["details"]["frame_blinking"]["confidence"], 0.05);

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_every_allowed_extension_accepted() {
    let app = setup_test_app().await;

    for name in [
        "a.mp4", "b.AVI", "c.Mov", "d.mkv", "e.FLV", "f.wmv", "my.holiday.MKV",
    ] {
        let response = app
            .client()
            .post("/analyze")
            .multipart(video_form(name, video_bytes(128)))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK, "upload of {}", name);
        let json = response.json::<serde_json::Value>();
        let expected = format!(".{}", name.rsplit('.').next().unwrap().to_lowercase());
        assert_eq!(json["video_info"]["format"], expected);
    }

    assert_eq!(app.stored_files().len(), 7);
}

#[tokio::test]
async fn test_unsupported_extension_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/analyze")
        .multipart(video_form("notes.txt", b"hello".to_vec()))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "UNSUPPORTED_FORMAT");
    assert_eq!(
        json["detail"],
        format!("Unsupported file type: .txt. {}", ALLOWED_SUFFIX)
    );
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_missing_extension_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/analyze")
        .multipart(video_form("video", video_bytes(64)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let detail = response.json::<serde_json::Value>()["detail"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(detail.starts_with("Unsupported file type:"));
    assert!(detail.ends_with(ALLOWED_SUFFIX));
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_form_without_file_field() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("title", "my clip");
    let response = app.client().post("/analyze").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "No file uploaded");
    assert_eq!(json["code"], "MISSING_FILE");
}

#[tokio::test]
async fn test_non_multipart_body() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/analyze")
        .json(&serde_json::json!({ "file": "clip.mp4" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "No file uploaded"
    );
}

#[tokio::test]
async fn test_file_part_without_filename() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part("file", Part::bytes(video_bytes(64)));
    let response = app.client().post("/analyze").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<serde_json::Value>()["code"], "MISSING_FILE");
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_other_fields_before_file_are_ignored() {
    let app = setup_test_app().await;

    let part = Part::bytes(video_bytes(256)).file_name("clip.mov");
    let form = MultipartForm::new()
        .add_text("note", "first")
        .add_part("file", part);
    let response = app.client().post("/analyze").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>()["video_info"]["format"],
        ".mov"
    );
}

#[tokio::test]
async fn test_only_first_file_field_is_stored() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part("file", Part::bytes(video_bytes(32)).file_name("first.mp4"))
        .add_part("file", Part::bytes(video_bytes(48)).file_name("second.avi"));
    let response = app.client().post("/analyze").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>()["video_info"]["original_filename"],
        "first.mp4"
    );
    assert_eq!(app.stored_files().len(), 1);
}

#[tokio::test]
async fn test_same_upload_twice_gets_distinct_files() {
    let app = setup_test_app().await;

    let mut names = Vec::new();
    for _ in 0..2 {
        let response = app
            .client()
            .post("/analyze")
            .multipart(video_form("same.mp4", video_bytes(1024)))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        names.push(
            response.json::<serde_json::Value>()["video_info"]["filename"]
                .as_str()
                .unwrap()
                .to_string(),
        );
    }

    assert_ne!(names[0], names[1]);
    assert_eq!(app.stored_files().len(), 2);
}

#[tokio::test]
async fn test_empty_file_accepted() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/analyze")
        .multipart(video_form("empty.mkv", Vec::new()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>()["video_info"]["size_mb"],
        0.0
    );
}

#[tokio::test]
async fn test_detector_failure_returns_500() {
    let app = setup_test_app_with(|config| config, Arc::new(FailingDetector)).await;

    let response = app
        .client()
        .post("/analyze")
        .multipart(video_form("clip.mp4", video_bytes(512)))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "Error processing video: model unavailable");
    assert_eq!(json["code"], "ANALYSIS_FAILED");
}

#[tokio::test]
async fn test_unwritable_upload_dir_returns_500() {
    let app = setup_test_app().await;
    std::fs::remove_dir_all(app.upload_dir()).unwrap();

    let response = app
        .client()
        .post("/analyze")
        .multipart(video_form("clip.mp4", video_bytes(512)))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "STORAGE_FAILURE");
    assert!(json["detail"]
        .as_str()
        .unwrap()
        .starts_with("Error processing video: "));
}

#[tokio::test]
async fn test_upload_over_limit_returns_413() {
    let app = setup_test_app_with(
        |config| config.with_max_upload_size_bytes(1024),
        Arc::new(deepfake_detector::StubDetector::new()),
    )
    .await;

    let response = app
        .client()
        .post("/analyze")
        .multipart(video_form("big.mp4", video_bytes(64 * 1024)))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "PAYLOAD_TOO_LARGE"
    );
    assert!(app.stored_files().is_empty());
}
