//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p deepfake-api`.
//! Every test app writes into its own temporary upload directory.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use deepfake_api::setup::routes;
use deepfake_api::state::AppState;
use deepfake_core::Config;
use deepfake_detector::{Detector, StubDetector};
use deepfake_storage::{LocalStorage, VideoStorage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus the upload directory it writes into.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Files currently in the upload directory, sorted.
    pub fn stored_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.upload_dir())
            .expect("read upload dir")
            .map(|entry| entry.expect("dir entry").path())
            .collect();
        files.sort();
        files
    }
}

/// Setup test app with default limits and the stub detector.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|config| config, Arc::new(StubDetector::new())).await
}

/// Setup test app, letting the caller adjust config and supply the detector.
pub async fn setup_test_app_with<F>(configure: F, detector: Arc<dyn Detector>) -> TestApp
where
    F: FnOnce(Config) -> Config,
{
    let temp_dir = TempDir::new().expect("Failed to create temp upload dir");
    let config = configure(Config::for_upload_dir(temp_dir.path()));

    let storage: Arc<dyn VideoStorage> = Arc::new(
        LocalStorage::new(config.upload_dir())
            .await
            .expect("Failed to create local storage"),
    );

    let state = Arc::new(AppState::new(config.clone(), storage, detector));
    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}
