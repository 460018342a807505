//! Application state shared by all handlers.

use deepfake_core::Config;
use deepfake_detector::Detector;
use deepfake_storage::VideoStorage;
use std::sync::Arc;

/// Everything a request needs. The upload directory lives inside `storage`,
/// so each server instance (and each test) can point at its own location.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn VideoStorage>,
    pub detector: Arc<dyn Detector>,
}

impl AppState {
    pub fn new(
        config: Config,
        storage: Arc<dyn VideoStorage>,
        detector: Arc<dyn Detector>,
    ) -> Self {
        Self {
            config,
            storage,
            detector,
        }
    }
}
