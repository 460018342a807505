//! Detector registry for selecting a detector by name at startup

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::detector::{Detector, DetectorInfo};
use crate::stub::StubDetector;

/// Registry for managing and retrieving detectors.
///
/// Thread-safe and async-compatible using tokio's RwLock.
#[derive(Clone)]
pub struct DetectorRegistry {
    detectors: Arc<RwLock<HashMap<String, Arc<dyn Detector>>>>,
    detector_info: Arc<RwLock<HashMap<String, DetectorInfo>>>,
}

impl DetectorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            detectors: Arc::new(RwLock::new(HashMap::new())),
            detector_info: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registry with every built-in detector registered.
    pub async fn with_defaults() -> Self {
        let registry = Self::new();
        registry
            .register(Arc::new(StubDetector::new()), StubDetector::info())
            .await;
        registry
    }

    /// Register a detector, replacing any previous one with the same name.
    pub async fn register(&self, detector: Arc<dyn Detector>, info: DetectorInfo) {
        let name = detector.name().to_string();

        let mut detectors = self.detectors.write().await;
        let mut detector_info = self.detector_info.write().await;

        if detectors.insert(name.clone(), detector).is_some() {
            tracing::warn!(detector = %name, "Replacing previously registered detector");
        }
        detector_info.insert(name, info);
    }

    /// Get a detector by name
    pub async fn get(&self, name: &str) -> Result<Arc<dyn Detector>> {
        let detectors = self.detectors.read().await;

        detectors
            .get(name)
            .cloned()
            .with_context(|| format!("Detector '{}' not found", name))
    }

    /// List all registered detectors, sorted by name
    pub async fn list(&self) -> Vec<DetectorInfo> {
        let detector_info = self.detector_info.read().await;

        let mut infos: Vec<DetectorInfo> = detector_info.values().cloned().collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Listing metadata for one detector
    pub async fn info(&self, name: &str) -> Option<DetectorInfo> {
        self.detector_info.read().await.get(name).cloned()
    }

    /// Check if a detector is registered
    pub async fn contains(&self, name: &str) -> bool {
        self.detectors.read().await.contains_key(name)
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
