//! Detector plugins
//!
//! A detector classifies a stored video and returns a [`DetectionReport`]. The
//! HTTP layer only depends on the [`Detector`] trait, so a real model can replace
//! the stub without touching the handlers.
//!
//! [`DetectionReport`]: deepfake_core::models::DetectionReport

pub mod detector;
pub mod registry;
pub mod stub;

pub use detector::{Detector, DetectorInfo};
pub use registry::DetectorRegistry;
pub use stub::StubDetector;
