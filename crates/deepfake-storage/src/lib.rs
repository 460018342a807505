//! Deepfake Storage Library
//!
//! This crate provides the storage abstraction for uploaded videos and the
//! local filesystem implementation used by the API.
//!
//! # Filename format
//!
//! Stored files are named `video_{YYYYMMDD_HHMMSS}_{token}{ext}` where the
//! timestamp is UTC and `token` is 8 hex characters of a random UUID. Names are
//! flat (no sub-directories) and are generated in the `keys` module so every
//! backend produces the same layout.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{ByteStream, StorageError, StorageResult, VideoStorage};
