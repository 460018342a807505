//! Shared filename generation and validation for storage backends.

use chrono::{DateTime, Utc};
use deepfake_core::constants::STORED_FILENAME_PREFIX;
use uuid::Uuid;

use crate::traits::{StorageError, StorageResult};

const TOKEN_LEN: usize = 8;

/// Generate a stored filename: `video_{YYYYMMDD_HHMMSS}_{token}{extension}`.
///
/// The random token keeps names distinct for uploads that land in the same second.
pub fn generate_video_filename(now: DateTime<Utc>, extension: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!(
        "{}{}_{}{}",
        STORED_FILENAME_PREFIX,
        now.format("%Y%m%d_%H%M%S"),
        &token[..TOKEN_LEN],
        extension
    )
}

/// Reject names that could resolve outside the storage directory.
pub fn validate_filename(filename: &str) -> StorageResult<()> {
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains('\0')
    {
        return Err(StorageError::InvalidKey(filename.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_has_timestamp_token_and_extension() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 5, 7).unwrap();
        let name = generate_video_filename(now, ".mkv");

        assert!(name.starts_with("video_20261017_090507_"), "{}", name);
        assert!(name.ends_with(".mkv"));
        let token = &name["video_20261017_090507_".len()..name.len() - ".mkv".len()];
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn same_second_names_differ() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let a = generate_video_filename(now, ".mp4");
        let b = generate_video_filename(now, ".mp4");
        assert_ne!(a, b);
    }

    #[test]
    fn traversal_is_rejected() {
        assert!(validate_filename("../secret").is_err());
        assert!(validate_filename("a/b.mp4").is_err());
        assert!(validate_filename("a\\b.mp4").is_err());
        assert!(validate_filename("").is_err());
        assert!(validate_filename("video_20260101_000000_abcd1234.mp4").is_ok());
    }
}
