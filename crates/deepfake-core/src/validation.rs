//! Upload validation: extension extraction and the video allowlist.

use crate::error::AppError;

/// Video container extensions accepted by `POST /analyze`, in the order they
/// are listed in error messages.
pub const ALLOWED_VIDEO_EXTENSIONS: [&str; 6] = [".mp4", ".avi", ".mov", ".mkv", ".flv", ".wmv"];

/// Extract the lower-cased extension (with leading dot) from a client filename.
///
/// Only the final path component is considered. Names without a dot, names
/// whose only dot is the first character (`.mp4`) and names ending in a dot
/// have no extension and yield an empty string.
pub fn extract_extension(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    match name.rfind('.') {
        Some(0) | None => String::new(),
        Some(idx) if idx + 1 == name.len() => String::new(),
        Some(idx) => name[idx..].to_lowercase(),
    }
}

/// MIME type served for a stored video, keyed by its lower-cased extension.
pub fn video_content_type(extension: &str) -> &'static str {
    match extension {
        ".mp4" => "video/mp4",
        ".avi" => "video/x-msvideo",
        ".mov" => "video/quicktime",
        ".mkv" => "video/x-matroska",
        ".flv" => "video/x-flv",
        ".wmv" => "video/x-ms-wmv",
        _ => "application/octet-stream",
    }
}

/// Validate the filename's extension against the video allowlist and return it.
pub fn validate_video_extension(filename: &str) -> Result<String, AppError> {
    let extension = extract_extension(filename);

    if !ALLOWED_VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::UnsupportedFormat {
            extension,
            allowed: ALLOWED_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        });
    }

    Ok(extension)
}
