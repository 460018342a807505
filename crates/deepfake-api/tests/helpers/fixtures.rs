//! Upload payloads and forms.

use axum_test::multipart::{MultipartForm, Part};

/// Deterministic non-trivial payload of `len` bytes.
pub fn video_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Form with a single `file` part.
pub fn video_form(filename: &str, data: Vec<u8>) -> MultipartForm {
    let part = Part::bytes(data)
        .file_name(filename.to_string())
        .mime_type("video/mp4");
    MultipartForm::new().add_part("file", part)
}
