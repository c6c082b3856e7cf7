//! Preview generation for staged and persisted documents.
//!
//! Local previews read through a queue entry's file handle; remote previews
//! classify bytes already downloaded from the backend. Both produce the
//! same `Preview` variants from `lexdoc_core::models`.

pub mod generator;
pub mod remote;

pub use generator::{generate_preview, read_full_text, truncate_text, TEXT_PREVIEW_MAX_CHARS};
pub use remote::preview_from_download;

use base64::Engine;
use image::ImageReader;
use std::io::Cursor;

/// Encode raw bytes as an inline data URL for the given MIME type.
///
/// Data-URL encoding keeps the preview self-contained: there is no native
/// object handle for the caller to revoke afterwards.
pub(crate) fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Probe pixel dimensions from encoded image bytes. Returns None when the
/// probe fails; the image preview is still emitted in that case.
pub(crate) fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?;
    reader.into_dimensions().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_has_mime_and_base64_payload() {
        let url = to_data_url("image/png", b"abc");
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.ends_with("YWJj"));
    }

    #[test]
    fn probe_dimensions_on_garbage_is_none() {
        assert_eq!(probe_dimensions(b"not an image"), None);
    }
}
