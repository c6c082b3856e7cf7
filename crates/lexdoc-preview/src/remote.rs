//! Preview classification for documents fetched from the backend.
//!
//! The bytes arrive via `DocumentApi::download_document`; this module only
//! decides how to project them. Unknown stored types yield `Unsupported`
//! so the viewer can fall back to a download affordance instead of
//! attempting speculative decoding.

use lexdoc_core::models::{FileCategory, Preview};
use lexdoc_core::{mime_type_for_extension, DownloadedBytes};

use crate::generator::truncate_text;
use crate::{probe_dimensions, to_data_url};

/// Build a preview from downloaded document bytes, keyed by the stored
/// document type (lowercase extension).
pub fn preview_from_download(document_type: &str, download: &DownloadedBytes) -> Preview {
    match FileCategory::from_document_type(document_type) {
        FileCategory::Image => {
            let mime = download
                .content_type
                .clone()
                .unwrap_or_else(|| mime_type_for_extension(document_type).to_string());
            Preview::Image {
                content_data_url: to_data_url(&mime, &download.bytes),
                dimensions: probe_dimensions(&download.bytes),
            }
        }
        FileCategory::Text => {
            let full = String::from_utf8_lossy(&download.bytes).into_owned();
            let (content, truncated) = truncate_text(&full);
            Preview::Text { content, truncated }
        }
        FileCategory::Pdf | FileCategory::Word | FileCategory::Excel | FileCategory::Other => {
            Preview::Unsupported
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn download(bytes: &[u8], content_type: Option<&str>) -> DownloadedBytes {
        DownloadedBytes {
            bytes: Bytes::copy_from_slice(bytes),
            content_type: content_type.map(|s| s.to_string()),
        }
    }

    #[test]
    fn executable_type_is_unsupported_not_error() {
        let preview = preview_from_download("exe", &download(b"MZ\x90\x00", None));
        assert_eq!(preview, Preview::Unsupported);
    }

    #[test]
    fn pdf_is_unsupported_in_remote_viewer() {
        let preview = preview_from_download("pdf", &download(b"%PDF-1.4", None));
        assert_eq!(preview, Preview::Unsupported);
    }

    #[test]
    fn text_document_previews_with_truncation_contract() {
        let long = "D".repeat(12_000);
        let preview = preview_from_download("txt", &download(long.as_bytes(), None));
        match preview {
            Preview::Text { content, truncated } => {
                assert!(truncated);
                assert_eq!(content.chars().count(), 10_000);
            }
            other => panic!("expected text preview, got {:?}", other),
        }
    }

    #[test]
    fn image_document_previews_with_dimensions() {
        let img = RgbaImage::new(4, 5);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();

        let preview = preview_from_download("png", &download(&out.into_inner(), None));
        match preview {
            Preview::Image {
                content_data_url,
                dimensions,
            } => {
                assert!(content_data_url.starts_with("data:image/png;base64,"));
                assert_eq!(dimensions, Some((4, 5)));
            }
            other => panic!("expected image preview, got {:?}", other),
        }
    }

    #[test]
    fn image_mime_prefers_server_content_type() {
        let preview = preview_from_download("jpg", &download(b"\xFF\xD8junk", Some("image/jpeg")));
        match preview {
            Preview::Image {
                content_data_url,
                dimensions,
            } => {
                assert!(content_data_url.starts_with("data:image/jpeg;base64,"));
                assert_eq!(dimensions, None);
            }
            other => panic!("expected image preview, got {:?}", other),
        }
    }
}
