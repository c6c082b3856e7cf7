//! Local preview generation
//!
//! Single-attempt, interactively retried: a read failure surfaces as
//! `Preview::Error` and the caller may simply call again. The source file
//! handle is never mutated.

use tracing::debug;

use lexdoc_core::models::{FileCategory, Preview, QueuedFile};
use lexdoc_core::AppError;

use crate::{probe_dimensions, to_data_url};

/// Textual previews are cut at this many characters; the full content stays
/// available through [`read_full_text`].
pub const TEXT_PREVIEW_MAX_CHARS: usize = 10_000;

/// Generate a type-appropriate preview for a staged file.
///
/// Dispatches on the declared MIME type. Unrecognized types get a
/// metadata-only generic preview rather than an error; office formats never
/// have their bytes read at all.
pub async fn generate_preview(file: &QueuedFile) -> Preview {
    let category = FileCategory::from_mime(&file.mime_type);
    debug!(name = %file.name, ?category, "generating preview");

    match category {
        FileCategory::Image => image_preview(file).await,
        FileCategory::Text => text_preview(file).await,
        FileCategory::Pdf | FileCategory::Word | FileCategory::Excel | FileCategory::Other => {
            Preview::Generic {
                icon: category.icon(),
            }
        }
    }
}

async fn image_preview(file: &QueuedFile) -> Preview {
    let bytes = match tokio::fs::read(file.handle.path()).await {
        Ok(bytes) => bytes,
        Err(err) => return Preview::error(format!("Preview generation failed: {}", err)),
    };

    // A failed dimension probe degrades to dimensions = None, it does not
    // fail the preview.
    let dimensions = probe_dimensions(&bytes);

    Preview::Image {
        content_data_url: to_data_url(&file.mime_type, &bytes),
        dimensions,
    }
}

async fn text_preview(file: &QueuedFile) -> Preview {
    let bytes = match tokio::fs::read(file.handle.path()).await {
        Ok(bytes) => bytes,
        Err(err) => return Preview::error(format!("Preview generation failed: {}", err)),
    };

    let full = String::from_utf8_lossy(&bytes).into_owned();
    let (content, truncated) = truncate_text(&full);
    Preview::Text { content, truncated }
}

/// Cut text to the preview limit. The truncated content is exactly the
/// first `TEXT_PREVIEW_MAX_CHARS` characters, counted in chars rather than
/// bytes so multi-byte content never splits a character.
pub fn truncate_text(content: &str) -> (String, bool) {
    if content.chars().count() > TEXT_PREVIEW_MAX_CHARS {
        (
            content.chars().take(TEXT_PREVIEW_MAX_CHARS).collect(),
            true,
        )
    } else {
        (content.to_string(), false)
    }
}

/// Untruncated textual content, for callers that asked for the rest after
/// seeing a truncated preview.
pub async fn read_full_text(file: &QueuedFile) -> Result<String, AppError> {
    let bytes = tokio::fs::read(file.handle.path())
        .await
        .map_err(|err| AppError::PreviewFailed(format!("Failed to read {}: {}", file.name, err)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use lexdoc_core::models::FileIcon;
    use std::fs;
    use std::io::Cursor;

    fn staged(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> QueuedFile {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        QueuedFile::from_path(&path).unwrap()
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn image_preview_with_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "evidence.png", &png_bytes(3, 2));

        match generate_preview(&file).await {
            Preview::Image {
                content_data_url,
                dimensions,
            } => {
                assert!(content_data_url.starts_with("data:image/png;base64,"));
                assert_eq!(dimensions, Some((3, 2)));
            }
            other => panic!("expected image preview, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn corrupt_image_still_previews_without_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "broken.png", b"this is not a png");

        match generate_preview(&file).await {
            Preview::Image { dimensions, .. } => assert_eq!(dimensions, None),
            other => panic!("expected image preview, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn text_preview_truncates_at_limit() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "statement.txt", "A".repeat(12_000).as_bytes());

        match generate_preview(&file).await {
            Preview::Text { content, truncated } => {
                assert!(truncated);
                assert_eq!(content.chars().count(), TEXT_PREVIEW_MAX_CHARS);
                assert!(content.chars().all(|c| c == 'A'));
            }
            other => panic!("expected text preview, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn short_text_is_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "note.txt", b"brief note");

        match generate_preview(&file).await {
            Preview::Text { content, truncated } => {
                assert!(!truncated);
                assert_eq!(content, "brief note");
            }
            other => panic!("expected text preview, got {:?}", other),
        }
    }

    #[test]
    fn truncate_text_exact_boundary() {
        let exactly = "B".repeat(TEXT_PREVIEW_MAX_CHARS);
        let (content, truncated) = truncate_text(&exactly);
        assert!(!truncated);
        assert_eq!(content.len(), TEXT_PREVIEW_MAX_CHARS);

        let over = "B".repeat(TEXT_PREVIEW_MAX_CHARS + 1);
        let (content, truncated) = truncate_text(&over);
        assert!(truncated);
        assert_eq!(content.chars().count(), TEXT_PREVIEW_MAX_CHARS);
    }

    #[tokio::test]
    async fn office_formats_never_read_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "brief.pdf", b"%PDF-1.4 junk");

        // Deleting the underlying file proves the generic path reads nothing.
        fs::remove_file(file.handle.path()).unwrap();

        assert_eq!(
            generate_preview(&file).await,
            Preview::Generic {
                icon: FileIcon::Pdf
            }
        );
    }

    #[tokio::test]
    async fn unknown_type_gets_generic_preview() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "data.bin", b"\x00\x01\x02");

        assert_eq!(
            generate_preview(&file).await,
            Preview::Generic {
                icon: FileIcon::File
            }
        );
    }

    #[tokio::test]
    async fn read_failure_surfaces_as_error_and_is_retryable() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "gone.txt", b"soon deleted");
        fs::remove_file(file.handle.path()).unwrap();

        match generate_preview(&file).await {
            Preview::Error { message } => {
                assert!(message.contains("Preview generation failed"))
            }
            other => panic!("expected error preview, got {:?}", other),
        }

        // Restore the file; the retry succeeds against the same handle.
        fs::write(file.handle.path(), b"restored").unwrap();
        match generate_preview(&file).await {
            Preview::Text { content, .. } => assert_eq!(content, "restored"),
            other => panic!("expected text preview after retry, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn read_full_text_returns_untruncated_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = staged(&dir, "long.txt", "C".repeat(12_000).as_bytes());

        let full = read_full_text(&file).await.unwrap();
        assert_eq!(full.chars().count(), 12_000);
    }
}
