use serde::{Deserialize, Serialize};

use crate::format::file_extension;

/// Coarse file classification driving preview dispatch.
///
/// A closed enum rather than a MIME-string lookup table, so every dispatch
/// site is checked for exhaustiveness. Unrecognized types land in `Other`
/// and get a generic preview; classification itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Text,
    Pdf,
    Word,
    Excel,
    Other,
}

impl FileCategory {
    pub fn from_mime(mime_type: &str) -> Self {
        match mime_type {
            "image/jpeg" | "image/jpg" | "image/png" | "image/gif" => FileCategory::Image,
            "text/plain" | "text/markdown" => FileCategory::Text,
            "application/pdf" => FileCategory::Pdf,
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                FileCategory::Word
            }
            "application/vnd.ms-excel"
            | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                FileCategory::Excel
            }
            _ => FileCategory::Other,
        }
    }

    /// Classification by stored document type (lowercase extension), used
    /// for documents fetched from the backend where no MIME type is kept.
    pub fn from_document_type(document_type: &str) -> Self {
        match document_type {
            "jpg" | "jpeg" | "png" | "gif" => FileCategory::Image,
            "txt" | "md" => FileCategory::Text,
            "pdf" => FileCategory::Pdf,
            "doc" | "docx" => FileCategory::Word,
            "xls" | "xlsx" => FileCategory::Excel,
            _ => FileCategory::Other,
        }
    }

    pub fn from_file_name(file_name: &str) -> Self {
        Self::from_document_type(&file_extension(file_name))
    }

    pub fn icon(&self) -> FileIcon {
        match self {
            FileCategory::Pdf => FileIcon::Pdf,
            FileCategory::Word => FileIcon::Word,
            FileCategory::Excel => FileIcon::Excel,
            FileCategory::Image | FileCategory::Text | FileCategory::Other => FileIcon::File,
        }
    }
}

/// Icon kind shown on metadata-only previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIcon {
    Pdf,
    Word,
    Excel,
    File,
}

/// A derived, ephemeral, read-only projection of a file's bytes (or just its
/// metadata). Owned by whoever requested it; never cached by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Preview {
    /// Inline base64 data URL plus pixel dimensions when probing succeeded.
    /// A failed dimension probe is partial success, not an error.
    Image {
        content_data_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        dimensions: Option<(u32, u32)>,
    },
    /// Textual content, truncated to the preview limit when oversized.
    Text { content: String, truncated: bool },
    /// Metadata-only card for types we never read bytes from.
    Generic { icon: FileIcon },
    /// Recognized but not previewable; the caller should offer a download.
    Unsupported,
    /// Read or decode failure; recoverable by re-requesting the preview.
    Error { message: String },
}

impl Preview {
    pub fn error(message: impl Into<String>) -> Self {
        Preview::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_mime() {
        assert_eq!(FileCategory::from_mime("image/png"), FileCategory::Image);
        assert_eq!(FileCategory::from_mime("text/plain"), FileCategory::Text);
        assert_eq!(
            FileCategory::from_mime("application/pdf"),
            FileCategory::Pdf
        );
        assert_eq!(
            FileCategory::from_mime("application/msword"),
            FileCategory::Word
        );
        assert_eq!(
            FileCategory::from_mime("application/x-mystery"),
            FileCategory::Other
        );
    }

    #[test]
    fn category_from_document_type() {
        assert_eq!(
            FileCategory::from_document_type("jpeg"),
            FileCategory::Image
        );
        assert_eq!(FileCategory::from_document_type("md"), FileCategory::Text);
        assert_eq!(
            FileCategory::from_document_type("exe"),
            FileCategory::Other
        );
    }

    #[test]
    fn icons_for_office_types() {
        assert_eq!(FileCategory::Pdf.icon(), FileIcon::Pdf);
        assert_eq!(FileCategory::Word.icon(), FileIcon::Word);
        assert_eq!(FileCategory::Excel.icon(), FileIcon::Excel);
        assert_eq!(FileCategory::Other.icon(), FileIcon::File);
    }

    #[test]
    fn preview_serializes_tagged() {
        let p = Preview::Text {
            content: "abc".to_string(),
            truncated: false,
        };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "abc");

        let u = serde_json::to_value(Preview::Unsupported).unwrap();
        assert_eq!(u["type"], "unsupported");
    }
}
