//! The `DocumentApi` trait seam
//!
//! The services layer (intake, upload orchestration, document browsing)
//! talks to the remote document backend exclusively through this trait.
//! `lexdoc-client` provides the reqwest implementation; tests provide
//! in-memory mocks with injectable failures.

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::PersistedDocument;

/// Payload for a single document upload. Bytes are read from the queue
/// entry's file handle immediately before the request is built.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub document_name: String,
    /// Lowercase extension, mirrored into the multipart form.
    pub document_type: String,
    pub status: String,
    pub bytes: Vec<u8>,
}

/// Raw document bytes streamed from the backend, with the content type the
/// server declared (if any).
#[derive(Debug, Clone)]
pub struct DownloadedBytes {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// Remote document operations consumed by the pipeline.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// All persisted documents for a case.
    async fn list_case_documents(
        &self,
        case_id: i64,
    ) -> Result<Vec<PersistedDocument>, AppError>;

    /// Number of persisted documents for a case.
    async fn document_count(&self, case_id: i64) -> Result<i64, AppError>;

    /// Upload one document via multipart form. Returns the created record.
    async fn upload_document(
        &self,
        uploader_id: i64,
        case_id: i64,
        request: UploadRequest,
    ) -> Result<PersistedDocument, AppError>;

    /// Metadata for a single document.
    async fn document_details(&self, document_id: Uuid)
        -> Result<PersistedDocument, AppError>;

    /// Raw bytes of a stored document.
    async fn download_document(&self, document_id: Uuid) -> Result<DownloadedBytes, AppError>;

    /// Irreversible server-side delete.
    async fn delete_document(&self, document_id: Uuid) -> Result<(), AppError>;
}
