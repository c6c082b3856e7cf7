//! Domain methods for the document backend.
//!
//! Implements `lexdoc_core::DocumentApi` over the generic helpers in the
//! crate root. Endpoint shapes follow the backend's REST+multipart
//! contract; permission and not-found messages are per-operation so they
//! read sensibly in toasts.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use lexdoc_core::models::PersistedDocument;
use lexdoc_core::{AppError, DocumentApi, DownloadedBytes, UploadRequest};

use crate::{documents_prefix, ApiClient};

#[async_trait]
impl DocumentApi for ApiClient {
    async fn list_case_documents(
        &self,
        case_id: i64,
    ) -> Result<Vec<PersistedDocument>, AppError> {
        debug!(case_id, "listing case documents");
        self.get_json(
            &format!("{}/case/{}", documents_prefix(), case_id),
            "view documents for this case",
            "case",
        )
        .await
    }

    async fn document_count(&self, case_id: i64) -> Result<i64, AppError> {
        self.get_json(
            &format!("{}/case/{}/count", documents_prefix(), case_id),
            "view documents for this case",
            "case",
        )
        .await
    }

    async fn upload_document(
        &self,
        uploader_id: i64,
        case_id: i64,
        request: UploadRequest,
    ) -> Result<PersistedDocument, AppError> {
        debug!(
            uploader_id,
            case_id,
            file_name = %request.file_name,
            size = request.bytes.len(),
            "uploading document"
        );

        let part = reqwest::multipart::Part::bytes(request.bytes)
            .file_name(request.file_name)
            .mime_str(lexdoc_core::mime_type_for_extension(&request.document_type))
            .map_err(|e| AppError::Internal(format!("Invalid MIME type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("caseId", case_id.to_string())
            .text("documentName", request.document_name)
            .text("documentType", request.document_type)
            .text("status", request.status);

        self.post_multipart(
            &format!("{}/upload/{}", documents_prefix(), uploader_id),
            form,
            "upload documents to this case",
            "case",
        )
        .await
    }

    async fn document_details(
        &self,
        document_id: Uuid,
    ) -> Result<PersistedDocument, AppError> {
        self.get_json(
            &format!("{}/{}", documents_prefix(), document_id),
            "view this document",
            "document",
        )
        .await
    }

    async fn download_document(&self, document_id: Uuid) -> Result<DownloadedBytes, AppError> {
        let (bytes, content_type) = self
            .get_bytes(
                &format!("{}/{}/download", documents_prefix(), document_id),
                "download this document",
                "document",
            )
            .await?;

        Ok(DownloadedBytes {
            bytes,
            content_type,
        })
    }

    async fn delete_document(&self, document_id: Uuid) -> Result<(), AppError> {
        debug!(%document_id, "deleting document");
        self.delete_path(
            &format!("{}/{}", documents_prefix(), document_id),
            "delete this document",
            "document",
        )
        .await
    }
}
