//! Case document browsing
//!
//! Holds the fetched document list for one case and layers filtering,
//! preview fetching and deletion on top of it. Filtering is a pure view
//! over the cached list; mutations go through the backend and invalidate
//! the cache.

use std::path::Path;

use tracing::{debug, info, warn};
use uuid::Uuid;

use lexdoc_core::models::{PersistedDocument, Preview};
use lexdoc_core::{AppError, DocumentApi, ErrorMetadata};
use lexdoc_preview::preview_from_download;

/// Document-type filter. "ALL" (any case) selects everything; any other
/// value requires an exact, case-insensitive type match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Type(String),
}

impl TypeFilter {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("ALL") {
            TypeFilter::All
        } else {
            TypeFilter::Type(value.to_string())
        }
    }

    fn matches(&self, document: &PersistedDocument) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Type(wanted) => document.matches_type(wanted),
        }
    }
}

/// Cached view of one case's documents.
#[derive(Debug, Default)]
pub struct DocumentBrowser {
    case_id: i64,
    documents: Vec<PersistedDocument>,
    loaded: bool,
}

impl DocumentBrowser {
    pub fn new(case_id: i64) -> Self {
        Self {
            case_id,
            documents: Vec::new(),
            loaded: false,
        }
    }

    pub fn case_id(&self) -> i64 {
        self.case_id
    }

    pub fn documents(&self) -> &[PersistedDocument] {
        &self.documents
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Drop the cached list; the next refresh re-fetches it.
    pub fn invalidate(&mut self) {
        self.documents.clear();
        self.loaded = false;
    }

    /// Fetch the case's documents from the backend, replacing the cache.
    pub async fn refresh<A: DocumentApi>(&mut self, api: &A) -> Result<(), AppError> {
        let documents = api.list_case_documents(self.case_id).await?;
        debug!(case_id = self.case_id, count = documents.len(), "document list refreshed");
        self.documents = documents;
        self.loaded = true;
        Ok(())
    }

    /// Filtered view of the cached list. Both predicates must hold: the
    /// query matches name or type as a case-insensitive substring (empty
    /// query matches everything), and the type filter matches exactly.
    /// Pure, so applying it repeatedly with the same inputs is idempotent.
    pub fn filter(&self, query: &str, type_filter: &TypeFilter) -> Vec<&PersistedDocument> {
        self.documents
            .iter()
            .filter(|doc| doc.matches_query(query) && type_filter.matches(doc))
            .collect()
    }

    /// Distinct document types of the cached list, in first-seen order.
    pub fn distinct_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for doc in &self.documents {
            if !types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(&doc.document_type))
            {
                types.push(doc.document_type.clone());
            }
        }
        types
    }

    /// Total document count for the case. Degrades to zero on any backend
    /// error; a count is decoration, not something worth failing a page for.
    pub async fn document_count<A: DocumentApi>(&self, api: &A) -> i64 {
        match api.document_count(self.case_id).await {
            Ok(count) => count,
            Err(err) => {
                warn!(case_id = self.case_id, error = %err, "document count unavailable");
                0
            }
        }
    }

    /// Download a stored document and build a preview from its bytes.
    ///
    /// The document type comes from the cached list when present, otherwise
    /// from a details lookup via [`preview_document`].
    pub async fn fetch_preview<A: DocumentApi>(&self, api: &A, document_id: Uuid) -> Preview {
        match self
            .documents
            .iter()
            .find(|doc| doc.document_id == document_id)
        {
            Some(doc) => preview_with_type(api, document_id, &doc.document_type).await,
            None => preview_document(api, document_id).await,
        }
    }

    /// Delete a stored document; deletion invalidates the cached list.
    pub async fn delete<A: DocumentApi>(
        &mut self,
        api: &A,
        document_id: Uuid,
        confirmed: bool,
    ) -> Result<(), AppError> {
        delete_document(api, document_id, confirmed).await?;
        self.invalidate();
        Ok(())
    }
}

/// Download a stored document and build a preview from its bytes, without
/// a loaded case list; the document type comes from a details lookup. Any
/// failure along the way becomes an error preview rather than a hard
/// error, so the viewer always has something to show.
pub async fn preview_document<A: DocumentApi>(api: &A, document_id: Uuid) -> Preview {
    match api.document_details(document_id).await {
        Ok(doc) => preview_with_type(api, document_id, &doc.document_type).await,
        Err(err) => Preview::error(err.client_message()),
    }
}

async fn preview_with_type<A: DocumentApi>(
    api: &A,
    document_id: Uuid,
    document_type: &str,
) -> Preview {
    match api.download_document(document_id).await {
        Ok(download) => preview_from_download(document_type, &download),
        Err(err) => Preview::error(err.client_message()),
    }
}

/// Save a stored document's bytes to a local path. Returns the number of
/// bytes written.
pub async fn save_document<A: DocumentApi>(
    api: &A,
    document_id: Uuid,
    destination: &Path,
) -> Result<usize, AppError> {
    let download = api.download_document(document_id).await?;
    tokio::fs::write(destination, &download.bytes).await?;
    info!(%document_id, path = %destination.display(), bytes = download.bytes.len(), "document saved");
    Ok(download.bytes.len())
}

/// Delete a stored document. The caller must pass an explicit confirmation
/// flag.
pub async fn delete_document<A: DocumentApi>(
    api: &A,
    document_id: Uuid,
    confirmed: bool,
) -> Result<(), AppError> {
    if !confirmed {
        return Err(AppError::InvalidInput(
            "Deletion must be confirmed".to_string(),
        ));
    }
    api.delete_document(document_id).await?;
    info!(%document_id, "document deleted");
    Ok(())
}
