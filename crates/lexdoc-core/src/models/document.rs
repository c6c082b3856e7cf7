use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// Metadata for a document already stored server-side. Owned by the backend;
/// the pipeline holds only a transient, refreshable per-case cache of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDocument {
    pub document_id: Uuid,
    pub document_name: String,
    /// Lowercase file extension ("pdf", "jpg", ...).
    pub document_type: String,
    pub size: i64,
    pub uploaded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_role: Option<Role>,
    /// Download endpoint reference, when the backend includes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PersistedDocument {
    /// Case-insensitive match against a free-text query on name or type.
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.document_name.to_lowercase().contains(&query)
            || self.document_type.to_lowercase().contains(&query)
    }

    /// Exact (case-insensitive) type match.
    pub fn matches_type(&self, document_type: &str) -> bool {
        self.document_type.eq_ignore_ascii_case(document_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, doc_type: &str) -> PersistedDocument {
        PersistedDocument {
            document_id: Uuid::new_v4(),
            document_name: name.to_string(),
            document_type: doc_type.to_string(),
            size: 1024,
            uploaded_at: Utc::now(),
            uploader_name: Some("Jane Doe".to_string()),
            uploader_role: Some(Role::Client),
            url: None,
        }
    }

    #[test]
    fn matches_query_on_name_and_type() {
        let d = doc("Contract Draft.pdf", "pdf");
        assert!(d.matches_query("contract"));
        assert!(d.matches_query("PDF"));
        assert!(d.matches_query(""));
        assert!(!d.matches_query("invoice"));
    }

    #[test]
    fn matches_type_is_exact_case_insensitive() {
        let d = doc("scan.jpeg", "jpeg");
        assert!(d.matches_type("JPEG"));
        assert!(!d.matches_type("jpg"));
    }

    #[test]
    fn deserializes_backend_camel_case() {
        let json = r#"{
            "documentId": "7f6b0a3e-58c4-4d2b-9c1f-0e5a9b9d2a11",
            "documentName": "contract.pdf",
            "documentType": "pdf",
            "size": 5242880,
            "uploadedAt": "2025-03-14T09:26:53Z",
            "uploaderName": "Jane Doe",
            "uploaderRole": "CLIENT"
        }"#;
        let d: PersistedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(d.document_name, "contract.pdf");
        assert_eq!(d.uploader_role, Some(Role::Client));
        assert_eq!(d.url, None);
    }
}
