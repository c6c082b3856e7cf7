//! Error types module
//!
//! This module provides the core error types used throughout Lexdoc. All
//! errors are unified under the `AppError` enum, which can represent network,
//! authorization, validation, and preview failures surfaced by the document
//! backend or the local pipeline.
//!
//! Nothing in this taxonomy is fatal: every variant carries a client-facing
//! message and a recoverability flag so callers can decide between a retry
//! affordance and a plain notification.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like permission denials
    Debug,
    /// Warning level - for recoverable issues like preview failures
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error presentation - defines how an error surfaces to a user.
/// This trait allows errors to self-describe their notification characteristics.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "NETWORK_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the user
    fn suggested_action(&self) -> Option<&'static str>;

    /// User-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Preview failed: {0}")]
    PreviewFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("UUID parsing error: {}", err))
    }
}

/// Static metadata for each variant: (error_code, recoverable, suggested_action, log_level).
/// client_message stays per-variant for dynamic content.
fn app_error_static_metadata(
    err: &AppError,
) -> (&'static str, bool, Option<&'static str>, LogLevel) {
    match err {
        AppError::Network(_) => (
            "NETWORK_ERROR",
            true,
            Some("Check your connection and retry"),
            LogLevel::Warn,
        ),
        AppError::Unauthorized(_) => (
            "UNAUTHORIZED",
            false,
            Some("Sign in again to refresh your session"),
            LogLevel::Debug,
        ),
        AppError::Forbidden(_) => ("FORBIDDEN", false, None, LogLevel::Debug),
        AppError::NotFound(_) => (
            "NOT_FOUND",
            false,
            Some("Verify the document or case ID exists"),
            LogLevel::Debug,
        ),
        AppError::InvalidInput(_) => (
            "INVALID_INPUT",
            false,
            Some("Check the file and try again"),
            LogLevel::Debug,
        ),
        AppError::PayloadTooLarge(_) => (
            "PAYLOAD_TOO_LARGE",
            false,
            Some("Reduce file size below 20MB"),
            LogLevel::Debug,
        ),
        AppError::PreviewFailed(_) => (
            "PREVIEW_FAILED",
            true,
            Some("Retry the preview or download the file instead"),
            LogLevel::Warn,
        ),
        AppError::Internal(_) => (
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            LogLevel::Error,
        ),
        AppError::InternalWithSource { .. } => (
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Map an HTTP response status and body to the matching error variant.
    ///
    /// `action` names what the caller was doing ("view documents for this
    /// case"); `resource` names what a 404 refers to ("case", "document").
    /// The backend returns plain-text bodies for 400s; those are surfaced
    /// verbatim as the user-facing message.
    pub fn from_status(status: u16, action: &str, resource: &str, body: String) -> Self {
        match status {
            401 => AppError::Unauthorized("Authentication failed".to_string()),
            403 => AppError::Forbidden(format!("You do not have permission to {}", action)),
            404 => AppError::NotFound(format!("{} not found", capitalize(resource))),
            400 => {
                if body.trim().is_empty() {
                    AppError::InvalidInput(
                        "Invalid request - please check your file and try again".to_string(),
                    )
                } else {
                    AppError::InvalidInput(body)
                }
            }
            413 => AppError::PayloadTooLarge(format!("{} exceeds the size limit", capitalize(resource))),
            _ => AppError::Network(format!("Request failed with status {}: {}", status, body)),
        }
    }

    /// Get detailed error information including the error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl ErrorMetadata for AppError {
    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).0
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).1
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Network(_) => "A network error occurred. Please try again".to_string(),
            AppError::Unauthorized(ref msg) => msg.clone(),
            AppError::Forbidden(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::PreviewFailed(ref msg) => msg.clone(),
            AppError::Internal(_) => "An unexpected error occurred".to_string(),
            AppError::InternalWithSource { .. } => "An unexpected error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_network() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.error_code(), "NETWORK_ERROR");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
        assert_eq!(
            err.client_message(),
            "A network error occurred. Please try again"
        );
    }

    #[test]
    fn test_error_metadata_preview_failed() {
        let err = AppError::PreviewFailed("decode error".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.error_code(), "PREVIEW_FAILED");
        assert_eq!(err.client_message(), "decode error");
    }

    #[test]
    fn test_from_status_forbidden() {
        let err = AppError::from_status(403, "delete this document", "document", String::new());
        assert_eq!(err.error_code(), "FORBIDDEN");
        assert!(err
            .client_message()
            .contains("You do not have permission to delete this document"));
    }

    #[test]
    fn test_from_status_not_found() {
        let err = AppError::from_status(404, "view this document", "document", String::new());
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.client_message(), "Document not found");
    }

    #[test]
    fn test_from_status_bad_request_body_passthrough() {
        let err = AppError::from_status(400, "upload", "file", "case is closed".to_string());
        assert_eq!(err.client_message(), "case is closed");
    }

    #[test]
    fn test_from_status_unknown_is_network() {
        let err = AppError::from_status(502, "upload", "file", "bad gateway".to_string());
        assert_eq!(err.error_code(), "NETWORK_ERROR");
        assert!(err.to_string().contains("502"));
    }
}
