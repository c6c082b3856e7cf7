//! Lexdoc Core Library
//!
//! This crate provides the domain models, error types, session context, and
//! intake validation rules shared across all Lexdoc components, plus the
//! `DocumentApi` trait that the HTTP client implements and the services
//! layer consumes.

pub mod api;
pub mod error;
pub mod format;
pub mod models;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use api::{DocumentApi, DownloadedBytes, UploadRequest};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use format::{file_extension, format_file_size, mime_type_for_extension};
pub use session::Session;
pub use validation::{IntakeValidator, ValidationError, ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES};
