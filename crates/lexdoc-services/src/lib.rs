//! Lexdoc Services Layer
//!
//! This crate is the pipeline's coordination layer: file intake into the
//! upload queue, sequential upload orchestration against the `DocumentApi`
//! seam, and the per-case document browser. Transport lives in
//! lexdoc-client; preview projection lives in lexdoc-preview.

pub mod documents;
pub mod intake;
pub mod uploader;

pub use documents::{delete_document, preview_document, save_document, DocumentBrowser, TypeFilter};
pub use intake::{IntakeReport, UploadQueue};
pub use uploader::{BatchOutcome, ProgressMap, Uploader, COMPLETED_EVICTION_DELAY};
