//! Data models for the document pipeline
//!
//! This module contains the data structures used throughout the pipeline,
//! organized by domain: the local upload queue, previews, persisted
//! documents, and users.

mod document;
mod preview;
mod queue;
mod user;

// Re-export all models for convenient imports
pub use document::*;
pub use preview::*;
pub use queue::*;
pub use user::*;
