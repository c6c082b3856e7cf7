//! Sequential upload orchestration
//!
//! Uploads staged files one at a time, in queue order, so per-file progress
//! is unambiguous and the backend's rate limit is respected. A failure on
//! one file never aborts the rest of the batch; outcomes are collected and
//! reported once the whole batch resolves.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use lexdoc_core::models::{QueuedFileInfo, UploadStatus};
use lexdoc_core::{AppError, DocumentApi, ErrorMetadata, UploadRequest};

use crate::documents::DocumentBrowser;
use crate::intake::UploadQueue;

/// How long completed entries stay visible before leaving the queue, so the
/// user sees the confirmation badge.
pub const COMPLETED_EVICTION_DELAY: Duration = Duration::from_secs(2);

/// Per-file progress: 0-100 for normal progress, -1 for failure, absent
/// for not yet started. Only boundary values are reported; the transport
/// gives no granular mid-transfer signal.
#[derive(Debug, Default, Serialize)]
pub struct ProgressMap {
    entries: HashMap<String, i32>,
}

impl ProgressMap {
    pub const FAILED: i32 = -1;

    pub fn start(&mut self, id: &str) {
        self.entries.insert(id.to_string(), 0);
    }

    pub fn complete(&mut self, id: &str) {
        self.entries.insert(id.to_string(), 100);
    }

    pub fn fail(&mut self, id: &str) {
        self.entries.insert(id.to_string(), Self::FAILED);
    }

    pub fn get(&self, id: &str) -> Option<i32> {
        self.entries.get(id).copied()
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of one upload batch, reported after every attempt resolves.
#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub succeeded: Vec<QueuedFileInfo>,
    pub failed: Vec<(QueuedFileInfo, String)>,
}

/// The upload orchestrator.
#[derive(Debug)]
pub struct Uploader {
    eviction_delay: Duration,
}

impl Default for Uploader {
    fn default() -> Self {
        Self {
            eviction_delay: COMPLETED_EVICTION_DELAY,
        }
    }
}

impl Uploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the post-completion eviction delay (tests use zero).
    pub fn with_eviction_delay(eviction_delay: Duration) -> Self {
        Self { eviction_delay }
    }

    /// Upload every pending entry, strictly in queue order.
    ///
    /// Each entry moves Pending -> Uploading -> Completed or Failed; failed
    /// and completed entries are terminal for this attempt (a re-submission
    /// creates a fresh entry rather than resurrecting one). The browser's
    /// document list is refreshed exactly once, after all attempts resolve;
    /// completed entries are then evicted after the configured delay while
    /// failed ones stay visible for manual retry or removal.
    pub async fn upload_all<A: DocumentApi>(
        &self,
        queue: &mut UploadQueue,
        progress: &mut ProgressMap,
        browser: &mut DocumentBrowser,
        api: &A,
        uploader_id: i64,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        let case_id = browser.case_id();

        for index in 0..queue.len() {
            if queue.entries()[index].upload_status != UploadStatus::Pending {
                continue;
            }

            let (id, name, path, document_type) = {
                let entry = &queue.entries()[index];
                (
                    entry.id.clone(),
                    entry.name.clone(),
                    entry.handle.path().to_path_buf(),
                    entry.extension(),
                )
            };

            queue.entries_mut()[index].mark_uploading();
            progress.start(&id);
            info!(case_id, file = %name, "uploading");

            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    api.upload_document(
                        uploader_id,
                        case_id,
                        UploadRequest {
                            file_name: name.clone(),
                            document_name: name.clone(),
                            document_type,
                            status: "uploaded".to_string(),
                            bytes,
                        },
                    )
                    .await
                }
                Err(err) => Err(AppError::from(err)),
            };

            match result {
                Ok(_) => {
                    let entry = &mut queue.entries_mut()[index];
                    entry.mark_completed();
                    progress.complete(&id);
                    info!(case_id, file = %name, "upload completed");
                    outcome.succeeded.push(entry.info());
                }
                Err(err) => {
                    let entry = &mut queue.entries_mut()[index];
                    entry.mark_failed();
                    progress.fail(&id);
                    warn!(case_id, file = %name, error = %err, "upload failed");
                    outcome.failed.push((entry.info(), err.client_message()));
                }
            }
        }

        // One list refresh per batch, never per file.
        if let Err(err) = browser.refresh(api).await {
            warn!(case_id, error = %err, "failed to refresh document list after batch");
        }

        tokio::time::sleep(self.eviction_delay).await;
        for id in queue.evict_completed() {
            progress.remove(&id);
        }

        outcome
    }
}
