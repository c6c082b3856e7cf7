//! File intake and the upload queue
//!
//! Files enter the pipeline here: resolved to queue entries, validated, and
//! deduplicated against what is already staged. Rejections are collected as
//! per-file reason strings so one bad file never blocks the rest of a batch.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use lexdoc_core::models::{QueuedFile, QueuedFileInfo, Role, UploadStatus};
use lexdoc_core::{AppError, IntakeValidator};

use crate::uploader::ProgressMap;

/// Result of one intake batch: ids accepted into the queue plus per-file
/// rejection reasons for user notification.
#[derive(Debug, Default, Serialize)]
pub struct IntakeReport {
    pub accepted: Vec<QueuedFileInfo>,
    pub rejected: Vec<(String, String)>,
}

impl IntakeReport {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}

/// FIFO queue of files staged for upload.
///
/// Entries are appended in submission order and never reordered. The queue
/// and its progress map are mutated only by intake and the upload
/// orchestrator.
#[derive(Debug, Default)]
pub struct UploadQueue {
    entries: Vec<QueuedFile>,
    validator: IntakeValidator,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            validator: IntakeValidator::default(),
        }
    }

    /// Stage a batch of files for upload.
    ///
    /// Preconditions and per-file rules, in order: role must be allowed to
    /// upload (otherwise the entire batch is rejected); then per file,
    /// duplicate (name, size) first, size cap second, allowed type third.
    /// The first failing rule wins. An empty batch is a no-op.
    pub fn submit(&mut self, paths: &[impl AsRef<Path>], role: Role) -> IntakeReport {
        let mut report = IntakeReport::default();

        if paths.is_empty() {
            return report;
        }

        if !role.can_upload() {
            for path in paths {
                report.rejected.push((
                    display_name(path.as_ref()),
                    "Unauthorized: only clients or lawyers can upload documents".to_string(),
                ));
            }
            return report;
        }

        for path in paths {
            let path = path.as_ref();
            let name = display_name(path);

            let candidate = match QueuedFile::from_path(path) {
                Ok(candidate) => candidate,
                Err(err) => {
                    report.rejected.push((name, format!("Cannot read file: {}", err)));
                    continue;
                }
            };

            if self.contains(&candidate.name, candidate.size) {
                report
                    .rejected
                    .push((name, "Duplicate file: already in the upload queue".to_string()));
                continue;
            }

            if let Err(err) = self.validator.validate(&candidate.name, candidate.size) {
                report.rejected.push((name, err.to_string()));
                continue;
            }

            debug!(name = %candidate.name, size = candidate.size, id = %candidate.id, "file staged");
            report.accepted.push(candidate.info());
            self.entries.push(candidate);
        }

        info!(
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            "intake batch processed"
        );
        report
    }

    /// True when an entry with the same (name, size) is already staged.
    pub fn contains(&self, name: &str, size: u64) -> bool {
        self.entries
            .iter()
            .any(|e| e.name == name && e.size == size)
    }

    /// Remove one entry by id, clearing any per-file progress recorded for
    /// it. Rejected while the entry is uploading.
    pub fn remove(
        &mut self,
        id: &str,
        progress: &mut ProgressMap,
    ) -> Result<QueuedFileInfo, AppError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Queue entry {} not found", id)))?;

        if self.entries[index].upload_status == UploadStatus::Uploading {
            return Err(AppError::InvalidInput(
                "Cannot remove a file while it is uploading".to_string(),
            ));
        }

        progress.remove(id);
        Ok(self.entries.remove(index).info())
    }

    /// Drop every staged entry along with its recorded progress. Rejected
    /// while any entry is mid-upload. Returns the removed count.
    pub fn clear(&mut self, progress: &mut ProgressMap) -> Result<usize, AppError> {
        if self
            .entries
            .iter()
            .any(|e| e.upload_status == UploadStatus::Uploading)
        {
            return Err(AppError::InvalidInput(
                "Cannot clear the queue while an upload is in progress".to_string(),
            ));
        }
        let count = self.entries.len();
        for entry in &self.entries {
            progress.remove(&entry.id);
        }
        self.entries.clear();
        Ok(count)
    }

    /// Remove all completed entries, returning their ids so per-file
    /// progress can be cleared alongside.
    pub(crate) fn evict_completed(&mut self) -> Vec<String> {
        let mut evicted = Vec::new();
        self.entries.retain(|e| {
            if e.upload_status == UploadStatus::Completed {
                evicted.push(e.id.clone());
                false
            } else {
                true
            }
        });
        evicted
    }

    pub fn entries(&self) -> &[QueuedFile] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<QueuedFile> {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string())
}
