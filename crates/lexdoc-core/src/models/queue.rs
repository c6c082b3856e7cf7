use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::format::{file_extension, mime_type_for_extension};

/// Upload lifecycle of a queue entry. The only transitions are
/// Pending -> Uploading -> Completed and Uploading -> Failed; both end
/// states are terminal for a given attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Pending,
    Uploading,
    Completed,
    Failed,
}

/// Opaque, exclusively-owned handle to the file backing a queue entry.
///
/// Resolved once at intake; the queue entry is the only owner (the type is
/// deliberately not `Clone`). Reads go through [`FileHandle::read`] so the
/// source file is never mutated by the pipeline.
#[derive(Debug)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full file contents. A failure here is recoverable: the
    /// handle stays valid and the read may simply be retried.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// Read the file as UTF-8 text (lossy for non-UTF-8 byte sequences).
    pub fn read_text(&self) -> io::Result<String> {
        Ok(String::from_utf8_lossy(&fs::read(&self.path)?).into_owned())
    }
}

/// A file staged for upload, not yet persisted remotely.
///
/// Not `Clone`: the embedded [`FileHandle`] must stay exclusively owned by
/// the queue entry. Use [`QueuedFile::info`] for metadata snapshots.
#[derive(Debug)]
pub struct QueuedFile {
    /// Unique within a queue; derived from name, size, and intake time.
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub last_modified_at: DateTime<Utc>,
    pub upload_status: UploadStatus,
    pub handle: FileHandle,
}

impl QueuedFile {
    /// Resolve a path into a queue entry candidate, capturing its metadata.
    /// Validation happens separately at intake; this only stats the file.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Not a regular file: {}", path.display()),
            ));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid file name: {}", path.display()),
                )
            })?;

        let last_modified_at = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        let size = metadata.len();
        let id = format!("{}-{}-{}", name, size, Utc::now().timestamp_millis());
        let mime_type = mime_type_for_extension(&file_extension(&name)).to_string();

        Ok(Self {
            id,
            name,
            size,
            mime_type,
            last_modified_at,
            upload_status: UploadStatus::Pending,
            handle: FileHandle::new(path.to_path_buf()),
        })
    }

    pub fn extension(&self) -> String {
        file_extension(&self.name)
    }

    pub fn mark_uploading(&mut self) {
        self.upload_status = UploadStatus::Uploading;
    }

    pub fn mark_completed(&mut self) {
        self.upload_status = UploadStatus::Completed;
    }

    pub fn mark_failed(&mut self) {
        self.upload_status = UploadStatus::Failed;
    }

    /// Metadata snapshot without the file handle, for reports and outcomes.
    pub fn info(&self) -> QueuedFileInfo {
        QueuedFileInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            size: self.size,
            mime_type: self.mime_type.clone(),
            upload_status: self.upload_status,
        }
    }
}

/// Plain metadata view of a queue entry. Carries no handle, so it is freely
/// cloneable and serializable for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedFileInfo {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub upload_status: UploadStatus,
}
