//! Client-side intake validation
//!
//! Size and type rules applied to files before they enter the upload queue.
//! Failures here are structured rejection reasons surfaced to the user, not
//! fatal errors; duplicate and role checks live with the queue itself since
//! they depend on queue state.

use crate::format::{file_extension, format_file_size};

/// Hard cap on a single staged file: 20 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Extensions the backend accepts.
pub const ALLOWED_EXTENSIONS: [&str; 8] =
    ["pdf", "doc", "docx", "txt", "jpg", "jpeg", "png", "gif"];

/// Per-file validation rejections. Display strings are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("File size exceeds 20MB limit ({})", format_file_size(*.size))]
    FileTooLarge { size: u64 },

    #[error(
        "Unsupported file type: {extension}. Supported formats: PDF, DOC, DOCX, TXT, JPG, JPEG, PNG, GIF"
    )]
    UnsupportedType { extension: String },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
}

/// Intake file validator
///
/// Applies the size cap and allowed-extension rules in order; the first
/// failing rule wins.
#[derive(Debug, Clone)]
pub struct IntakeValidator {
    max_file_size: u64,
    allowed_extensions: Vec<String>,
}

impl Default for IntakeValidator {
    fn default() -> Self {
        Self {
            max_file_size: MAX_UPLOAD_BYTES,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl IntakeValidator {
    pub fn new(max_file_size: u64, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
        }
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: u64) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge { size });
        }
        Ok(())
    }

    /// Validate file extension
    pub fn validate_extension(&self, file_name: &str) -> Result<(), ValidationError> {
        let extension = file_extension(file_name);
        if extension.is_empty() {
            return Err(ValidationError::InvalidFilename(file_name.to_string()));
        }

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::UnsupportedType { extension });
        }

        Ok(())
    }

    /// Full per-file check: size first, then extension.
    pub fn validate(&self, file_name: &str, size: u64) -> Result<(), ValidationError> {
        self.validate_file_size(size)?;
        self.validate_extension(file_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_file_within_limits() {
        let v = IntakeValidator::default();
        assert!(v.validate("contract.pdf", 5 * 1024 * 1024).is_ok());
        assert!(v.validate("photo.JPG", 100).is_ok());
    }

    #[test]
    fn rejects_oversized_file_regardless_of_type() {
        let v = IntakeValidator::default();
        let err = v.validate("huge.pdf", 25 * 1024 * 1024).unwrap_err();
        assert!(err.to_string().contains("exceeds 20MB limit"));

        // size rule fires before the type rule
        let err = v.validate("huge.exe", 25 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, ValidationError::FileTooLarge { .. }));
    }

    #[test]
    fn boundary_size_is_accepted() {
        let v = IntakeValidator::default();
        assert!(v.validate_file_size(MAX_UPLOAD_BYTES).is_ok());
        assert!(v.validate_file_size(MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn rejects_disallowed_extension() {
        let v = IntakeValidator::default();
        let err = v.validate("malware.exe", 10).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedType {
                extension: "exe".to_string()
            }
        );
        assert!(err.to_string().contains("Unsupported file type"));
    }

    #[test]
    fn rejects_missing_extension() {
        let v = IntakeValidator::default();
        assert!(matches!(
            v.validate("README", 10),
            Err(ValidationError::InvalidFilename(_))
        ));
    }
}
