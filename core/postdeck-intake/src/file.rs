//! Upload candidate validation.

use crate::error::{IntakeError, IntakeResult};

/// Largest accepted upload, 50 MiB.
pub const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// MIME types the crop pipeline accepts.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/svg+xml",
    "image/webp",
    "image/heic",
    "image/heif",
];

/// The metadata of a picked file; the bytes themselves are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Checks size first, then type. The first failure wins.
pub fn validate_file(file: &FileCandidate) -> IntakeResult<()> {
    if file.size_bytes > MAX_FILE_BYTES {
        return Err(IntakeError::FileTooLarge {
            size_bytes: file.size_bytes,
        });
    }
    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(IntakeError::UnsupportedType {
            mime_type: file.mime_type.clone(),
        });
    }
    Ok(())
}
