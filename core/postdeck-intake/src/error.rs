//! Error types for input validation.
//!
//! Messages are user-facing copy and are shown verbatim next to the input.

use thiserror::Error;

/// Result type for intake checks.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// A rejected upload or tag input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// File exceeds [`MAX_FILE_BYTES`](crate::MAX_FILE_BYTES).
    #[error("File is too large ({:.1} MB). Maximum is 50 MB.", mebibytes(.size_bytes))]
    FileTooLarge { size_bytes: u64 },

    /// MIME type outside [`ALLOWED_MIME_TYPES`](crate::ALLOWED_MIME_TYPES).
    #[error(
        "Unsupported file type \"{mime_type}\". Please select a JPEG, PNG, GIF, SVG, WebP, or HEIC image."
    )]
    UnsupportedType { mime_type: String },

    /// Input looked like a link but not like a profile link.
    #[error("Invalid Instagram profile link")]
    InvalidLink,
}

fn mebibytes(bytes: &u64) -> f64 {
    *bytes as f64 / 1024.0 / 1024.0
}
