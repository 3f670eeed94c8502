//! Error types for image editing.

use postdeck_intake::IntakeError;
use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The picked file failed validation; shown to the user as is.
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("no crop session is open")]
    CropNotOpen,

    #[error("no editor session is open")]
    EditorNotOpen,

    /// The full editor needs an image on the selected slide.
    #[error("selected slide has no image to edit")]
    NoImage,
}
