//! Error types for the store.

use postdeck_types::SlideId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A mutation or snapshot the store refused because it would break an
/// invariant. The store is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The post must always keep at least one slide.
    #[error("cannot delete slide {id}: it is the last slide")]
    CannotDeleteLastSlide { id: SlideId },

    /// The id counter cannot produce another slide id.
    #[error("slide ids exhausted at {next}")]
    SlideIdsExhausted { next: SlideId },

    /// None of the ids in a reorder matched a current slide.
    #[error("reorder matched no current slide")]
    EmptyReorder,

    /// A snapshot handed to the store is inconsistent.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
