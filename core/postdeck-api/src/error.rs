//! Error types for backend calls.

use postdeck_store::StoreError;
use postdeck_types::{PostId, SlideId};
use thiserror::Error;

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("post {0} not found")]
    PostNotFound(PostId),

    #[error("slide {0} not found")]
    SlideNotFound(SlideId),

    /// A reorder that is not a permutation of the post's slides.
    #[error("invalid slide order for post {post_id}: {reason}")]
    InvalidOrder { post_id: PostId, reason: String },

    /// A fetched post could not be loaded into a store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
