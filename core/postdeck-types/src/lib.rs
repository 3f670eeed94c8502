//! Core type definitions for postdeck.
//!
//! This crate defines the data model shared by every other crate:
//! - Slide and post identifiers (monotonic integers)
//! - Tags, opaque image references and slides
//! - The post record handed to and received from the backend
//!
//! Nothing here enforces collection-level invariants (non-empty slide list,
//! selection consistency); those belong to `postdeck-store`.

mod ids;
mod post;

pub use ids::{PostId, SlideId};
pub use post::{
    DEFAULT_TITLE, ImageRef, Post, PostStatus, Slide, Tag, normalize_title,
};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("invalid post status: {0}")]
    InvalidStatus(String),
}
