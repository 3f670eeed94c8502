//! Input validation at the edge of the composer.
//!
//! Two pure checks run before anything reaches the store:
//! - [`validate_file`]: size and MIME type of a picked upload
//! - [`parse_tag`]: turns raw tag input into a normalized [`Tag`](postdeck_types::Tag)
//!
//! Failures here are reported to the user and never mutate state.

mod error;
mod file;
mod tag;

pub use error::{IntakeError, IntakeResult};
pub use file::{ALLOWED_MIME_TYPES, FileCandidate, MAX_FILE_BYTES, validate_file};
pub use tag::{TagInput, parse_tag, parse_tag_strict};
