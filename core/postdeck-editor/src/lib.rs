//! Image editing around the composer.
//!
//! Two external surfaces produce slide images: a fixed-ratio crop surface
//! that follows a file pick, and a full editor for slides that already have
//! an image. Both are opaque sessions ([`EditorSurface`]); the composer only
//! sees the payload they return, or a close without one.
//!
//! [`ImageWorkflow`] owns the session bookkeeping and the temporary preview
//! handles ([`ObjectHandles`]) and writes results into a
//! [`PostStore`](postdeck_store::PostStore).

mod config;
mod error;
mod handles;
mod surface;
mod workflow;

pub use config::{CropConfig, EditorConfig, EditorTool};
pub use error::{EditorError, EditorResult};
pub use handles::{HANDLE_PREFIX, ObjectHandles};
pub use surface::{EditorSurface, HeadlessSurface, SessionHandle, SessionKind};
pub use workflow::{EscapeOutcome, ImageWorkflow};
