//! Temporary object handles for previewing picked files.

use postdeck_types::ImageRef;
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// Prefix of every handle issued by [`ObjectHandles`].
pub const HANDLE_PREFIX: &str = "blob:postdeck/";

/// Registry of live preview handles.
///
/// Each handle must be revoked exactly once. Revoking an unknown or already
/// revoked handle is reported, and handles still live when the registry is
/// dropped are logged as leaks.
#[derive(Debug, Default)]
pub struct ObjectHandles {
    live: HashSet<String>,
}

impl ObjectHandles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh handle.
    pub fn issue(&mut self) -> ImageRef {
        let handle = format!("{HANDLE_PREFIX}{}", Uuid::new_v4());
        self.live.insert(handle.clone());
        debug!(%handle, "object handle issued");
        ImageRef::new(handle)
    }

    /// Releases a handle. Returns false if it was not live.
    pub fn revoke(&mut self, handle: &ImageRef) -> bool {
        if self.live.remove(handle.as_str()) {
            debug!(%handle, "object handle revoked");
            true
        } else {
            warn!(%handle, "revoking a handle that is not live");
            false
        }
    }

    #[must_use]
    pub fn is_live(&self, handle: &ImageRef) -> bool {
        self.live.contains(handle.as_str())
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl Drop for ObjectHandles {
    fn drop(&mut self) {
        if !self.live.is_empty() {
            warn!(leaked = self.live.len(), "object handles dropped without revoke");
        }
    }
}
