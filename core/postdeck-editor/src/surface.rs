//! External editing surfaces.

use crate::config::{CropConfig, EditorConfig};
use postdeck_types::ImageRef;
use std::fmt;
use tracing::debug;

/// Identifies one open surface session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(u64);

impl SessionHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Which surface a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Crop,
    Editor,
}

/// An image editing surface the composer drives but does not own.
///
/// Implementations wrap whatever widget does the pixel work. The composer
/// opens a session with a source image, later hands back the payload the
/// user produced, and always closes the session exactly once.
pub trait EditorSurface {
    fn open_crop(&mut self, source: &ImageRef, config: &CropConfig) -> SessionHandle;

    fn open_editor(&mut self, source: &ImageRef, config: &EditorConfig) -> SessionHandle;

    fn close(&mut self, session: SessionHandle);
}

/// A surface with no UI that only tracks which sessions are open.
///
/// Used by the CLI, where the payload arrives on the command line, and by
/// tests.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    next: u64,
    open: Vec<(SessionHandle, SessionKind, ImageRef)>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn start(&mut self, kind: SessionKind, source: &ImageRef) -> SessionHandle {
        self.next += 1;
        let session = SessionHandle(self.next);
        self.open.push((session, kind, source.clone()));
        debug!(%session, ?kind, %source, "surface session opened");
        session
    }

    /// Sessions currently open, oldest first.
    #[must_use]
    pub fn open_sessions(&self) -> Vec<(SessionHandle, SessionKind)> {
        self.open.iter().map(|(s, k, _)| (*s, *k)).collect()
    }

    /// The source image a session was opened with.
    #[must_use]
    pub fn source_of(&self, session: SessionHandle) -> Option<&ImageRef> {
        self.open
            .iter()
            .find(|(s, _, _)| *s == session)
            .map(|(_, _, src)| src)
    }
}

impl EditorSurface for HeadlessSurface {
    fn open_crop(&mut self, source: &ImageRef, _config: &CropConfig) -> SessionHandle {
        self.start(SessionKind::Crop, source)
    }

    fn open_editor(&mut self, source: &ImageRef, _config: &EditorConfig) -> SessionHandle {
        self.start(SessionKind::Editor, source)
    }

    fn close(&mut self, session: SessionHandle) {
        self.open.retain(|(s, _, _)| *s != session);
        debug!(%session, "surface session closed");
    }
}
