//! Key-value slots holding the serialized draft.

use crate::error::DraftResult;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Key the draft is stored under unless configured otherwise.
pub const DEFAULT_DRAFT_KEY: &str = "postdeck-draft";

/// A single durable slot holding one serialized record.
pub trait DraftSlot: Send + Sync {
    /// Returns the stored record, or `None` if the slot is empty.
    fn read(&self) -> DraftResult<Option<String>>;

    /// Replaces the stored record.
    fn write(&self, contents: &str) -> DraftResult<()>;

    /// Empties the slot. Clearing an empty slot succeeds.
    fn clear(&self) -> DraftResult<()>;
}

/// Slot kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }
}

impl DraftSlot for MemorySlot {
    fn read(&self) -> DraftResult<Option<String>> {
        Ok(self
            .contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn write(&self, contents: &str) -> DraftResult<()> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(contents.to_string());
        Ok(())
    }

    fn clear(&self) -> DraftResult<()> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Slot stored as `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file that is then renamed over the record,
/// so a crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Full path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl DraftSlot for FileSlot {
    fn read(&self) -> DraftResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> DraftResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, contents)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> DraftResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
