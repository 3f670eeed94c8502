//! Composer configuration, read from `postdeck.toml`.

use postdeck_draft::{DEFAULT_DRAFT_KEY, DraftStore, FileSlot};
use postdeck_layout::ContainerMetrics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Config file looked up when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "postdeck.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Directory holding the draft file.
    pub draft_dir: PathBuf,
    /// Draft file name, without extension.
    pub draft_key: String,
    /// Save after every change. When off, the draft is written once per
    /// command.
    pub autosave: bool,
    /// Container size assumed by `layout` when no flags are given.
    pub container: ContainerConfig,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            draft_dir: PathBuf::from(".postdeck"),
            draft_key: DEFAULT_DRAFT_KEY.to_string(),
            autosave: true,
            container: ContainerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 900.0,
            padding_x: 24.0,
        }
    }
}

impl ContainerConfig {
    #[must_use]
    pub fn metrics(&self) -> ContainerMetrics {
        ContainerMetrics::new(self.width, self.height, self.padding_x)
    }
}

impl ComposerConfig {
    /// Loads config from `path`.
    /// Falls back to defaults when the file is missing or unusable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Draft store backed by `<draft_dir>/<draft_key>.json`.
    #[must_use]
    pub fn draft_store(&self) -> DraftStore {
        DraftStore::new(Arc::new(FileSlot::new(&self.draft_dir, &self.draft_key)))
    }
}
