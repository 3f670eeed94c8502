//! Load/save policy over a draft slot.

use crate::error::DraftResult;
use crate::record::{decode_state, encode_state};
use crate::slot::{DraftSlot, MemorySlot};
use postdeck_store::{ComposerState, PostStore, SubscriptionId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reads and writes the composer's draft.
#[derive(Clone)]
pub struct DraftStore {
    slot: Arc<dyn DraftSlot>,
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore").finish_non_exhaustive()
    }
}

impl DraftStore {
    pub fn new(slot: Arc<dyn DraftSlot>) -> Self {
        Self { slot }
    }

    /// Draft store backed by a fresh [`MemorySlot`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySlot::new()))
    }

    #[must_use]
    pub fn slot(&self) -> &Arc<dyn DraftSlot> {
        &self.slot
    }

    /// Reads the saved draft.
    ///
    /// Returns `None` when there is no usable draft. A record that exists
    /// but cannot be used is purged from the slot.
    #[must_use]
    pub fn load(&self) -> Option<ComposerState> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved draft");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "draft could not be read, using defaults");
                return None;
            }
        };

        match decode_state(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(error = %e, "discarding unusable draft");
                if let Err(e) = self.slot.clear() {
                    warn!(error = %e, "unusable draft could not be purged");
                }
                None
            }
        }
    }

    /// Loads the saved draft into `store`. Returns true if one was restored.
    pub fn restore_into(&self, store: &mut PostStore) -> bool {
        let Some(state) = self.load() else {
            return false;
        };
        match store.hydrate(state) {
            Ok(()) => {
                info!(slides = store.slides().len(), "draft restored");
                true
            }
            Err(e) => {
                warn!(error = %e, "draft rejected by store");
                false
            }
        }
    }

    /// Writes a snapshot, propagating failures.
    pub fn try_save(&self, state: &ComposerState) -> DraftResult<()> {
        let encoded = encode_state(state)?;
        self.slot.write(&encoded)
    }

    /// Writes a snapshot. Failures are logged and otherwise ignored; the
    /// in-memory state stays authoritative.
    pub fn save(&self, state: &ComposerState) {
        if let Err(e) = self.try_save(state) {
            warn!(error = %e, "draft could not be saved");
        }
    }

    /// Removes the saved draft.
    pub fn discard(&self) -> DraftResult<()> {
        self.slot.clear()?;
        info!("draft discarded");
        Ok(())
    }

    /// Saves the store's state after every change from now on.
    pub fn attach(&self, store: &mut PostStore) -> SubscriptionId {
        let drafts = self.clone();
        store.subscribe(move |change, state| {
            debug!(?change, "autosaving draft");
            drafts.save(state);
        })
    }
}
