//! Drag-and-drop reordering of the slide gallery.

use crate::error::StoreResult;
use crate::store::PostStore;
use postdeck_types::SlideId;

/// A finished drag: the slide that was dragged and the slide it was dropped
/// on, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active: SlideId,
    pub over: Option<SlideId>,
}

impl DragEnd {
    pub fn new(active: SlideId, over: Option<SlideId>) -> Self {
        Self { active, over }
    }
}

/// Moves `active` to the index currently held by `over`, keeping every other
/// id in its relative order. Returns `None` when either id is missing.
#[must_use]
pub fn move_id(ids: &[SlideId], active: SlideId, over: SlideId) -> Option<Vec<SlideId>> {
    let from = ids.iter().position(|id| *id == active)?;
    let to = ids.iter().position(|id| *id == over)?;

    let mut moved = ids.to_vec();
    let id = moved.remove(from);
    moved.insert(to, id);
    Some(moved)
}

impl PostStore {
    /// Applies a finished drag. Dropping nowhere, onto the dragged slide
    /// itself, or with an id the store does not know is a no-op.
    ///
    /// Returns true if the order changed.
    pub fn on_drag_end(&mut self, event: DragEnd) -> StoreResult<bool> {
        let Some(over) = event.over else {
            return Ok(false);
        };
        if over == event.active {
            return Ok(false);
        }
        let Some(order) = move_id(&self.slide_ids(), event.active, over) else {
            return Ok(false);
        };
        self.reorder_slides(&order)?;
        Ok(true)
    }
}
