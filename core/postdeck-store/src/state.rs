//! The persisted shape of the composer.

use crate::error::{StoreError, StoreResult};
use postdeck_types::{DEFAULT_TITLE, Slide, SlideId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Snapshot of everything the composer owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerState {
    pub post_title: String,
    pub slides: Vec<Slide>,
    pub selected_slide_id: Option<SlideId>,
    pub next_slide_id: SlideId,
    pub sidebar_open: bool,
}

impl Default for ComposerState {
    /// One empty slide, selected, titled [`DEFAULT_TITLE`].
    fn default() -> Self {
        Self {
            post_title: DEFAULT_TITLE.to_string(),
            slides: vec![Slide::empty(SlideId::FIRST)],
            selected_slide_id: Some(SlideId::FIRST),
            next_slide_id: SlideId::new(2),
            sidebar_open: true,
        }
    }
}

impl ComposerState {
    /// The slide whose id equals the selection, if any.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        let id = self.selected_slide_id?;
        self.slides.iter().find(|s| s.id == id)
    }

    /// Position of a slide in display order.
    #[must_use]
    pub fn index_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Largest slide id present, if any.
    #[must_use]
    pub fn max_slide_id(&self) -> Option<SlideId> {
        self.slides.iter().map(|s| s.id).max()
    }

    /// Checks every store invariant and reports the first one broken.
    pub fn validate(&self) -> StoreResult<()> {
        if self.slides.is_empty() {
            return Err(StoreError::InvalidState("post has no slides".into()));
        }

        let mut ids = HashSet::with_capacity(self.slides.len());
        for slide in &self.slides {
            if !ids.insert(slide.id) {
                return Err(StoreError::InvalidState(format!(
                    "duplicate slide id {}",
                    slide.id
                )));
            }

            let mut handles = HashSet::with_capacity(slide.tags.len());
            for tag in &slide.tags {
                if !handles.insert(tag.handle.as_str()) {
                    return Err(StoreError::InvalidState(format!(
                        "duplicate tag @{} on slide {}",
                        tag.handle, slide.id
                    )));
                }
            }
        }

        match self.selected_slide_id {
            Some(id) if ids.contains(&id) => {}
            Some(id) => {
                return Err(StoreError::InvalidState(format!(
                    "selected slide {id} does not exist"
                )));
            }
            None => return Err(StoreError::InvalidState("no slide selected".into())),
        }

        if self.next_slide_id >= SlideId::MAX {
            return Err(StoreError::InvalidState(format!(
                "next slide id {} is out of range",
                self.next_slide_id
            )));
        }

        if let Some(max) = self.max_slide_id() {
            if self.next_slide_id <= max {
                return Err(StoreError::InvalidState(format!(
                    "next slide id {} is not above existing id {max}",
                    self.next_slide_id
                )));
            }
        }

        if self.post_title.is_empty() {
            return Err(StoreError::InvalidState("post title is empty".into()));
        }

        Ok(())
    }
}
