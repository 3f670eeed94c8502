//! The on-disk record format.
//!
//! ```json
//! { "postTitle": "...", "slides": [{ "id": 1, "src": null, "tags": [] }],
//!   "selectedSlideId": 1, "nextSlideId": 2, "sidebarOpen": true }
//! ```
//!
//! Only `slides` is required. Every other field falls back to a default
//! when missing, and stale values are repaired rather than rejected.

use crate::error::{DraftError, DraftResult};
use postdeck_store::ComposerState;
use postdeck_types::{Slide, SlideId, normalize_title};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::warn;

/// Loose view of the record; anything may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftRecord {
    post_title: Option<String>,
    slides: Option<Vec<Slide>>,
    selected_slide_id: Option<SlideId>,
    next_slide_id: Option<SlideId>,
    sidebar_open: Option<bool>,
}

/// Serializes a snapshot into the record format.
pub fn encode_state(state: &ComposerState) -> DraftResult<String> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a stored record into a valid snapshot.
///
/// Fails when the JSON is malformed, `slides` is missing or empty, or two
/// slides share an id. Repairs applied on the way:
/// - missing/blank title → default title
/// - missing or dangling selection → first slide
/// - missing or stale id counter → one past the largest slide id
/// - repeated tag handle on a slide → first occurrence kept
pub fn decode_state(raw: &str) -> DraftResult<ComposerState> {
    let record: Option<DraftRecord> = serde_json::from_str(raw)?;
    let record = record.ok_or_else(|| DraftError::Corrupt("record is null".into()))?;

    let mut slides = record
        .slides
        .ok_or_else(|| DraftError::Corrupt("slides missing".into()))?;
    let first = slides
        .first()
        .map(|s| s.id)
        .ok_or_else(|| DraftError::Corrupt("slides empty".into()))?;

    let mut ids = HashSet::with_capacity(slides.len());
    for slide in &mut slides {
        if !ids.insert(slide.id) {
            return Err(DraftError::Corrupt(format!("duplicate slide id {}", slide.id)));
        }
        dedupe_tags(slide);
    }

    let selected = match record.selected_slide_id {
        Some(id) if ids.contains(&id) => id,
        Some(id) => {
            warn!(slide_id = %id, "draft selection points at a missing slide, selecting first");
            first
        }
        None => first,
    };

    let max_id = ids.iter().copied().max().unwrap_or(first);
    let fallback_next = SlideId::new(slides.len() as u64 + 1);
    let mut next = record.next_slide_id.unwrap_or(fallback_next);
    if next <= max_id {
        if record.next_slide_id.is_some() {
            warn!(next = %next, max = %max_id, "draft id counter is stale, raising it");
        }
        next = max_id
            .checked_next()
            .ok_or_else(|| DraftError::Corrupt(format!("slide id {max_id} out of range")))?;
    }

    let state = ComposerState {
        post_title: normalize_title(record.post_title.as_deref().unwrap_or_default()),
        slides,
        selected_slide_id: Some(selected),
        next_slide_id: next,
        sidebar_open: record.sidebar_open.unwrap_or(true),
    };
    state
        .validate()
        .map_err(|e| DraftError::Corrupt(e.to_string()))?;
    Ok(state)
}

fn dedupe_tags(slide: &mut Slide) {
    let before = slide.tags.len();
    let mut seen = HashSet::with_capacity(before);
    slide.tags.retain(|t| seen.insert(t.handle.clone()));
    if slide.tags.len() != before {
        warn!(slide_id = %slide.id, dropped = before - slide.tags.len(), "draft had repeated tags");
    }
}
