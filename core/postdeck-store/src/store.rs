//! The post/slide store.

use crate::error::{StoreError, StoreResult};
use crate::state::ComposerState;
use postdeck_types::{ImageRef, Post, PostId, PostStatus, Slide, SlideId, Tag, normalize_title};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// What a mutation changed. Delivered to subscribers together with the
/// state as it is after the mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    TitleChanged,
    SlideAdded(SlideId),
    SlideDeleted(SlideId),
    SelectionChanged(Option<SlideId>),
    SlidesReordered,
    TagsChanged(SlideId),
    ImageChanged(SlideId),
    SidebarChanged(bool),
    /// The whole state was replaced (draft restore, fetched post).
    Hydrated,
}

/// Handle returned by [`PostStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StoreChange, &ComposerState)>;

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
}

/// Owner of the composing post.
///
/// Constructed explicitly and passed to whatever needs it; there is no
/// global instance.
pub struct PostStore {
    state: ComposerState,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PostStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl PostStore {
    /// Creates a store seeded with one empty slide.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ComposerState::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a store from an existing snapshot after validating it.
    pub fn from_state(state: ComposerState) -> StoreResult<Self> {
        state.validate()?;
        Ok(Self {
            state,
            ..Self::new()
        })
    }

    /// Creates a store from a post fetched from the backend. The first slide
    /// is selected and the id counter continues after the largest slide id.
    pub fn from_post(post: Post) -> StoreResult<Self> {
        let first = post
            .slides
            .first()
            .map(|s| s.id)
            .ok_or_else(|| StoreError::InvalidState("post has no slides".into()))?;
        let next = post
            .slides
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(first)
            .checked_next()
            .ok_or_else(|| StoreError::InvalidState("slide ids out of range".into()))?;

        Self::from_state(ComposerState {
            post_title: normalize_title(&post.title),
            slides: post.slides,
            selected_slide_id: Some(first),
            next_slide_id: next,
            sidebar_open: true,
        })
    }

    // ── Reads ────────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.state.post_title
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.state.slides
    }

    /// Slide ids in display order.
    #[must_use]
    pub fn slide_ids(&self) -> Vec<SlideId> {
        self.state.slides.iter().map(|s| s.id).collect()
    }

    #[must_use]
    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.state.slides.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn selected_slide_id(&self) -> Option<SlideId> {
        self.state.selected_slide_id
    }

    #[must_use]
    pub fn next_slide_id(&self) -> SlideId {
        self.state.next_slide_id
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.state.sidebar_open
    }

    /// The selected slide, derived from the live state on every call.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.state.current_slide()
    }

    /// True when the selected slide has an image.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.current_slide().is_some_and(Slide::has_image)
    }

    /// True when the delete affordance should be offered.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.state.slides.len() > 1
    }

    /// The composing post in the shape the backend expects.
    #[must_use]
    pub fn to_post(&self, id: Option<PostId>, status: PostStatus) -> Post {
        Post {
            id,
            title: self.state.post_title.clone(),
            slides: self.state.slides.clone(),
            status,
        }
    }

    // ── Subscriptions ────────────────────────────────────────────

    /// Registers a callback run after every mutation that changed state.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &ComposerState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, change: StoreChange) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&change, &self.state);
        }
    }

    // ── Post ─────────────────────────────────────────────────────

    /// Sets the title; an empty string becomes the default title.
    pub fn set_title(&mut self, title: &str) {
        let title = normalize_title(title);
        if title == self.state.post_title {
            return;
        }
        debug!(title = %title, "title updated");
        self.state.post_title = title;
        self.notify(StoreChange::TitleChanged);
    }

    /// Replaces the whole state with a validated snapshot.
    pub fn hydrate(&mut self, state: ComposerState) -> StoreResult<()> {
        state.validate()?;
        debug!(slides = state.slides.len(), "store hydrated");
        self.state = state;
        self.notify(StoreChange::Hydrated);
        Ok(())
    }

    pub fn toggle_sidebar(&mut self) {
        let open = !self.state.sidebar_open;
        self.set_sidebar_open(open);
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        if self.state.sidebar_open == open {
            return;
        }
        self.state.sidebar_open = open;
        self.notify(StoreChange::SidebarChanged(open));
    }

    // ── Slides ───────────────────────────────────────────────────

    /// Appends an empty slide, selects it and returns its id.
    ///
    /// Fails without changing anything once the id counter is exhausted.
    pub fn add_slide(&mut self) -> StoreResult<SlideId> {
        let id = self.state.next_slide_id;
        let next = id
            .checked_next()
            .ok_or(StoreError::SlideIdsExhausted { next: id })?;
        self.state.slides.push(Slide::empty(id));
        self.state.selected_slide_id = Some(id);
        self.state.next_slide_id = next;
        debug!(slide_id = %id, "slide added");
        self.notify(StoreChange::SlideAdded(id));
        Ok(id)
    }

    /// Deletes a slide.
    ///
    /// Returns `Ok(false)` for an unknown id. If the deleted slide was
    /// selected, the slide now at the same index is selected, or the new last
    /// slide when the deleted one was last.
    pub fn delete_slide(&mut self, id: SlideId) -> StoreResult<bool> {
        let Some(index) = self.state.index_of(id) else {
            return Ok(false);
        };
        if self.state.slides.len() == 1 {
            return Err(StoreError::CannotDeleteLastSlide { id });
        }

        self.state.slides.remove(index);
        if self.state.selected_slide_id == Some(id) {
            let next_index = index.min(self.state.slides.len() - 1);
            self.state.selected_slide_id = Some(self.state.slides[next_index].id);
        }
        debug!(slide_id = %id, "slide deleted");
        self.notify(StoreChange::SlideDeleted(id));
        Ok(true)
    }

    /// Selects a slide. Unknown ids are ignored.
    pub fn select_slide(&mut self, id: SlideId) -> bool {
        if self.state.index_of(id).is_none() || self.state.selected_slide_id == Some(id) {
            return false;
        }
        self.state.selected_slide_id = Some(id);
        self.notify(StoreChange::SelectionChanged(Some(id)));
        true
    }

    /// Puts slides in the order given by `ids`.
    ///
    /// Ids that match no slide are skipped, repeated ids keep their first
    /// position, and slides whose id is absent from `ids` are dropped from the
    /// post. Callers are expected to pass a full permutation. An order that
    /// matches nothing is refused, and if the selected slide is dropped the
    /// first remaining slide becomes selected.
    pub fn reorder_slides(&mut self, ids: &[SlideId]) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(ids.len());
        let order: Vec<usize> = ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| self.state.index_of(*id))
            .collect();
        if order.is_empty() {
            return Err(StoreError::EmptyReorder);
        }
        if order.iter().copied().eq(0..self.state.slides.len()) {
            return Ok(());
        }

        let mut taken: Vec<Option<Slide>> =
            std::mem::take(&mut self.state.slides).into_iter().map(Some).collect();
        self.state.slides = order.iter().filter_map(|&i| taken[i].take()).collect();

        let dropped: Vec<SlideId> = taken.into_iter().flatten().map(|s| s.id).collect();
        if !dropped.is_empty() {
            warn!(?dropped, "reorder left slides out of the new order");
        }

        let selection_lost = self
            .state
            .selected_slide_id
            .is_none_or(|id| self.state.index_of(id).is_none());
        if selection_lost {
            self.state.selected_slide_id = self.state.slides.first().map(|s| s.id);
        }

        debug!(order = ?self.slide_ids(), "slides reordered");
        self.notify(StoreChange::SlidesReordered);
        if selection_lost {
            let selected = self.state.selected_slide_id;
            self.notify(StoreChange::SelectionChanged(selected));
        }
        Ok(())
    }

    // ── Selected slide ───────────────────────────────────────────

    fn selected_index(&self) -> Option<usize> {
        self.state.index_of(self.state.selected_slide_id?)
    }

    /// Adds a tag to the selected slide. Returns false when there is no
    /// selection or the handle is already tagged on that slide.
    pub fn add_tag(&mut self, handle: impl Into<String>, is_link: bool) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        let handle = handle.into();
        let slide = &mut self.state.slides[index];
        if slide.has_tag(&handle) {
            return false;
        }
        debug!(slide_id = %slide.id, handle = %handle, is_link, "tag added");
        slide.tags.push(Tag::new(handle, is_link));
        let id = slide.id;
        self.notify(StoreChange::TagsChanged(id));
        true
    }

    /// Removes a tag from the selected slide if present.
    pub fn remove_tag(&mut self, handle: &str) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        let slide = &mut self.state.slides[index];
        let before = slide.tags.len();
        slide.tags.retain(|t| t.handle != handle);
        if slide.tags.len() == before {
            return false;
        }
        let id = slide.id;
        self.notify(StoreChange::TagsChanged(id));
        true
    }

    /// Overwrites the selected slide's image.
    pub fn set_slide_image(&mut self, src: ImageRef) -> bool {
        match self.state.selected_slide_id {
            Some(id) => self.set_image_for(id, src),
            None => false,
        }
    }

    /// Overwrites a specific slide's image, e.g. with the remote URL returned
    /// after an upload. Unknown ids are ignored.
    pub fn set_image_for(&mut self, id: SlideId, src: ImageRef) -> bool {
        let Some(index) = self.state.index_of(id) else {
            return false;
        };
        let slide = &mut self.state.slides[index];
        if slide.src.as_ref() == Some(&src) {
            return false;
        }
        slide.src = Some(src);
        debug!(slide_id = %id, "slide image set");
        self.notify(StoreChange::ImageChanged(id));
        true
    }
}
