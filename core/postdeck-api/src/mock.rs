//! In-memory backend.

use crate::api::{PostApi, PostPatch};
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use postdeck_types::{ImageRef, Post, PostId, PostStatus, Slide, SlideId, Tag, normalize_title};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, RwLockWriteGuard};
use tracing::debug;

/// Host used in media URLs returned by [`MockPostApi`].
pub const MOCK_MEDIA_HOST: &str = "https://media.postdeck.test";

#[derive(Debug, Default)]
struct MockState {
    last_post: u64,
    last_slide: u64,
    posts: BTreeMap<PostId, Post>,
    slide_owner: HashMap<SlideId, PostId>,
    uploads: u64,
    calls: Vec<&'static str>,
}

impl MockState {
    fn post_mut(&mut self, post_id: PostId) -> ApiResult<&mut Post> {
        self.posts
            .get_mut(&post_id)
            .ok_or(ApiError::PostNotFound(post_id))
    }

    fn slide_mut(&mut self, slide_id: SlideId) -> ApiResult<&mut Slide> {
        let owner = *self
            .slide_owner
            .get(&slide_id)
            .ok_or(ApiError::SlideNotFound(slide_id))?;
        self.post_mut(owner)?
            .slides
            .iter_mut()
            .find(|s| s.id == slide_id)
            .ok_or(ApiError::SlideNotFound(slide_id))
    }
}

/// A [`PostApi`] that keeps posts in memory.
///
/// Post and slide ids count up from 1 and media URLs are derived from the
/// slide id, so results are reproducible across runs.
#[derive(Debug, Default)]
pub struct MockPostApi {
    state: RwLock<MockState>,
    offline: AtomicBool,
}

impl MockPostApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every call fails with [`ApiError::Network`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    /// Names of the operations that reached the backend, in call order.
    pub async fn calls(&self) -> Vec<&'static str> {
        self.state.read().await.calls.clone()
    }

    /// Number of stored posts.
    pub async fn post_count(&self) -> usize {
        self.state.read().await.posts.len()
    }

    async fn begin(&self, op: &'static str) -> ApiResult<RwLockWriteGuard<'_, MockState>> {
        if self.is_offline() {
            debug!(op, "mock api offline");
            return Err(ApiError::Network(format!("{op}: backend unreachable")));
        }
        let mut state = self.state.write().await;
        state.calls.push(op);
        Ok(state)
    }
}

#[async_trait]
impl PostApi for MockPostApi {
    async fn create_post(&self, title: &str) -> ApiResult<PostId> {
        let mut state = self.begin("create_post").await?;
        state.last_post += 1;
        let id = PostId::new(state.last_post);

        let post = Post {
            id: Some(id),
            title: normalize_title(title),
            slides: Vec::new(),
            status: PostStatus::Draft,
        };
        state.posts.insert(id, post);
        debug!(post_id = %id, "mock post created");
        Ok(id)
    }

    async fn update_post(&self, post_id: PostId, patch: PostPatch) -> ApiResult<()> {
        let mut state = self.begin("update_post").await?;
        let post = state.post_mut(post_id)?;
        if let Some(title) = patch.title {
            post.title = normalize_title(&title);
        }
        if let Some(status) = patch.status {
            post.status = status;
        }
        Ok(())
    }

    async fn delete_post(&self, post_id: PostId) -> ApiResult<()> {
        let mut state = self.begin("delete_post").await?;
        let post = state
            .posts
            .remove(&post_id)
            .ok_or(ApiError::PostNotFound(post_id))?;
        for slide in &post.slides {
            state.slide_owner.remove(&slide.id);
        }
        Ok(())
    }

    async fn create_slide(&self, post_id: PostId, position: usize) -> ApiResult<SlideId> {
        let mut state = self.begin("create_slide").await?;
        let id = SlideId::new(state.last_slide + 1);

        let post = state.post_mut(post_id)?;
        let at = position.min(post.slides.len());
        post.slides.insert(at, Slide::empty(id));

        state.last_slide = id.get();
        state.slide_owner.insert(id, post_id);
        Ok(id)
    }

    async fn delete_slide(&self, slide_id: SlideId) -> ApiResult<()> {
        let mut state = self.begin("delete_slide").await?;
        let owner = state
            .slide_owner
            .remove(&slide_id)
            .ok_or(ApiError::SlideNotFound(slide_id))?;
        state.post_mut(owner)?.slides.retain(|s| s.id != slide_id);
        Ok(())
    }

    async fn reorder_slides(&self, post_id: PostId, ids: &[SlideId]) -> ApiResult<()> {
        let mut state = self.begin("reorder_slides").await?;
        let post = state.post_mut(post_id)?;

        let requested: HashSet<SlideId> = ids.iter().copied().collect();
        let current: HashSet<SlideId> = post.slides.iter().map(|s| s.id).collect();
        if requested.len() != ids.len() || requested != current {
            return Err(ApiError::InvalidOrder {
                post_id,
                reason: format!("expected a permutation of {} slides", current.len()),
            });
        }

        let mut by_id: HashMap<SlideId, Slide> =
            std::mem::take(&mut post.slides).into_iter().map(|s| (s.id, s)).collect();
        post.slides = ids.iter().filter_map(|id| by_id.remove(id)).collect();
        Ok(())
    }

    async fn upload_slide_media(&self, slide_id: SlideId, payload: &[u8]) -> ApiResult<ImageRef> {
        let mut state = self.begin("upload_slide_media").await?;
        state.slide_mut(slide_id)?;
        state.uploads += 1;
        let url = ImageRef::new(format!(
            "{MOCK_MEDIA_HOST}/slides/{slide_id}/{}.jpg",
            state.uploads
        ));
        state.slide_mut(slide_id)?.src = Some(url.clone());
        debug!(slide_id = %slide_id, bytes = payload.len(), %url, "mock media stored");
        Ok(url)
    }

    async fn update_slide_tags(&self, slide_id: SlideId, tags: &[Tag]) -> ApiResult<()> {
        let mut state = self.begin("update_slide_tags").await?;
        state.slide_mut(slide_id)?.tags = tags.to_vec();
        Ok(())
    }

    async fn fetch_post(&self, post_id: PostId) -> ApiResult<Post> {
        let state = self.begin("fetch_post").await?;
        state
            .posts
            .get(&post_id)
            .cloned()
            .ok_or(ApiError::PostNotFound(post_id))
    }
}
