//! The backend interface.

use crate::error::ApiResult;
use async_trait::async_trait;
use postdeck_types::{ImageRef, Post, PostId, PostStatus, SlideId, Tag};
use serde::{Deserialize, Serialize};

/// Partial update of a post's metadata. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

impl PostPatch {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            status: None,
        }
    }

    #[must_use]
    pub fn status(status: PostStatus) -> Self {
        Self {
            title: None,
            status: Some(status),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }
}

/// Remote post and slide operations.
///
/// Every call may fail; callers decide whether a failure is fatal.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Creates a draft post and returns its id.
    async fn create_post(&self, title: &str) -> ApiResult<PostId>;

    async fn update_post(&self, post_id: PostId, patch: PostPatch) -> ApiResult<()>;

    /// Deletes a post and all of its slides.
    async fn delete_post(&self, post_id: PostId) -> ApiResult<()>;

    /// Creates an empty slide at `position` and returns its id.
    async fn create_slide(&self, post_id: PostId, position: usize) -> ApiResult<SlideId>;

    async fn delete_slide(&self, slide_id: SlideId) -> ApiResult<()>;

    /// Sets the slide order of a post. `ids` must name every slide once.
    async fn reorder_slides(&self, post_id: PostId, ids: &[SlideId]) -> ApiResult<()>;

    /// Uploads an encoded image and returns the reference to store as the
    /// slide's source.
    async fn upload_slide_media(&self, slide_id: SlideId, payload: &[u8]) -> ApiResult<ImageRef>;

    /// Replaces a slide's tags.
    async fn update_slide_tags(&self, slide_id: SlideId, tags: &[Tag]) -> ApiResult<()>;

    /// Fetches a post with its slides and tags.
    async fn fetch_post(&self, post_id: PostId) -> ApiResult<Post>;
}
