//! Multi-call flows between the local store and the backend.

use crate::api::{PostApi, PostPatch};
use crate::error::ApiResult;
use postdeck_store::{ComposerState, PostStore};
use postdeck_types::{ImageRef, PostId, PostStatus, SlideId};
use tracing::{debug, info};

/// Outcome of [`publish_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub post_id: PostId,
    /// `(local, remote)` slide ids in display order.
    pub slides: Vec<(SlideId, SlideId)>,
    /// Uploaded media keyed by local slide id.
    pub media: Vec<(SlideId, ImageRef)>,
}

impl PublishReport {
    /// Remote id assigned to a local slide.
    #[must_use]
    pub fn remote_id(&self, local: SlideId) -> Option<SlideId> {
        self.slides
            .iter()
            .find(|(l, _)| *l == local)
            .map(|(_, r)| *r)
    }

    /// Replaces local image payloads with their uploaded URLs. Slides that
    /// were deleted since publishing are skipped. Returns how many slides
    /// changed.
    pub fn apply_media(&self, store: &mut PostStore) -> usize {
        self.media
            .iter()
            .filter(|(local, url)| store.set_image_for(*local, url.clone()))
            .count()
    }
}

/// Pushes the draft to the backend as a draft post.
///
/// Creates the post unless `existing` names one, in which case its remote
/// slides are replaced. Each slide is created at its position, its image
/// uploaded and its tags pushed, then the final order is confirmed. The
/// first failing call aborts the flow; the local store is never touched.
pub async fn publish_draft<A>(
    api: &A,
    state: &ComposerState,
    existing: Option<PostId>,
) -> ApiResult<PublishReport>
where
    A: PostApi + ?Sized,
{
    let post_id = match existing {
        Some(post_id) => {
            let remote = api.fetch_post(post_id).await?;
            for slide in &remote.slides {
                api.delete_slide(slide.id).await?;
            }
            debug!(post_id = %post_id, removed = remote.slides.len(), "remote slides cleared");
            post_id
        }
        None => api.create_post(&state.post_title).await?,
    };

    api.update_post(
        post_id,
        PostPatch {
            title: Some(state.post_title.clone()),
            status: Some(PostStatus::Draft),
        },
    )
    .await?;

    let mut slides = Vec::with_capacity(state.slides.len());
    let mut media = Vec::new();
    for (position, slide) in state.slides.iter().enumerate() {
        let remote = api.create_slide(post_id, position).await?;
        if let Some(src) = &slide.src {
            let url = api.upload_slide_media(remote, src.as_str().as_bytes()).await?;
            media.push((slide.id, url));
        }
        if !slide.tags.is_empty() {
            api.update_slide_tags(remote, &slide.tags).await?;
        }
        slides.push((slide.id, remote));
    }

    let order: Vec<SlideId> = slides.iter().map(|(_, remote)| *remote).collect();
    api.reorder_slides(post_id, &order).await?;

    info!(post_id = %post_id, slides = slides.len(), uploads = media.len(), "draft published");
    Ok(PublishReport {
        post_id,
        slides,
        media,
    })
}

/// Loads a remote post into a new store.
pub async fn fetch_store<A>(api: &A, post_id: PostId) -> ApiResult<PostStore>
where
    A: PostApi + ?Sized,
{
    let post = api.fetch_post(post_id).await?;
    debug!(post_id = %post_id, slides = post.slides.len(), "post fetched");
    Ok(PostStore::from_post(post)?)
}
