//! Post, slide and tag records.
//!
//! Field names serialize in camelCase so the same shapes can be written to
//! the local draft slot and exchanged with the backend unchanged.

use crate::{PostId, SlideId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title used whenever the user leaves the post title blank.
pub const DEFAULT_TITLE: &str = "Untitled post";

/// Returns `title` unchanged, or [`DEFAULT_TITLE`] when it is empty.
///
/// No trimming happens here; callers trim their own input first.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// A tagged account on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Handle without the leading `@`.
    pub handle: String,
    /// True when the tag was added from a profile link.
    pub is_link: bool,
}

impl Tag {
    /// Creates a tag.
    pub fn new(handle: impl Into<String>, is_link: bool) -> Self {
        Self {
            handle: handle.into(),
            is_link,
        }
    }

    /// Profile URL for tags that came from a link.
    #[must_use]
    pub fn profile_url(&self) -> Option<String> {
        self.is_link
            .then(|| format!("https://www.instagram.com/{}/", self.handle))
    }
}

/// Opaque reference to an encoded image: a data URL, a temporary object
/// handle or a remote URL. Never decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Prefix of temporary object handles issued for previews.
    pub const OBJECT_HANDLE_PREFIX: &'static str = "blob:";

    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for temporary object handles, which must be released by whoever
    /// created them.
    #[must_use]
    pub fn is_object_handle(&self) -> bool {
        self.0.starts_with(Self::OBJECT_HANDLE_PREFIX)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One image plus its tagged handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    /// `None` until an image is committed.
    #[serde(default)]
    pub src: Option<ImageRef>,
    /// Insertion order is preserved.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Slide {
    /// Creates an empty slide with no image and no tags.
    #[must_use]
    pub fn empty(id: SlideId) -> Self {
        Self {
            id,
            src: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.src.is_some()
    }

    /// Case-sensitive exact match on the handle.
    #[must_use]
    pub fn has_tag(&self, handle: &str) -> bool {
        self.tags.iter().any(|t| t.handle == handle)
    }
}

/// Publication state of a post on the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
}

impl PostStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "scheduled" => Ok(PostStatus::Scheduled),
            "published" => Ok(PostStatus::Published),
            other => Err(crate::Error::InvalidStatus(other.to_string())),
        }
    }
}

/// A post as known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<PostId>,
    pub title: String,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub status: PostStatus,
}

impl Post {
    /// A fresh draft with a single empty slide.
    #[must_use]
    pub fn new_draft(title: &str) -> Self {
        Self {
            id: None,
            title: normalize_title(title),
            slides: vec![Slide::empty(SlideId::FIRST)],
            status: PostStatus::Draft,
        }
    }
}
