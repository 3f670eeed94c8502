//! Identifier types for posts and slides.
//!
//! Slide ids are allocated by the store from a monotonic counter and are
//! never reused, so a plain integer is enough to keep them unique.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a slide within the composing post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(u64);

impl SlideId {
    /// The id given to the default-seeded slide.
    pub const FIRST: SlideId = SlideId(1);

    /// Creates a slide id from a raw integer.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Reserved upper bound. No slide and no id counter may hold it.
    pub const MAX: SlideId = SlideId(u64::MAX);

    /// Returns the id that follows this one, or `None` once the successor
    /// would reach [`SlideId::MAX`].
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) if raw < u64::MAX => Some(Self(raw)),
            _ => None,
        }
    }

    /// Parses a slide id from a string.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlideId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for SlideId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identifier assigned to a post by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Creates a post id from a raw integer.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses a post id from a string.
    pub fn parse(s: &str) -> crate::Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
