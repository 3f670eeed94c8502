//! Tag input parsing.
//!
//! Accepts a full profile URL (`https://www.instagram.com/username/`), an
//! `@handle`, or a bare handle. Anything else that looks like a link is
//! rejected so the user can correct it, rather than being stored as a
//! literal handle.

use crate::error::{IntakeError, IntakeResult};
use postdeck_types::Tag;
use regex::Regex;
use std::sync::LazyLock;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"instagram\.com/([a-zA-Z0-9._]+)/?$").expect("profile URL pattern is valid")
});

static LINK_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://|www\.|[a-z0-9-]+\.[a-z]{2,}").expect("link pattern is valid")
});

/// Outcome of parsing raw tag input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    /// A usable handle.
    Parsed(Tag),
    /// Link-shaped input that is not a profile link.
    InvalidLink,
    /// Nothing left after stripping.
    Empty,
}

/// Parses raw tag input. Rules are tried in order:
///
/// 1. profile URL → link tag
/// 2. any other URL-like text → [`TagInput::InvalidLink`]
/// 3. strip one leading `@` and whitespace → handle, or [`TagInput::Empty`]
pub fn parse_tag(raw: &str) -> TagInput {
    let input = raw.trim();

    if let Some(caps) = PROFILE_URL.captures(input) {
        return TagInput::Parsed(Tag::new(&caps[1], true));
    }

    if LINK_LIKE.is_match(input) {
        return TagInput::InvalidLink;
    }

    let handle = input.strip_prefix('@').unwrap_or(input).trim();
    if handle.is_empty() {
        TagInput::Empty
    } else {
        TagInput::Parsed(Tag::new(handle, false))
    }
}

/// Like [`parse_tag`], but reports a bad link as an error and empty input
/// as `None`.
pub fn parse_tag_strict(raw: &str) -> IntakeResult<Option<Tag>> {
    match parse_tag(raw) {
        TagInput::Parsed(tag) => Ok(Some(tag)),
        TagInput::Empty => Ok(None),
        TagInput::InvalidLink => Err(IntakeError::InvalidLink),
    }
}
