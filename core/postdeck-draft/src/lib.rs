//! Local draft persistence.
//!
//! The composer's state is kept in a single JSON record under one key of a
//! durable key-value slot. It is read once at startup and written after
//! every change.
//!
//! # Architecture
//!
//! - [`DraftSlot`]: where the record lives ([`FileSlot`] on disk,
//!   [`MemorySlot`] in process)
//! - [`encode_state`] / [`decode_state`]: the record format, with repair of
//!   fields that are missing or stale and rejection of anything unusable
//! - [`DraftStore`]: load/save/discard policy on top of a slot, plus an
//!   autosave subscription for a [`PostStore`](postdeck_store::PostStore)
//!
//! Local durability is advisory: write failures are logged and swallowed,
//! and a corrupt record is purged and replaced by defaults.

mod adapter;
mod error;
mod record;
mod slot;

pub use adapter::DraftStore;
pub use error::{DraftError, DraftResult};
pub use record::{decode_state, encode_state};
pub use slot::{DEFAULT_DRAFT_KEY, DraftSlot, FileSlot, MemorySlot};
