//! The composing post's state and the rules that keep it consistent.
//!
//! - [`ComposerState`]: plain snapshot: title, ordered slides, selection,
//!   id counter and the sidebar flag. This is what gets persisted.
//! - [`PostStore`]: the owner of that snapshot. All mutations go through
//!   it; each one either keeps every invariant or is refused.
//! - [`DragEnd`]: a finished drag in the slide gallery, turned into a new
//!   slide order by [`PostStore::on_drag_end`].
//!
//! # Invariants
//!
//! After every mutation:
//! - there is at least one slide
//! - the selected id names an existing slide
//! - the next id is greater than every id ever handed out
//! - tag handles are unique within a slide
//!
//! The store is single-threaded. Subscribers are called synchronously after
//! a mutation has fully applied and only when something actually changed.

mod error;
mod reorder;
mod state;
mod store;

pub use error::{StoreError, StoreResult};
pub use reorder::{DragEnd, move_id};
pub use state::ComposerState;
pub use store::{PostStore, StoreChange, SubscriptionId};
