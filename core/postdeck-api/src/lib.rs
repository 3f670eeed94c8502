//! Backend operations the composer calls.
//!
//! [`PostApi`] lists the remote operations on posts and slides. The real
//! service is not part of this workspace; [`MockPostApi`] keeps everything in
//! memory with deterministic ids and can be switched offline to exercise
//! failure paths.
//!
//! [`publish_draft`] pushes a local draft through the API and
//! [`fetch_store`] builds a store from a remote post.

mod api;
mod error;
mod flows;
mod mock;

pub use api::{PostApi, PostPatch};
pub use error::{ApiError, ApiResult};
pub use flows::{PublishReport, fetch_store, publish_draft};
pub use mock::{MOCK_MEDIA_HOST, MockPostApi};
