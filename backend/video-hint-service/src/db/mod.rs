//! Storage layer for video lookups

mod video_repo;

pub use video_repo::PgVideoStore;

use crate::models::FoundVideo;
use async_trait::async_trait;

/// The storage capability the lookup service depends on.
///
/// Wired once at startup (no per-request capability checks); tests swap
/// in mocks or stubs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Fetch all videos whose caption contains `phrase`.
    ///
    /// `phrase` must already be lowercased by the caller; the match is an
    /// unanchored `LIKE` against whatever the database stores.
    async fn videos_by_caption(&self, phrase: &str) -> Result<Vec<FoundVideo>, sqlx::Error>;

    /// Release the underlying pool. Safe to call more than once.
    async fn close(&self);
}
