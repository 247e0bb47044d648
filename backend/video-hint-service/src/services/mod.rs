//! Lookup service: validates and normalizes the search phrase before
//! delegating to storage.

use crate::db::VideoStore;
use crate::error::{AppError, Result};
use crate::models::FoundVideo;

/// Look up videos whose caption contains `caption_substring`.
///
/// The match is case-insensitive: the phrase is lowercased here, once,
/// before it reaches storage. Only the strictly empty string is rejected;
/// whitespace-only input goes through as-is. No rows matching is a
/// success, not an error.
pub async fn get_videos_by_caption(
    store: &dyn VideoStore,
    caption_substring: &str,
) -> Result<Vec<FoundVideo>> {
    if caption_substring.is_empty() {
        return Err(AppError::IncorrectCaptionSubstring(
            "passed search phrase is empty".to_string(),
        ));
    }

    let phrase = caption_substring.to_lowercase();
    let videos = store.videos_by_caption(&phrase).await?;

    Ok(videos)
}
