use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The projection of a video row returned to callers.
///
/// Built only by the storage layer from a `videos` row; the underlying
/// table carries more columns (user id, resolution, description,
/// timestamps) that this service never reads or mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FoundVideo {
    pub caption: String,
    pub uri: String,
    pub location: String,
}
