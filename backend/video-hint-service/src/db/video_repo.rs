use crate::models::FoundVideo;
use async_trait::async_trait;
use sqlx::PgPool;

use super::VideoStore;

/// Postgres-backed video store.
///
/// Holds the process-wide pool created at startup; cloning the pool is
/// cheap and checkout/return under concurrent requests is sqlx's concern.
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn videos_by_caption(&self, phrase: &str) -> Result<Vec<FoundVideo>, sqlx::Error> {
        let videos = sqlx::query_as::<_, FoundVideo>(
            r#"
            SELECT caption, uri, location
            FROM videos
            WHERE caption LIKE '%' || $1 || '%'
            "#,
        )
        .bind(phrase)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
