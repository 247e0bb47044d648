//! HTTP handlers for the video hint service

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::db::VideoStore;
use crate::error::Result;
use crate::services;

/// Look up videos by a caption substring taken from the URL path.
///
/// The path segment is a tail match, so `GET /videos/` reaches this
/// handler with an empty phrase and the service rejects it with 400.
pub async fn get_videos_by_caption(
    store: web::Data<dyn VideoStore>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let caption_substring = path.into_inner();

    tracing::debug!(
        caption_substring = %caption_substring,
        "looking up videos by caption"
    );

    let videos = services::get_videos_by_caption(store.get_ref(), &caption_substring).await?;

    // Serialize explicitly so an encoding failure still maps to a bodyless
    // 500 instead of a half-written response.
    let body = serde_json::to_string(&videos)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// Configure routes for the video hint service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/videos")
            .route("/{caption_substring:.*}", web::get().to(get_videos_by_caption)),
    );
}
