use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use video_hint_service::db::VideoStore;
use video_hint_service::handlers::configure_routes;
use video_hint_service::models::FoundVideo;

/// Stub store recording every phrase it is queried with.
struct StubStore {
    videos: Vec<FoundVideo>,
    fail: bool,
    seen_phrases: Mutex<Vec<String>>,
}

impl StubStore {
    fn returning(videos: Vec<FoundVideo>) -> Self {
        Self {
            videos,
            fail: false,
            seen_phrases: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            videos: Vec::new(),
            fail: true,
            seen_phrases: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl VideoStore for StubStore {
    async fn videos_by_caption(&self, phrase: &str) -> Result<Vec<FoundVideo>, sqlx::Error> {
        self.seen_phrases.lock().unwrap().push(phrase.to_string());
        if self.fail {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(self.videos.clone())
    }

    async fn close(&self) {}
}

fn sample_videos() -> Vec<FoundVideo> {
    vec![
        FoundVideo {
            caption: "repudiandae voluptas est".to_string(),
            uri: "https://videos.example.com/repudiandae".to_string(),
            location: "/videos/repudiandae".to_string(),
        },
        FoundVideo {
            caption: "aut repudiandae minima".to_string(),
            uri: "https://videos.example.com/minima".to_string(),
            location: "/videos/minima".to_string(),
        },
    ]
}

async fn call(store: Arc<StubStore>, uri: &str) -> actix_web::dev::ServiceResponse {
    let store_data: Arc<dyn VideoStore> = store;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::from(store_data))
            .configure(configure_routes),
    )
    .await;

    test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
}

#[actix_web::test]
async fn get_videos_returns_matching_records() {
    let store = Arc::new(StubStore::returning(vec![sample_videos()[0].clone()]));
    let resp = call(store.clone(), "/videos/repudiandae").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );

    let videos: Vec<FoundVideo> = test::read_body_json(resp).await;
    assert_eq!(videos.len(), 1);
    assert!(videos[0].caption.contains("repudiandae"));

    assert_eq!(*store.seen_phrases.lock().unwrap(), vec!["repudiandae"]);
}

#[actix_web::test]
async fn empty_caption_substring_returns_400_with_empty_body() {
    let store = Arc::new(StubStore::returning(sample_videos()));
    let resp = call(store.clone(), "/videos/").await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    // Validation rejects the request before storage is consulted.
    assert!(store.seen_phrases.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn storage_error_returns_500_with_empty_body() {
    let store = Arc::new(StubStore::failing());
    let resp = call(store, "/videos/alidd").await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn mixed_case_request_queries_storage_with_lowercased_phrase() {
    let store = Arc::new(StubStore::returning(Vec::new()));
    let resp = call(store.clone(), "/videos/RepuDIandae").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(*store.seen_phrases.lock().unwrap(), vec!["repudiandae"]);
}

#[actix_web::test]
async fn repeated_request_yields_identical_results() {
    let store = Arc::new(StubStore::returning(sample_videos()));

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let resp = call(store.clone(), "/videos/repudiandae").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let mut videos: Vec<FoundVideo> = test::read_body_json(resp).await;
        // Row order is not guaranteed by the store; compare sorted.
        videos.sort_by(|a, b| a.caption.cmp(&b.caption));
        bodies.push(videos);
    }

    assert_eq!(bodies[0], bodies[1]);
}
