use actix_web::{web, App, HttpServer};
use db_pool::{create_pool as create_pg_pool, DbConfig as DbPoolConfig};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_hint_service::config::Config;
use video_hint_service::db::{PgVideoStore, VideoStore};
use video_hint_service::handlers;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting video-hint-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let mut db_cfg = DbPoolConfig::from_env("video-hint-service").unwrap_or_default();
    if db_cfg.database_url.is_empty() {
        db_cfg.database_url = config.database.url.clone();
    }
    db_cfg.max_connections = std::cmp::max(db_cfg.max_connections, config.database.max_connections);
    db_cfg.log_config();
    let db_pool = create_pg_pool(db_cfg)
        .await
        .expect("Failed to create database pool");

    // The storage capability is wired exactly once here; handlers receive
    // it as app data instead of digging it out of request context.
    let store: Arc<dyn VideoStore> = Arc::new(PgVideoStore::new(db_pool));
    let store_data = web::Data::from(store.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(handlers::configure_routes)
    })
    .bind(format!("0.0.0.0:{}", config.app.port))?
    .run()
    .await?;

    store.close().await;
    Ok(())
}
