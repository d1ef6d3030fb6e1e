/// Capture Service - HTTP server
///
/// Relays motion-triggered camera captures between an embedded device and
/// a web frontend: the device uploads JPEGs and polls the trigger flag,
/// the frontend requests manual captures and lists stored images.
use actix_cors::Cors;
use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use capture_service::handlers;
use capture_service::middleware::ApiKeyAuth;
use capture_service::services::CaptureService;
use capture_service::storage::BlobStore;
use capture_service::{db, Config};
use sqlx::postgres::PgPoolOptions;
use std::io;

/// Cameras send multi-megabyte JPEGs; the actix default payload limit is
/// far below that.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize database connection pool and idempotent schema
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    db::ensure_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    let blob = BlobStore::new(config.s3.clone()).await;
    let service = CaptureService::new(pool, blob);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("capture-service listening on {}", bind_address);

    let api_key = config.auth.api_key.clone();

    HttpServer::new(move || {
        // Device and frontend live on other origins
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(service.clone()))
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .wrap(actix_middleware::Logger::default())
            .wrap(cors)
            .route("/health", web::get().to(handlers::health))
            .service(
                web::scope("")
                    .wrap(ApiKeyAuth::new(api_key.clone()))
                    .route("/trigger-capture", web::post().to(handlers::trigger_capture))
                    .route("/check-trigger", web::get().to(handlers::check_trigger))
                    .route("/upload", web::post().to(handlers::upload_image))
                    .route("/images", web::get().to(handlers::list_images)),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
