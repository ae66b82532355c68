//! # Quill blog server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use blog_server::config::AppConfig;
use blog_server::handlers;
use blog_server::middleware::MethodOverride;
use blog_server::state::AppState;
use blog_server::telemetry::{TelemetryConfig, init_telemetry};
use quill_infra::UPLOADS_PREFIX;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill blog server on {}:{}",
        config.host,
        config.port
    );

    if let Err(e) = std::fs::create_dir_all(&config.upload_dir) {
        tracing::warn!(
            dir = %config.upload_dir.display(),
            error = %e,
            "Could not create upload directory"
        );
    }

    let state = AppState::from_config(&config)
        .await
        .map_err(std::io::Error::other)?;
    let upload_dir = config.upload_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(MethodOverride)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .service(Files::new(UPLOADS_PREFIX, upload_dir.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
