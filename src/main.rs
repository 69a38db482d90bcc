use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{Context, Result};
use prompter_server::{configure, AppState, Config, FileSystemStorage, PromptStorage};
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Config::load();

    // Use `RUST_LOG=info` (or debug, trace, etc.) to control log level
    // Example: RUST_LOG=prompter_server=debug,actix_web=info cargo run
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(config = ?config, "Starting prompter server");

    tracing::info!(path = %config.data_dir.display(), "Using filesystem storage");
    let storage: Arc<dyn PromptStorage> = Arc::new(FileSystemStorage::new(&config.data_dir));
    let state = web::Data::new(AppState::new(storage));

    let (host, port) = config.bind_addr();
    tracing::info!(address = %format!("{host}:{port}"), "Starting HTTP server");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {host}:{port}"))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
