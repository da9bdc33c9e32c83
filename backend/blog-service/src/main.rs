use actix_web::{web, App, HttpServer};
use anyhow::Context;
use blog_service::db::{DataLoader, InMemoryPostRepository};
use blog_service::services::PostService;
use blog_service::{handlers, middleware, Config};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

/// Resolve once SIGINT or SIGTERM arrives, returning the signal name
async fn shutdown_signal() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => "SIGINT",
                    _ = terminate.recv() => "SIGTERM",
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler, listening for Ctrl+C only");
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!(error = %e, "Failed to listen for Ctrl+C");
                }
                "SIGINT"
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
        }
        "SIGINT"
    }
}

/// Blog Service
///
/// CRUD REST API for blog posts held in memory.
///
/// # Routes
///
/// - `/api/v1/posts` - Create and list posts
/// - `/api/v1/posts/{id}` - Read, update, delete a post
/// - `/health` - Liveness probe
///
/// Posts from `BLOG_DATA_FILE` are loaded at startup; if the file is missing
/// or invalid the service starts empty.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over LOG_LEVEL; an unparseable level falls back to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .init();

    info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    info!(environment = %config.app.env, "Configuration loaded");

    let repo = Arc::new(InMemoryPostRepository::new());

    let loader = DataLoader::new(repo.clone());
    if let Err(e) = loader.load_from_file(&config.data.file) {
        warn!(error = %e, "Failed to load initial data, starting with empty repository");
    }

    let post_service = web::Data::new(PostService::new(repo));

    let bind_address = config.bind_address();
    let cors_config = config.cors.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(post_service.clone())
            .wrap(middleware::cors(&cors_config))
            .wrap(TracingLogger::default())
            .configure(handlers::configure_routes)
    })
    .workers(config.app.workers)
    .shutdown_timeout(config.app.shutdown_timeout_secs)
    .disable_signals()
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind HTTP server to {}", bind_address))?
    .run();

    let server_handle = server.handle();
    info!(address = %bind_address, "Starting server");

    let mut server_task = tokio::spawn(server);

    tokio::select! {
        result = &mut server_task => {
            result
                .context("HTTP server task failed")?
                .context("HTTP server error")?;
        }
        signal = shutdown_signal() => {
            info!(signal, "Received shutdown signal");
            info!("Shutting down server gracefully...");

            server_handle.stop(true).await;
            match server_task.await {
                Ok(Ok(())) => info!("Server shutdown completed successfully"),
                Ok(Err(e)) => error!(error = %e, "HTTP server shutdown error"),
                Err(e) => error!(error = %e, "HTTP server task failed during shutdown"),
            }
        }
    }

    info!("Server stopped");
    Ok(())
}
