mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, data::mem::MemStorage, error::AppError, scheduler::calendar_sync,
    service::calendar::cache::CalendarCache, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client();

    let store = MemStorage::seeded();
    startup::seed_admin(&store, &config).await;
    startup::seed_seasons(&db).await?;

    let calendar_cache = CalendarCache::new();

    // Start Google Calendar sync scheduler
    let scheduler_store = store.clone();
    let scheduler_http = http_client.clone();
    let scheduler_config = config.clone();
    let scheduler_cache = calendar_cache.clone();
    tokio::spawn(async move {
        if let Err(e) = calendar_sync::start_scheduler(
            scheduler_store,
            scheduler_http,
            scheduler_config,
            scheduler_cache,
        )
        .await
        {
            tracing::error!("Calendar sync scheduler error: {}", e);
        }
    });

    let app = server::router::router(&config)
        .with_state(AppState::new(
            db,
            store,
            http_client,
            config.clone(),
            calendar_cache,
        ))
        .layer(session);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
