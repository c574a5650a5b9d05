//! # Userdir Server
//!
//! Main entry point: loads configuration, spawns the snapshot refresher,
//! and serves the REST API until shutdown.

use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use userdir_cache::{Refresher, SnapshotStore};
use userdir_config::ConfigLoader;
use userdir_core::{UserdirError, UserdirResult};
use userdir_rest::{create_router, AppState};
use userdir_service::{DirectoryService, DirectoryServiceImpl};
use userdir_upstream::{HttpUpstreamClient, UpstreamClient};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Userdir Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> UserdirResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);
    info!("Upstream: {}", config.upstream.base_url);
    info!(
        "Refresh interval: {}s",
        config.cache.refresh_interval_secs
    );

    // Upstream client shared by the refresher and the enrichment path
    let client: Arc<dyn UpstreamClient> = Arc::new(HttpUpstreamClient::new(&config.upstream)?);

    // Snapshot cache with its background refresher; the first refresh
    // cycle fires immediately on spawn
    let store = SnapshotStore::new();
    let cache = store.cache();
    let refresher = Arc::new(Refresher::new(
        store,
        Arc::clone(&client),
        config.cache.refresh_interval(),
    ));
    let refresher_task = {
        let refresher = Arc::clone(&refresher);
        tokio::spawn(async move { refresher.run().await })
    };

    // Read facade over cache + upstream
    let directory: Arc<dyn DirectoryService> =
        Arc::new(DirectoryServiceImpl::new(cache.clone(), client));

    let state = AppState::new(directory, cache);
    let router = create_router(state, &config.server);

    // Start REST server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| UserdirError::internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| UserdirError::internal(format!("REST server error: {}", e)))?;

    refresher.stop();
    let _ = refresher_task.await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,userdir=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
