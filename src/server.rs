//! HTTP server initialization and runtime setup.
//!
//! Handles the record store connection, the initial snapshot load and the
//! Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::RecordStore;
use crate::infrastructure::persistence::{InMemoryRecordStore, PgRecordStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the record store selected by the configuration.
///
/// # Errors
///
/// Returns an error if the PostgreSQL pool cannot be created.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn RecordStore>> {
    match config.store_backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryRecordStore::demo())),
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            Ok(Arc::new(PgRecordStore::new(Arc::new(pool))))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Record store (PostgreSQL or in-memory)
/// - Background initial load of the snapshot
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let state = AppState::new(store);
    state.dashboard.spawn_initial_load();
    tracing::info!("Initial dashboard load started");

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
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
