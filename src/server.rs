//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, service wiring, and the Axum server lifecycle including
//! graceful shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::{self, SqliteUrlStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::normalize_path::NormalizePath;
use tracing::{error, info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite pool and migrations
/// - Save and redirect services
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the server stops accepting connections and in-flight
/// requests get `SHUTDOWN_TIMEOUT_SECONDS` to finish before the storage pool
/// is closed.
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.storage_path, config.pool_settings())
        .await
        .context("failed to initialize storage")?;
    let store = Arc::new(SqliteUrlStore::new(pool));

    let state = AppState::new(
        store.clone(),
        Arc::new(config.alias_generator()?),
        config.alias_policy()?,
    );
    let app = app_router(state, config.http_timeout());

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(address = %config.listen_addr, "server started");

    let served =
        serve_until_shutdown(listener, app, shutdown_signal(), config.shutdown_timeout()).await;

    store.close().await;
    info!("storage closed");

    served
}

/// Serves `app` until `signal` resolves, then drains in-flight requests.
///
/// Requests still running after `grace` are dropped.
///
/// # Errors
///
/// Returns an error if the server fails before or while draining.
pub async fn serve_until_shutdown<F>(
    listener: TcpListener,
    app: NormalizePath<Router>,
    signal: F,
    grace: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let stopping = Arc::new(Notify::new());
    let trigger = stopping.clone();

    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            signal.await;
            info!("stopping server");
            trigger.notify_one();
        });

    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut handle => {
            joined.context("server task panicked")?.context("server error")?;
        }
        _ = stopping.notified() => {
            match tokio::time::timeout(grace, &mut handle).await {
                Ok(joined) => {
                    joined.context("server task panicked")?.context("server error")?;
                    info!("server stopped");
                }
                Err(_) => {
                    warn!(
                        grace_seconds = grace.as_secs(),
                        "grace period elapsed, dropping in-flight requests"
                    );
                    handle.abort();
                }
            }
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
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
}
