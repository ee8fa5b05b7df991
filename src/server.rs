//! HTTP server initialization and runtime setup.
//!
//! Builds the user store, the interceptor pipeline and the router, then runs
//! the Axum server until a shutdown signal arrives.

use crate::api::middleware::Pipeline;
use crate::config::Config;
use crate::domain::UserStore;
use crate::infrastructure::persistence::InMemoryUserRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory user store (optionally seeded)
/// - Interceptor pipeline keyed with the configured bearer secret
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = if config.seed_users {
        UserStore::seeded()
    } else {
        UserStore::new()
    };
    info!(users = store.len(), "User store initialized");

    let repository = Arc::new(InMemoryUserRepository::new(store));
    let state = AppState::new(repository);

    let pipeline = Pipeline::standard(&config.api_token);
    info!(stages = ?pipeline.stage_names(), "Request pipeline assembled");

    let app = app_router(state, &pipeline);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
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
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received, draining connections");
}
