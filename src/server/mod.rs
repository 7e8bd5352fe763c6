//! HTTP service.
//!
//! - `/status` - JSON counters
//! - `/metrics` - Prometheus text
//! - anything else - routed through [`crate::router::resolve_target`] and
//!   answered with a domain, a 204 or a profile

mod handlers;
mod types;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::app::{shutdown_signal, AppState};
use handlers::{metrics_handler, route_handler, status_handler};
pub use handlers::{render_metrics, status_snapshot};
pub use types::{ErrorCounts, ErrorResponse, StatusResponse, TargetResponse};

/// Builds the router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/status", get(status_handler))
        .fallback(route_handler)
        .with_state(state)
}

/// Serves on an already-bound listener until `cancel` fires.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, state: AppState, cancel: CancellationToken) -> Result<()> {
    let app = build_router(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(cancel))
    .await
    .context("Server error")?;
    Ok(())
}

/// Binds `addr` and serves until `cancel` fires.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_server(addr: SocketAddr, state: AppState, cancel: CancellationToken) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    let local = listener.local_addr().unwrap_or(addr);
    log::info!("ipyard listening on http://{}/", local);
    log::info!("  - Status: http://{}/status", local);
    log::info!("  - Metrics: http://{}/metrics", local);

    serve(listener, state, cancel).await?;
    log::info!("Server stopped");
    Ok(())
}
