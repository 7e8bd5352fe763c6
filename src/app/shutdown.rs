//! Graceful shutdown handling.

use log::{info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on Ctrl-C.
///
/// The task also ends, without cancelling, when `cancel` is cancelled
/// elsewhere first.
pub fn spawn_ctrl_c_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                match result {
                    Ok(()) => info!("Ctrl-C received, shutting down"),
                    Err(e) => warn!("Failed to listen for Ctrl-C, shutting down: {}", e),
                }
                cancel.cancel();
            }
            _ = cancel.cancelled() => {}
        }
    })
}

/// Resolves once `cancel` is cancelled; used as the server's shutdown future.
pub async fn shutdown_signal(cancel: CancellationToken) {
    cancel.cancelled().await;
}
