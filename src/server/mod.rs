//! Inbound HTTP boundary.
//!
//! Routes call the [`LiveService`](crate::service::LiveService) and decide
//! status codes: data is 200 JSON, nothing live is 404, any failure is 500.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::constants::CANCELLED_REQUEST_GRACE_SECONDS;
use crate::error::AppError;

pub use router::router;
pub use state::AppState;

/// Serves the router on `listener` until `shutdown` is cancelled.
///
/// Shutdown first drains: requests already admitted run to completion while
/// new ones get 503. Only then are connections closed and the listener
/// dropped.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on {addr}");
    }

    let in_flight = state.in_flight.clone();
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            info!(
                "Shutting down server, waiting for {} in-flight requests",
                in_flight.len()
            );
            in_flight.close();
            in_flight.wait().await;
        })
        .await
        .map_err(|e| AppError::server_error(format!("server failed: {e}")))
}

/// Waits for a server task whose shutdown token has been cancelled.
///
/// If it has not drained within `grace`, `request_root` is cancelled so the
/// remaining handlers answer with 500, and the task is aborted should even
/// that not finish it.
pub async fn wait_for_shutdown(
    mut server: JoinHandle<Result<(), AppError>>,
    request_root: &CancellationToken,
    grace: Duration,
) -> Result<(), AppError> {
    if let Ok(result) = tokio::time::timeout(grace, &mut server).await {
        return join_result(result);
    }

    warn!("In-flight requests still running after {grace:?}, cancelling them");
    request_root.cancel();

    let cancelled_grace = Duration::from_secs(CANCELLED_REQUEST_GRACE_SECONDS);
    match tokio::time::timeout(cancelled_grace, &mut server).await {
        Ok(result) => join_result(result),
        Err(_) => {
            warn!("Server did not stop after cancelling requests, aborting");
            server.abort();
            Ok(())
        }
    }
}

/// Flattens a finished server task into its own result.
pub fn join_result(
    result: Result<Result<(), AppError>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    result.map_err(|e| AppError::server_error(format!("server task failed: {e}")))?
}
