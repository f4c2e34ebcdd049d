use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::state::AppState;

pub const TOO_MANY_REQUESTS_BODY: &str = "Too Many Requests\n";
pub const SHUTTING_DOWN_BODY: &str = "Service Unavailable\n";

/// Global inbound limiter. Rejects instead of queueing when no token is free.
pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.inbound_limiter.check().is_err() {
        warn!("Inbound rate limit exceeded: {} {}", request.method(), request.uri());
        return (StatusCode::TOO_MANY_REQUESTS, TOO_MANY_REQUESTS_BODY).into_response();
    }

    next.run(request).await
}

/// Counts the request as in flight until its handler answers. Once shutdown
/// has closed the tracker, new requests are turned away with 503.
pub async fn track_in_flight(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.in_flight.is_closed() {
        warn!("Rejecting {} {} during shutdown", request.method(), request.uri());
        return (StatusCode::SERVICE_UNAVAILABLE, SHUTTING_DOWN_BODY).into_response();
    }

    state.in_flight.track_future(next.run(request)).await
}
