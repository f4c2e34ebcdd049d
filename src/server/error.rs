//! Mapping of service failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::error::AppError;

pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal server error\n";

/// Every failure is a 500 with a generic body. The details only go to the log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_cancellation() {
            warn!("Request abandoned: {}", self);
        } else if let Some(status) = self.status_code() {
            error!(status, "Upstream rejected request: {}", self);
        } else if self.is_decode() {
            error!("Upstream returned unusable data: {}", self);
        } else if self.is_transport() {
            error!("Upstream unreachable: {}", self);
        } else {
            error!("Request failed: {}", self);
        }
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_BODY).into_response()
    }
}
