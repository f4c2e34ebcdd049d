//! Application state shared across all request handlers.

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::constants::inbound;
use crate::data_fetcher::context::RequestContext;
use crate::data_fetcher::transport::{SharedLimiter, build_limiter};
use crate::error::AppError;
use crate::service::LiveService;

#[derive(Clone)]
pub struct AppState {
    pub live_service: Arc<dyn LiveService>,
    /// Global budget for all inbound requests.
    pub inbound_limiter: SharedLimiter,
    /// Parent of every handler's context. Cancelled when the shutdown grace
    /// period runs out.
    pub request_root: CancellationToken,
    /// Requests admitted and not yet answered. Closed once shutdown starts.
    pub in_flight: TaskTracker,
}

impl AppState {
    /// State with the default inbound limit.
    pub fn new(
        live_service: Arc<dyn LiveService>,
        request_root: CancellationToken,
    ) -> Result<Self, AppError> {
        Ok(Self {
            live_service,
            inbound_limiter: build_limiter(inbound::REQUESTS_PER_SECOND, inbound::BURST)?,
            request_root,
            in_flight: TaskTracker::new(),
        })
    }

    pub fn with_inbound_limiter(mut self, limiter: SharedLimiter) -> Self {
        self.inbound_limiter = limiter;
        self
    }

    /// Fresh context for one inbound request.
    pub fn request_context(&self) -> RequestContext {
        RequestContext::from_token(self.request_root.child_token())
    }
}
