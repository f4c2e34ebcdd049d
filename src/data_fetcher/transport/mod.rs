//! Outbound request pipeline.
//!
//! Every upstream call goes through a [`Transport`]. The base
//! [`HttpTransport`] talks to the network and the decorators add one concern
//! each. Compose them with [`TransportExt`]; the client uses, outermost first:
//!
//! ```text
//! AuthTransport -> RateLimitTransport -> RetryTransport -> HttpTransport
//! ```

use async_trait::async_trait;
use reqwest::{Request, Response};
use std::sync::Arc;

use crate::data_fetcher::context::RequestContext;
use crate::error::AppError;

pub mod auth;
pub mod http;
pub mod rate_limit;
pub mod retry;
pub mod retry_after;

pub use auth::AuthTransport;
pub use http::HttpTransport;
pub use rate_limit::{RateLimitTransport, SharedLimiter, build_limiter};
pub use retry::RetryTransport;
pub use retry_after::parse_retry_after;

/// Sends one request and returns the response or an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request, ctx: &RequestContext) -> Result<Response, AppError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request, ctx: &RequestContext) -> Result<Response, AppError> {
        (**self).send(request, ctx).await
    }
}

pub trait TransportExt: Transport + Sized {
    /// Add the shared-secret header layer
    fn with_auth(self, token: &str) -> Result<AuthTransport<Self>, AppError> {
        AuthTransport::new(self, token)
    }

    /// Add the client-side limiter layer
    fn with_rate_limit(self, limiter: SharedLimiter) -> RateLimitTransport<Self> {
        RateLimitTransport::new(self, limiter)
    }

    /// Add the 429 retry layer
    fn with_retry(self, max_attempts: u32) -> RetryTransport<Self> {
        RetryTransport::new(self, max_attempts)
    }
}

impl<T: Transport> TransportExt for T {}
