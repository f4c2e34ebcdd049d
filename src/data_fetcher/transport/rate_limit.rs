//! Client-side token bucket in front of the network.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Request, Response};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

use super::Transport;
use crate::data_fetcher::context::RequestContext;
use crate::error::AppError;

/// One limiter shared by every clone and caller of a client.
pub type SharedLimiter = Arc<DefaultDirectRateLimiter>;

/// Builds a token bucket refilling `per_second` tokens per second and
/// holding at most `burst`.
pub fn build_limiter(per_second: u32, burst: u32) -> Result<SharedLimiter, AppError> {
    let per_second = NonZeroU32::new(per_second)
        .ok_or_else(|| AppError::config_error("rate limit must be greater than zero"))?;
    let burst = NonZeroU32::new(burst)
        .ok_or_else(|| AppError::config_error("rate limit burst must be greater than zero"))?;

    let quota = Quota::per_second(per_second).allow_burst(burst);
    Ok(Arc::new(RateLimiter::direct(quota)))
}

/// Waits for a limiter token before handing the request on.
pub struct RateLimitTransport<T> {
    inner: T,
    limiter: SharedLimiter,
}

impl<T: Transport> RateLimitTransport<T> {
    pub fn new(inner: T, limiter: SharedLimiter) -> Self {
        Self { inner, limiter }
    }
}

#[async_trait]
impl<T: Transport> Transport for RateLimitTransport<T> {
    async fn send(&self, request: Request, ctx: &RequestContext) -> Result<Response, AppError> {
        if self.limiter.check().is_err() {
            debug!("Outbound limiter exhausted, waiting (URL: {})", request.url());
            ctx.run(self.limiter.until_ready()).await?;
        }
        self.inner.send(request, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::transport::TransportExt;
    use crate::data_fetcher::transport::testing::{ScriptedTransport, Step, get};
    use std::time::{Duration, Instant};

    #[test]
    fn test_build_limiter_rejects_zero() {
        assert!(build_limiter(0, 1).is_err());
        assert!(build_limiter(1, 0).is_err());
        assert!(build_limiter(5, 10).is_ok());
    }

    #[test]
    fn test_burst_capacity() {
        let limiter = build_limiter(1, 3).unwrap();
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }

    #[tokio::test]
    async fn test_passes_through_within_budget() {
        let scripted = ScriptedTransport::new([Step::ok("[]"), Step::ok("[]")]);
        let transport = scripted.clone().with_rate_limit(build_limiter(1, 2).unwrap());
        let ctx = RequestContext::new();

        let started = Instant::now();
        transport.send(get("https://api.example.com/a"), &ctx).await.unwrap();
        transport.send(get("https://api.example.com/b"), &ctx).await.unwrap();

        assert_eq!(scripted.request_count(), 2);
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_cancellation_while_waiting_returns_promptly() {
        let limiter = build_limiter(1, 1).unwrap();
        // Drain the only token; the next one arrives in about a second.
        assert!(limiter.check().is_ok());

        let scripted = ScriptedTransport::new([]);
        let transport = scripted.clone().with_rate_limit(limiter);

        let ctx = RequestContext::new();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let result = transport.send(get("https://api.example.com/a"), &ctx).await;

        assert!(matches!(result, Err(AppError::Cancelled)));
        assert!(started.elapsed() < Duration::from_millis(500));
        assert_eq!(scripted.request_count(), 0);
    }

    #[tokio::test]
    async fn test_limiter_is_shared_between_transports() {
        let limiter = build_limiter(1, 1).unwrap();
        let first = ScriptedTransport::new([Step::ok("[]")]).with_rate_limit(limiter.clone());
        let second = ScriptedTransport::new([]).with_rate_limit(limiter);

        first
            .send(get("https://api.example.com/a"), &RequestContext::new())
            .await
            .unwrap();

        let ctx = RequestContext::new().with_timeout(Duration::from_millis(50));
        let result = second.send(get("https://api.example.com/b"), &ctx).await;
        assert!(matches!(result, Err(AppError::DeadlineExceeded)));
    }
}
