use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Request, Response, StatusCode};
use tracing::{error, warn};

use super::{Transport, parse_retry_after};
use crate::data_fetcher::context::RequestContext;
use crate::error::AppError;

/// Resends requests the upstream throttled (HTTP 429).
///
/// Each attempt sends a fresh copy of the original request. Any other status
/// is returned as is and transport errors are never retried. After
/// `max_attempts` throttled responses the call fails with
/// [`AppError::TooManyRetries`].
pub struct RetryTransport<T> {
    inner: T,
    max_attempts: u32,
}

impl<T: Transport> RetryTransport<T> {
    pub fn new(inner: T, max_attempts: u32) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
        }
    }
}

#[async_trait]
impl<T: Transport> Transport for RetryTransport<T> {
    async fn send(&self, request: Request, ctx: &RequestContext) -> Result<Response, AppError> {
        let url = request.url().to_string();

        for attempt in 1..=self.max_attempts {
            let attempt_request = request.try_clone().ok_or_else(|| {
                AppError::request_build(format!("request body cannot be cloned (URL: {url})"))
            })?;

            let response = self.inner.send(attempt_request, ctx).await?;
            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                return Ok(response);
            }

            if attempt == self.max_attempts {
                break;
            }

            let wait = parse_retry_after(
                response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|value| value.to_str().ok()),
            );
            warn!(
                "Throttled by {}. Retrying in {:?} (attempt {}/{})",
                url, wait, attempt, self.max_attempts
            );
            drop(response);
            ctx.sleep(wait).await?;
        }

        error!(
            "Giving up on {} after {} throttled attempts",
            url, self.max_attempts
        );
        Err(AppError::too_many_retries(self.max_attempts, url))
    }
}
