use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Request, Response};

use super::Transport;
use crate::constants::{env_vars, upstream};
use crate::data_fetcher::context::RequestContext;
use crate::error::AppError;

/// Sets the shared-secret header on every request passing through.
pub struct AuthTransport<T> {
    inner: T,
    header: HeaderName,
    secret: HeaderValue,
}

impl<T: Transport> AuthTransport<T> {
    /// Validates the token once so sending can never fail on it.
    pub fn new(inner: T, token: &str) -> Result<Self, AppError> {
        let header = HeaderName::from_bytes(upstream::AUTH_HEADER.as_bytes())
            .map_err(|e| AppError::config_error(format!("invalid auth header name: {e}")))?;
        let mut secret = HeaderValue::from_str(token).map_err(|_| {
            AppError::config_error(format!("{} contains invalid characters", env_vars::TOKEN))
        })?;
        secret.set_sensitive(true);

        Ok(Self {
            inner,
            header,
            secret,
        })
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthTransport<T> {
    async fn send(&self, mut request: Request, ctx: &RequestContext) -> Result<Response, AppError> {
        request
            .headers_mut()
            .insert(self.header.clone(), self.secret.clone());
        self.inner.send(request, ctx).await
    }
}
