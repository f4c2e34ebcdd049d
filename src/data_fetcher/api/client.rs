//! Typed access to the upstream API.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::instrument;

use super::fetch_utils::fetch_list;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_batch_url, build_live_series_url};
use crate::config::Config;
use crate::constants::{retry, upstream};
use crate::data_fetcher::context::RequestContext;
use crate::data_fetcher::models::{EntityId, Player, Roster, Series, Team};
use crate::data_fetcher::transport::{
    AuthTransport, HttpTransport, RateLimitTransport, RetryTransport, Transport, TransportExt,
    build_limiter,
};
use crate::error::AppError;

/// Read operations the aggregation layer needs from upstream.
///
/// Batch lookups send the ids exactly as given. Callers deduplicate.
#[async_trait]
pub trait AbiosClient: Send + Sync {
    async fn get_live_series(&self, ctx: &RequestContext) -> Result<Vec<Series>, AppError>;

    async fn get_rosters_by_id(
        &self,
        ctx: &RequestContext,
        ids: &[EntityId],
    ) -> Result<Vec<Roster>, AppError>;

    async fn get_teams_by_id(
        &self,
        ctx: &RequestContext,
        ids: &[EntityId],
    ) -> Result<Vec<Team>, AppError>;

    async fn get_players_by_id(
        &self,
        ctx: &RequestContext,
        ids: &[EntityId],
    ) -> Result<Vec<Player>, AppError>;
}

/// The production chain: auth, then rate limit, then retry, then network.
pub type DefaultTransport = AuthTransport<RateLimitTransport<RetryTransport<HttpTransport>>>;

pub struct HttpAbiosClient<T = DefaultTransport> {
    api_base_url: String,
    transport: T,
    /// Bound on one whole operation: limiter wait, every attempt and every
    /// Retry-After pause.
    request_timeout: Option<Duration>,
}

impl HttpAbiosClient<DefaultTransport> {
    /// Builds the client and its transport chain from configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = create_http_client_with_timeout(config.request_timeout_seconds)
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))?;
        let limiter = build_limiter(config.rate_limit_per_second, config.rate_limit_burst)?;

        let transport = HttpTransport::new(http_client)
            .with_retry(retry::MAX_ATTEMPTS)
            .with_rate_limit(limiter)
            .with_auth(&config.token)?;

        Ok(Self::with_transport(&config.api_base_url, transport)?
            .with_request_timeout(config.request_timeout()))
    }
}

impl<T: Transport> HttpAbiosClient<T> {
    /// Uses a caller supplied transport chain.
    pub fn with_transport(api_base_url: &str, transport: T) -> Result<Self, AppError> {
        Url::parse(api_base_url).map_err(|e| {
            AppError::config_error(format!("invalid API base URL '{api_base_url}': {e}"))
        })?;

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            transport,
            request_timeout: None,
        })
    }

    /// Every operation fails with [`AppError::DeadlineExceeded`] once
    /// `timeout` has passed, on top of whatever deadline the caller set.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn operation_context(&self, ctx: &RequestContext) -> RequestContext {
        match self.request_timeout {
            Some(timeout) => ctx.clone().with_timeout(timeout),
            None => ctx.clone(),
        }
    }

    async fn fetch_by_ids<E: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        resource: &str,
        ids: &[EntityId],
    ) -> Result<Vec<E>, AppError> {
        let url = build_batch_url(&self.api_base_url, resource, ids)?;
        fetch_list(&self.transport, &self.operation_context(ctx), url).await
    }
}

#[async_trait]
impl<T: Transport> AbiosClient for HttpAbiosClient<T> {
    #[instrument(skip(self, ctx))]
    async fn get_live_series(&self, ctx: &RequestContext) -> Result<Vec<Series>, AppError> {
        let url = build_live_series_url(&self.api_base_url)?;
        fetch_list(&self.transport, &self.operation_context(ctx), url).await
    }

    #[instrument(skip(self, ctx))]
    async fn get_rosters_by_id(
        &self,
        ctx: &RequestContext,
        ids: &[EntityId],
    ) -> Result<Vec<Roster>, AppError> {
        self.fetch_by_ids(ctx, upstream::ROSTERS_PATH, ids).await
    }

    #[instrument(skip(self, ctx))]
    async fn get_teams_by_id(
        &self,
        ctx: &RequestContext,
        ids: &[EntityId],
    ) -> Result<Vec<Team>, AppError> {
        self.fetch_by_ids(ctx, upstream::TEAMS_PATH, ids).await
    }

    #[instrument(skip(self, ctx))]
    async fn get_players_by_id(
        &self,
        ctx: &RequestContext,
        ids: &[EntityId],
    ) -> Result<Vec<Player>, AppError> {
        self.fetch_by_ids(ctx, upstream::PLAYERS_PATH, ids).await
    }
}
