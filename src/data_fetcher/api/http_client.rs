//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates the pooled HTTP client underneath the transport chain.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
///
/// # Features
/// * Timeout covering the whole request, body included (`ABIOS_CLIENT_REQ_TIMEOUT_SEC`)
/// * Connection pooling with centralized pool size configuration
/// * HTTP/2 multiplexing when available
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}
