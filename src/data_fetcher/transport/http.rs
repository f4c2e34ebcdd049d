//! Base transport executing requests on a pooled `reqwest::Client`.

use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use tracing::{debug, error};

use super::Transport;
use crate::data_fetcher::context::RequestContext;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request, ctx: &RequestContext) -> Result<Response, AppError> {
        let url = request.url().to_string();
        debug!("Sending {} {url}", request.method());

        match ctx.run(self.client.execute(request)).await? {
            Ok(response) => {
                debug!("Response status: {} (URL: {url})", response.status());
                Ok(response)
            }
            Err(e) => {
                error!("Request failed for URL {}: {}", url, e);
                Err(AppError::from_transport(e, &url))
            }
        }
    }
}
