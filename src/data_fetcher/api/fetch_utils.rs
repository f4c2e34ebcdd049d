//! Request execution and response decoding shared by all client calls

use reqwest::{Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::data_fetcher::context::RequestContext;
use crate::data_fetcher::transport::Transport;
use crate::error::AppError;

/// Sends a GET through `transport` and decodes a JSON array of `T`.
///
/// # Returns
/// * `Ok(Vec<T>)` - The decoded list (possibly empty)
/// * `Err(AppError::UnexpectedStatus)` - Any status other than 200
/// * `Err(AppError)` - Transport, cancellation or decode failure
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_list<T, R>(
    transport: &R,
    ctx: &RequestContext,
    url: Url,
) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    info!("Fetching data from URL: {url}");
    let url_string = url.to_string();

    let response = transport.send(Request::new(Method::GET, url), ctx).await?;

    let status = response.status();
    if status != StatusCode::OK {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown status"),
            url_string
        );
        return Err(AppError::unexpected_status(status.as_u16(), url_string));
    }

    let response_text = match ctx.run(response.text()).await? {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url_string, e);
            return Err(AppError::from_transport(e, &url_string));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    decode_list(&response_text, &url_string)
}

/// Decodes a JSON array body, classifying failures.
pub fn decode_list<T: DeserializeOwned>(body: &str, url: &str) -> Result<Vec<T>, AppError> {
    if body.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<Vec<T>>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let preview: String = body.chars().take(200).collect();
        debug!("Response text (first 200 chars): {preview}");

        if e.is_data() {
            // Valid JSON, wrong shape
            AppError::api_unexpected_structure(e.to_string(), url)
        } else {
            AppError::api_malformed_json(e.to_string(), url)
        }
    })
}
