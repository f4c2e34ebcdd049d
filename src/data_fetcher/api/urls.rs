//! URL building utilities for upstream API endpoints

use reqwest::Url;

use crate::constants::upstream::{FILTER_PARAM, LIVE_SERIES_FILTER, SERIES_PATH};
use crate::data_fetcher::models::EntityId;
use crate::error::AppError;

/// Builds an id-inclusion filter expression.
///
/// Ids are written in the order given; nothing is deduplicated.
///
/// # Example
/// ```
/// use abios_live::data_fetcher::api::build_id_filter;
///
/// assert_eq!(build_id_filter("id", &[1, 2, 3]), "id<={1,2,3}");
/// assert_eq!(build_id_filter("id", &[]), "id<={}");
/// ```
pub fn build_id_filter(key: &str, ids: &[EntityId]) -> String {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{key}<={{{joined}}}")
}

/// Builds the URL listing series in the live lifecycle state.
///
/// # Example
/// ```
/// use abios_live::data_fetcher::api::build_live_series_url;
///
/// let url = build_live_series_url("https://api.example.com/v3").unwrap();
/// assert_eq!(url.as_str(), "https://api.example.com/v3/series?filter=lifecycle=live");
/// ```
pub fn build_live_series_url(api_base_url: &str) -> Result<Url, AppError> {
    let raw = format!(
        "{}?{FILTER_PARAM}={LIVE_SERIES_FILTER}",
        resource_url(api_base_url, SERIES_PATH)
    );
    parse(&raw)
}

/// Builds a batch lookup URL selecting `ids` from `resource`. The filter is
/// form-encoded into the query string.
///
/// # Example
/// ```
/// use abios_live::data_fetcher::api::build_batch_url;
///
/// let url = build_batch_url("https://api.example.com/v3/", "rosters", &[10, 20]).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.example.com/v3/rosters?filter=id%3C%3D%7B10%2C20%7D"
/// );
/// ```
pub fn build_batch_url(
    api_base_url: &str,
    resource: &str,
    ids: &[EntityId],
) -> Result<Url, AppError> {
    let mut url = parse(&resource_url(api_base_url, resource))?;
    url.query_pairs_mut()
        .append_pair(FILTER_PARAM, &build_id_filter("id", ids));
    Ok(url)
}

fn resource_url(api_base_url: &str, resource: &str) -> String {
    format!("{}/{resource}", api_base_url.trim_end_matches('/'))
}

fn parse(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::request_build(format!("invalid URL '{raw}': {e}")))
}
