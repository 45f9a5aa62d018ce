use analytics::{BearerToken, FetchError, HistorySource};
use async_trait::async_trait;
use common::RawRecord;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use crate::settings;

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: String,
}

/// Authorized GET request; non-2xx responses become a [`FetchError`].
pub async fn get_authorized(endpoint: &str, token: &BearerToken) -> Result<Response, FetchError> {
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .header("Authorization", &token.header_value())
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            FetchError::Network(error_msg)
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let body = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => err.detail,
            Err(_) => body.trim().to_string(),
        };
        return Err(FetchError::from_status(response.status(), detail));
    }

    log::trace!("GET {} - Response received", endpoint);
    Ok(response)
}

/// Prediction history served by the backend over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHistorySource;

#[async_trait(?Send)]
impl HistorySource for GlooHistorySource {
    async fn fetch_history(&self, token: &BearerToken) -> analytics::error::Result<Vec<RawRecord>> {
        let endpoint = common::PREDICTION_HISTORY_ENDPOINT;
        let response = get_authorized(endpoint, token).await?;

        let bytes = response.binary().await.map_err(|e| {
            let error_msg = format!("Failed to read response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            FetchError::Network(error_msg)
        })?;

        let records = common::history_from_slice(&bytes)?;
        log::info!("GET {} - Success, {} records", endpoint, records.len());
        Ok(records)
    }
}
