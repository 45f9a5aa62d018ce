use analytics::error::Result as FetchResult;
use analytics::{BearerToken, FetchError, HistorySource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use common::RawRecord;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// Error body returned by the backend on rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Prediction history fetched from the backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpHistorySource {
    client: reqwest::Client,
    url: String,
}

impl HttpHistorySource {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.history_url(),
        })
    }
}

#[async_trait(?Send)]
impl HistorySource for HttpHistorySource {
    async fn fetch_history(&self, token: &BearerToken) -> FetchResult<Vec<RawRecord>> {
        debug!("GET request to: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(AUTHORIZATION, token.header_value())
            .send()
            .await
            .map_err(|e| {
                warn!("GET {} - Request failed: {}", self.url, e);
                FetchError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::from_status(status.as_u16(), error_detail(&body)));
        }

        let records = common::history_from_slice(&body)?;
        info!("GET {} - Success ({} records)", self.url, records.len());
        Ok(records)
    }
}

/// Human readable reason from an error response body.
fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) => err.detail,
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            if text.is_empty() {
                "<empty response>".to_string()
            } else {
                text.to_string()
            }
        }
    }
}
