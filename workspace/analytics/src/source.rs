use async_trait::async_trait;
use common::RawRecord;
use std::fmt;
use tracing::{info, instrument};

use crate::error::{FetchError, Result};
use crate::history::HistoryAnalytics;
use crate::normalize::Normalizer;

/// Bearer credential for the prediction backend.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a stored token; blank tokens count as no token at all.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Something that can return the current user's raw prediction history,
/// newest first.
///
/// Futures are not required to be `Send` so browser implementations
/// qualify.
#[async_trait(?Send)]
pub trait HistorySource {
    async fn fetch_history(&self, token: &BearerToken) -> Result<Vec<RawRecord>>;
}

/// Fetches and normalizes the history in one step.
#[instrument(skip(source, token, normalizer))]
pub async fn load_history(
    source: &dyn HistorySource,
    token: Option<&BearerToken>,
    normalizer: &Normalizer,
) -> Result<HistoryAnalytics> {
    let token = token.ok_or(FetchError::MissingCredential)?;
    let raw = source.fetch_history(token).await?;
    info!("Fetched {} history records", raw.len());
    Ok(HistoryAnalytics::from_raw(raw, normalizer))
}
