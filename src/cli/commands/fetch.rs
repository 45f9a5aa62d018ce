use analytics::{FetchError, HistorySource};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, trace};

use super::user_facing;
use crate::config::AppConfig;
use crate::fetcher::HttpHistorySource;

/// Saves the raw prediction history, exactly as the backend returned it.
pub async fn fetch(config: &AppConfig, output: &Path, token: Option<&str>) -> Result<()> {
    trace!("Entering fetch command");
    debug!("Output path: {}", output.display());

    let token = config
        .token(token)
        .ok_or(FetchError::MissingCredential)
        .map_err(user_facing)?;

    let source = HttpHistorySource::new(config)?;
    let records = source.fetch_history(&token).await.map_err(user_facing)?;

    let json = serde_json::to_string_pretty(&records).context("Failed to serialize history")?;
    if output.as_os_str() == "-" {
        println!("{}", json);
    } else {
        std::fs::write(output, json)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    info!("Saved {} history records", records.len());
    Ok(())
}
