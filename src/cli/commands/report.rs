use analytics::{HistoryAnalytics, Normalizer};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use super::fetch_history;
use crate::config::AppConfig;
use crate::report::{render_history, OutputFormat, ReportView};

pub async fn report(
    config: &AppConfig,
    input: Option<&Path>,
    view: ReportView,
    format: OutputFormat,
    token: Option<&str>,
) -> Result<()> {
    let history = match input {
        Some(path) => load_history_file(path, &config.normalizer())?,
        None => fetch_history(config, token).await?,
    };

    debug!(?view, ?format, "Rendering report for {} records", history.len());
    println!("{}", render_history(&history, view, format)?);
    Ok(())
}

/// Reads a saved history file.
pub fn load_history_file(path: &Path, normalizer: &Normalizer) -> Result<HistoryAnalytics> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let raw = common::history_from_slice(&bytes)
        .with_context(|| format!("{} is not a prediction history", path.display()))?;

    info!("Loaded {} history records from {}", raw.len(), path.display());
    Ok(HistoryAnalytics::from_raw(raw, normalizer))
}
