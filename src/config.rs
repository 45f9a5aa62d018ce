use analytics::date::DEFAULT_DATE_FORMAT;
use analytics::{BearerToken, DateDisplay, Normalizer};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Command-line configuration.
///
/// Sources, lowest precedence first: built-in defaults, `farmhelp.toml` in
/// the working directory (or the file passed with `--config`), then
/// `FARMHELP_*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the prediction backend API
    pub api_base_url: String,
    /// Bearer token used for history requests
    pub access_token: Option<String>,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// chrono format string for display dates
    pub date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("farmhelp").required(false),
        };

        let builder = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("date_format", DEFAULT_DATE_FORMAT)?
            .add_source(file)
            .add_source(Environment::with_prefix("FARMHELP"));

        let config: AppConfig = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        tracing::debug!(api_base_url = %config.api_base_url, "Configuration loaded");
        Ok(config)
    }

    /// Full URL of the prediction history endpoint.
    pub fn history_url(&self) -> String {
        format!(
            "{}{}",
            self.api_base_url.trim_end_matches('/'),
            common::PREDICTION_HISTORY_ENDPOINT
        )
    }

    /// Token from the command line when given, else from configuration.
    pub fn token(&self, override_token: Option<&str>) -> Option<BearerToken> {
        override_token
            .and_then(BearerToken::new)
            .or_else(|| self.access_token.as_deref().and_then(BearerToken::new))
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(DateDisplay::new(self.date_format.clone()))
    }
}
