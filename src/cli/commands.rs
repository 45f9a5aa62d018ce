pub mod fetch;
pub mod report;

pub use fetch::fetch;
pub use report::report;

use analytics::{load_history, FetchError, HistoryAnalytics};
use anyhow::Result;

use crate::config::AppConfig;
use crate::fetcher::HttpHistorySource;

/// Fetches and normalizes the history, turning fetch failures into the
/// message a user can act on.
pub(crate) async fn fetch_history(config: &AppConfig, token: Option<&str>) -> Result<HistoryAnalytics> {
    let source = HttpHistorySource::new(config)?;
    let token = config.token(token);

    load_history(&source, token.as_ref(), &config.normalizer())
        .await
        .map_err(user_facing)
}

pub(crate) fn user_facing(err: FetchError) -> anyhow::Error {
    let mut message = err.user_message();
    if err.requires_login() {
        message.push_str(" Set FARMHELP_ACCESS_TOKEN or pass --token.");
    }
    anyhow::Error::new(err).context(message)
}
