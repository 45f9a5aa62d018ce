use analytics::{ChartData, ChartKind, HistoryAnalytics, NormalizedRecord};
use anyhow::Result;
use clap::ValueEnum;
use common::{SummaryStats, EMPTY_HISTORY_MESSAGE};
use serde::Serialize;

/// Which projections a report contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportView {
    /// Normalized records
    Table,
    /// Crop distribution
    Crop,
    /// Soil parameters of the last 10 predictions
    Soil,
    /// Fertilizer recommendations
    Fertilizer,
    /// Latest soil parameters
    Radar,
    /// Summary statistics
    Summary,
    /// Everything above
    All,
}

impl ReportView {
    fn charts(self) -> Vec<ChartKind> {
        match self {
            ReportView::Crop => vec![ChartKind::Crop],
            ReportView::Soil => vec![ChartKind::Soil],
            ReportView::Fertilizer => vec![ChartKind::Fertilizer],
            ReportView::Radar => vec![ChartKind::Radar],
            ReportView::All => ChartKind::ALL.to_vec(),
            ReportView::Table | ReportView::Summary => Vec::new(),
        }
    }

    fn includes_table(self) -> bool {
        matches!(self, ReportView::Table | ReportView::All)
    }

    fn includes_summary(self) -> bool {
        matches!(self, ReportView::Summary | ReportView::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<&'a [NormalizedRecord]>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub charts: Vec<ChartData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryStats>,
}

/// Builds the requested report, `None` when the history is empty.
pub fn build_report(history: &HistoryAnalytics, view: ReportView) -> Option<Report<'_>> {
    if history.is_empty() {
        return None;
    }

    Some(Report {
        records: view.includes_table().then(|| history.records()),
        charts: view
            .charts()
            .into_iter()
            .filter_map(|chart| history.project(chart))
            .collect(),
        summary: view.includes_summary().then(|| history.summarize()),
    })
}

pub fn render(report: &Report<'_>, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    };
    Ok(text)
}

/// Full printable output for a history: the report, or the empty-state
/// message.
pub fn render_history(history: &HistoryAnalytics, view: ReportView, format: OutputFormat) -> Result<String> {
    match build_report(history, view) {
        Some(report) => render(&report, format),
        None => Ok(EMPTY_HISTORY_MESSAGE.to_string()),
    }
}
