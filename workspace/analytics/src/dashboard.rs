//! View selection state for the prediction history screen.
//!
//! The active view, chart, theme and refresh generation live in a single
//! [`DashboardState`] value that only changes through [`DashboardEvent`]s.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const LIGHT_PALETTE: [&str; 6] = ["#3498db", "#2ecc71", "#f1c40f", "#e74c3c", "#9b59b6", "#1abc9c"];
const DARK_PALETTE: [&str; 6] = ["#59a5f5", "#6deca9", "#ffdc65", "#ff7b69", "#ce93d8", "#4dcebd"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryView {
    #[default]
    Table,
    Charts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Crop,
    Soil,
    Fertilizer,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Crop,
        ChartKind::Soil,
        ChartKind::Fertilizer,
        ChartKind::Radar,
    ];

    /// Identifier used by selectors and the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Crop => "crop",
            ChartKind::Soil => "soil",
            ChartKind::Fertilizer => "fertilizer",
            ChartKind::Radar => "radar",
        }
    }

    /// Label shown in the chart selector.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Crop => "Crop Distribution",
            ChartKind::Soil => "Soil Parameters History",
            ChartKind::Fertilizer => "Fertilizer Recommendations",
            ChartKind::Radar => "Latest Soil Parameters",
        }
    }

    /// Heading shown above the rendered chart.
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Soil => "Soil Parameters History (Last 10 Predictions)",
            other => other.label(),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chart type: {0}")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static [&'static str; 6] {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }

    /// Colour of the `index`-th series, cycling through the palette.
    pub fn color(self, index: usize) -> &'static str {
        let palette = self.palette();
        palette[index % palette.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    ViewSelected(HistoryView),
    ChartTypeSelected(ChartKind),
    ThemeToggled,
    /// A new prediction or detection was made elsewhere; history must be
    /// fetched again.
    HistoryInvalidated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub view: HistoryView,
    pub chart: ChartKind,
    pub theme: Theme,
    /// Bumped on every invalidation; views key their history fetch on it.
    pub generation: u32,
}

impl DashboardState {
    pub fn apply(self, event: DashboardEvent) -> Self {
        debug!(?event, "Dashboard event");
        match event {
            DashboardEvent::ViewSelected(view) => Self { view, ..self },
            DashboardEvent::ChartTypeSelected(chart) => Self { chart, ..self },
            DashboardEvent::ThemeToggled => Self {
                theme: self.theme.toggled(),
                ..self
            },
            DashboardEvent::HistoryInvalidated => Self {
                generation: self.generation.wrapping_add(1),
                ..self
            },
        }
    }
}
