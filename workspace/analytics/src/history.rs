use common::{CategoryCount, RadarPoint, RawRecord, SoilSeriesPoint, SummaryStats};
use serde::Serialize;

use crate::dashboard::ChartKind;
use crate::distribution::{distribution_by, CategoryField};
use crate::normalize::Normalizer;
use crate::radar::radar_snapshot;
use crate::record::NormalizedRecord;
use crate::series::{recent_series, SERIES_WINDOW};
use crate::summary::summarize;

/// Chart-ready output for one chart selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", content = "data", rename_all = "snake_case")]
pub enum ChartData {
    CropDistribution(Vec<CategoryCount>),
    SoilSeries(Vec<SoilSeriesPoint>),
    FertilizerDistribution(Vec<CategoryCount>),
    Radar(Vec<RadarPoint>),
}

/// A normalized prediction history and every projection views draw from
/// it. Projections are recomputed on each call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryAnalytics {
    records: Vec<NormalizedRecord>,
}

impl HistoryAnalytics {
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    pub fn from_raw(raw: Vec<RawRecord>, normalizer: &Normalizer) -> Self {
        Self::new(normalizer.normalize(raw))
    }

    /// Normalized records, newest first, for tabular display.
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn distribution_by(&self, field: CategoryField) -> Vec<CategoryCount> {
        distribution_by(&self.records, field)
    }

    pub fn recent_series(&self) -> Vec<SoilSeriesPoint> {
        recent_series(&self.records, SERIES_WINDOW)
    }

    pub fn radar_snapshot(&self) -> Option<Vec<RadarPoint>> {
        radar_snapshot(&self.records)
    }

    pub fn summarize(&self) -> SummaryStats {
        summarize(&self.records)
    }

    /// Projection backing `chart`; `None` for an empty history, which views
    /// render as their empty state instead.
    pub fn project(&self, chart: ChartKind) -> Option<ChartData> {
        if self.is_empty() {
            return None;
        }

        let data = match chart {
            ChartKind::Crop => ChartData::CropDistribution(self.distribution_by(CategoryField::Crop)),
            ChartKind::Soil => ChartData::SoilSeries(self.recent_series()),
            ChartKind::Fertilizer => {
                ChartData::FertilizerDistribution(self.distribution_by(CategoryField::Fertilizer))
            }
            ChartKind::Radar => ChartData::Radar(self.radar_snapshot()?),
        };
        Some(data)
    }
}
