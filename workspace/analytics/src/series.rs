use common::SoilSeriesPoint;
use tracing::instrument;

use crate::record::{NormalizedRecord, SoilParameter};

/// Number of most recent records plotted in the soil parameter series.
pub const SERIES_WINDOW: usize = 10;

/// pH is multiplied by this factor so it shares an axis with N/P/K.
pub const PH_SCALE: f64 = 10.0;

/// Soil parameter time series over the most recent `window` records.
///
/// The history arrives newest first; the selected window is returned oldest
/// first so the chart reads left to right. Shorter histories are used as is.
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn recent_series(records: &[NormalizedRecord], window: usize) -> Vec<SoilSeriesPoint> {
    records
        .iter()
        .take(window)
        .rev()
        .map(|record| SoilSeriesPoint {
            name: record.prediction_date.clone(),
            nitrogen: record.soil.value(SoilParameter::Nitrogen),
            phosphorus: record.soil.value(SoilParameter::Phosphorus),
            potassium: record.soil.value(SoilParameter::Potassium),
            ph: record.soil.value(SoilParameter::Ph) * PH_SCALE,
        })
        .collect()
}
