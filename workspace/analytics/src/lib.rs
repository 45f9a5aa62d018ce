//! Prediction history analytics.
//!
//! Raw backend records go through the [`Normalizer`] once; every chart and
//! statistic is then a pure projection over the normalized sequence,
//! recomputed whenever a view asks for it.

pub mod coerce;
pub mod dashboard;
pub mod date;
pub mod distribution;
pub mod error;
pub mod history;
pub mod normalize;
pub mod radar;
pub mod record;
pub mod series;
pub mod source;
pub mod summary;

#[cfg(test)]
mod testing;

pub use dashboard::{ChartKind, DashboardEvent, DashboardState, HistoryView, Theme};
pub use date::DateDisplay;
pub use distribution::CategoryField;
pub use error::FetchError;
pub use history::{ChartData, HistoryAnalytics};
pub use normalize::Normalizer;
pub use record::{NormalizedRecord, SoilParameter, SoilReadings};
pub use source::{load_history, BearerToken, HistorySource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::raw;
    use serde_json::json;

    /// End to end over a history mixing clean and broken records.
    #[test]
    fn test_pipeline_over_mixed_history() {
        let raw_history = vec![
            raw(json!({
                "prediction_date": "2024-06-30T09:30:00Z",
                "crop": "Rice",
                "fertilizer": "Urea",
                "soil_params_json": "{\"n\": 90, \"p\": 42, \"k\": 43, \"ph\": 6.5, \"rainfall\": 202.9, \"humidity\": 82, \"temperature\": 20.8}"
            })),
            raw(json!({"prediction_date": "garbage", "crop": "Wheat", "soil_params_json": "not-json"})),
            raw(json!("not even an object")),
            raw(json!({"prediction_date": "2024-06-28", "crop": "Rice", "soil_params_json": "{\"ph\": \"7.0\"}"})),
        ];

        let history = HistoryAnalytics::from_raw(raw_history, &Normalizer::default());
        assert_eq!(history.len(), 4);
        assert_eq!(history.records()[1].prediction_date, "Unknown date");

        let crops = history.distribution_by(CategoryField::Crop);
        assert_eq!(crops.iter().map(|c| c.value).sum::<usize>(), 3);

        let series = history.recent_series();
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].name, "6/28/2024");
        assert_eq!(series[3].nitrogen, 90.0);

        let stats = history.summarize();
        assert_eq!(stats.total_predictions, 4);
        assert_eq!(stats.unique_crops, 2);
        assert_eq!(stats.unique_fertilizers, 1);
        assert_eq!(stats.average_ph_display(), "6.75");
    }
}
