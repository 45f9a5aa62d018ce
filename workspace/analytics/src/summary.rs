use common::SummaryStats;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

use crate::distribution::CategoryField;
use crate::record::{NormalizedRecord, SoilParameter};

/// Summary statistics over the whole history.
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn summarize(records: &[NormalizedRecord]) -> SummaryStats {
    let stats = SummaryStats {
        total_predictions: records.len(),
        unique_crops: unique_count(records, CategoryField::Crop),
        unique_fertilizers: unique_count(records, CategoryField::Fertilizer),
        average_ph: average_ph(records),
    };
    debug!(?stats, "Summary statistics computed");
    stats
}

fn unique_count(records: &[NormalizedRecord], field: CategoryField) -> usize {
    records
        .iter()
        .filter_map(|r| field.select(r))
        .collect::<HashSet<_>>()
        .len()
}

/// Mean pH over the records that carry a truthy `ph`.
///
/// The numerator sums the coerced pH of every record while the denominator
/// counts only truthy readings, so a numeric `0` reading is excluded and a
/// truthy non-numeric one counts as `0`. Returns `None` when nothing is
/// usable or the mean is not finite.
pub fn average_ph(records: &[NormalizedRecord]) -> Option<f64> {
    let usable = records
        .iter()
        .filter(|r| r.soil.is_usable(SoilParameter::Ph))
        .count();
    if usable == 0 {
        return None;
    }

    let sum: f64 = records.iter().map(|r| r.soil.value(SoilParameter::Ph)).sum();
    let average = sum / usable as f64;
    if !average.is_finite() {
        warn!(usable, "Average pH overflowed, reporting it as unavailable");
        return None;
    }
    Some(average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::testing::raw;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_summary_counts() {
        let records = normalize(vec![
            raw(json!({"crop": "Rice", "fertilizer": "Urea", "ph": "6.5"})),
            raw(json!({"crop": "Wheat", "soil_params_json": "not-json"})),
            raw(json!({"crop": "Rice", "fertilizer": "DAP", "ph": "7.0"})),
            raw(json!({"crop": "", "fertilizer": "Urea"})),
        ]);

        let stats = summarize(&records);
        assert_eq!(stats.total_predictions, 4);
        assert_eq!(stats.unique_crops, 2);
        assert_eq!(stats.unique_fertilizers, 2);
        assert_relative_eq!(stats.average_ph.unwrap(), 6.75);
        assert_eq!(stats.average_ph_display(), "6.75");
    }

    #[test]
    fn test_empty_history() {
        let stats = summarize(&[]);
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.average_ph_display(), "N/A");
    }

    #[test]
    fn test_all_ph_absent_has_no_average() {
        let records = normalize(vec![raw(json!({"crop": "Rice"})), raw(json!({"soil_params_json": "{}"}))]);
        assert_eq!(average_ph(&records), None);
        assert_eq!(summarize(&records).average_ph_display(), "N/A");
    }

    // Known quirk: a numeric zero pH reads as "missing" and is left out of
    // the denominator, while a non-numeric but non-empty value counts as 0.
    #[test]
    fn test_zero_ph_is_treated_as_missing() {
        let records = normalize(vec![
            raw(json!({"ph": 0})),
            raw(json!({"ph": "6.0"})),
            raw(json!({"ph": 8})),
        ]);
        assert_relative_eq!(average_ph(&records).unwrap(), 7.0);

        let records = normalize(vec![raw(json!({"ph": "0"})), raw(json!({"ph": "6.0"}))]);
        assert_relative_eq!(average_ph(&records).unwrap(), 3.0);

        let records = normalize(vec![raw(json!({"ph": "acidic"})), raw(json!({"ph": 6}))]);
        assert_relative_eq!(average_ph(&records).unwrap(), 3.0);

        let records = normalize(vec![raw(json!({"ph": 0}))]);
        assert_eq!(average_ph(&records), None);
    }

    #[test]
    fn test_overflowing_ph_sum_has_no_average() {
        let records = normalize(vec![raw(json!({"ph": "1.5e308"})), raw(json!({"ph": "1.5e308"}))]);
        let stats = summarize(&records);
        assert_eq!(stats.average_ph, None);
        assert_eq!(stats.average_ph_display(), "N/A");

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["averagePh"], serde_json::Value::Null);
    }
}
