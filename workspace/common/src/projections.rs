use serde::{Deserialize, Serialize};

/// Number of records sharing one category label (crop or fertilizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

/// One point of the soil parameter time series.
///
/// `ph` is already scaled ×10 so it shares an axis with N/P/K.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSeriesPoint {
    /// Display date of the record
    pub name: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

/// One axis of the radar snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    /// Scaled reading
    #[serde(rename = "A")]
    pub value: f64,
    /// Fixed chart ceiling for this subject
    #[serde(rename = "fullMark")]
    pub full_mark: f64,
}

/// Scalar metrics over the whole history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_predictions: usize,
    pub unique_crops: usize,
    pub unique_fertilizers: usize,
    /// `None` when no record carries a usable pH
    pub average_ph: Option<f64>,
}

impl SummaryStats {
    /// Average pH with two decimals, or `"N/A"` when it is undefined.
    pub fn average_ph_display(&self) -> String {
        match self.average_ph {
            Some(ph) => format!("{:.2}", ph),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_radar_point_wire_names() {
        let point = RadarPoint {
            subject: "pH".to_string(),
            value: 65.0,
            full_mark: 140.0,
        };
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            json!({"subject": "pH", "A": 65.0, "fullMark": 140.0})
        );
    }

    #[test]
    fn test_summary_wire_names() {
        let stats = SummaryStats {
            total_predictions: 3,
            unique_crops: 2,
            unique_fertilizers: 0,
            average_ph: None,
        };
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "totalPredictions": 3,
                "uniqueCrops": 2,
                "uniqueFertilizers": 0,
                "averagePh": null
            })
        );
    }

    #[test]
    fn test_average_ph_display() {
        let mut stats = SummaryStats::default();
        assert_eq!(stats.average_ph_display(), "N/A");

        stats.average_ph = Some(6.75);
        assert_eq!(stats.average_ph_display(), "6.75");

        stats.average_ph = Some(6.5);
        assert_eq!(stats.average_ph_display(), "6.50");
    }
}
