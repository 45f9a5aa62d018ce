use common::RadarPoint;

use crate::record::{NormalizedRecord, SoilParameter};
use crate::series::PH_SCALE;

/// Radar axes in display order, with their fixed chart ceilings.
pub const RADAR_SUBJECTS: [(SoilParameter, f64); 6] = [
    (SoilParameter::Nitrogen, 150.0),
    (SoilParameter::Phosphorus, 150.0),
    (SoilParameter::Potassium, 150.0),
    (SoilParameter::Ph, 140.0),
    (SoilParameter::Rainfall, 300.0),
    (SoilParameter::Temperature, 50.0),
];

/// Radar profile of the most recent record, `None` for an empty history.
pub fn radar_snapshot(records: &[NormalizedRecord]) -> Option<Vec<RadarPoint>> {
    records.first().map(radar_profile)
}

/// Six-axis profile of a single record.
pub fn radar_profile(record: &NormalizedRecord) -> Vec<RadarPoint> {
    RADAR_SUBJECTS
        .iter()
        .map(|&(param, full_mark)| {
            let value = record.soil.value(param);
            RadarPoint {
                subject: param.label().to_string(),
                value: if param == SoilParameter::Ph { value * PH_SCALE } else { value },
                full_mark,
            }
        })
        .collect()
}
