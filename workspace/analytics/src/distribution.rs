use common::CategoryCount;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::record::NormalizedRecord;

/// Categorical field a distribution is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Crop,
    Fertilizer,
}

impl CategoryField {
    pub fn select(self, record: &NormalizedRecord) -> Option<&str> {
        match self {
            CategoryField::Crop => record.crop.as_deref(),
            CategoryField::Fertilizer => record.fertilizer.as_deref(),
        }
    }
}

/// Counts records per distinct value of `field`.
///
/// Records without a value are skipped. Buckets appear in the order their
/// value is first seen.
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn distribution_by(records: &[NormalizedRecord], field: CategoryField) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for name in records.iter().filter_map(|r| field.select(r)) {
        match positions.get(name) {
            Some(&index) => counts[index].value += 1,
            None => {
                positions.insert(name, counts.len());
                counts.push(CategoryCount {
                    name: name.to_string(),
                    value: 1,
                });
            }
        }
    }

    debug!("{:?} distribution has {} buckets", field, counts.len());
    counts
}
