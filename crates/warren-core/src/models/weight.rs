use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One weight measurement. `seq` is the insertion-order counter assigned by
/// the store; it breaks ties between records that share a date, so the
/// current weight of an animal is the last record ordered by `(date, seq)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightRecord {
    #[serde(default)]
    pub seq: u64,
    pub date: jiff::civil::Date,
    /// Kilograms, strictly positive.
    pub weight: f64,
}

impl WeightRecord {
    pub fn new(seq: u64, date: jiff::civil::Date, weight: f64) -> Result<Self, CoreError> {
        if weight <= 0.0 {
            return Err(CoreError::NonPositiveWeight(weight));
        }
        Ok(Self { seq, date, weight })
    }
}

/// An optional goal weight and date for an animal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightTarget {
    /// Kilograms, strictly positive.
    pub target_weight: f64,
    pub target_date: jiff::civil::Date,
}
