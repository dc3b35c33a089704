use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A persisted assessment outcome, keyed by animal and date.
///
/// `result` is opaque to the store: current records hold the JSON payload
/// produced by the scoring engine, but legacy records can hold free text.
/// The report projection decides which shape it is looking at.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub animal_id: Uuid,
    pub date: jiff::civil::Date,
    pub scale_name: String,
    pub result: String,
    pub created_at: jiff::Timestamp,
}
