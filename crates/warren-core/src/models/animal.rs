use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::weight::WeightTarget;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Animal {
    pub id: Uuid,
    pub name: String,
    /// Free text; only the six species with built-in scales get assessment
    /// support, everything else still gets weight tracking.
    pub species: String,
    pub breed: Option<String>,
    pub birthday: Option<jiff::civil::Date>,
    pub sex: Option<Sex>,
    pub castrated: Option<bool>,
    /// Derived: weight of the most recent weight record. Kept on the animal
    /// so list views don't have to load the history document.
    pub current_weight: Option<f64>,
    /// At most one active target; replaced wholesale, no history kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<WeightTarget>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}
