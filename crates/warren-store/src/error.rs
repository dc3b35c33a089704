use thiserror::Error;
use uuid::Uuid;

use warren_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("animal not found: {0}")]
    AnimalNotFound(Uuid),

    #[error("assessment not found: {0}")]
    AssessmentNotFound(Uuid),

    #[error("weight record not found: animal {animal_id}, seq {seq}")]
    WeightNotFound { animal_id: Uuid, seq: u64 },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}
