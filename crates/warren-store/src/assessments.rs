//! Finalized assessment records.
//!
//! Records are created once at finalization and never mutated; deletion
//! removes the whole record. The `result` string is usually the scoring
//! engine's JSON payload but can be legacy free text; the store does not
//! look inside it.

use uuid::Uuid;

use warren_core::models::assessment::AssessmentRecord;

use crate::documents;
use crate::error::StoreError;
use crate::Store;

#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub animal_id: Uuid,
    pub date: jiff::civil::Date,
    pub scale_name: String,
    pub result: String,
}

impl Store {
    pub async fn save_assessment(
        &self,
        new: NewAssessment,
    ) -> Result<AssessmentRecord, StoreError> {
        // The registry is the referential anchor; refuse orphan records.
        let animal = self.get_animal(new.animal_id).await?;

        let record = AssessmentRecord {
            id: Uuid::new_v4(),
            animal_id: new.animal_id,
            date: new.date,
            scale_name: new.scale_name,
            result: new.result,
            created_at: jiff::Timestamp::now(),
        };

        let path = self.assessments_path(new.animal_id);
        let mut records: Vec<AssessmentRecord> = documents::load(&path).await?;
        records.push(record.clone());
        documents::save(&path, &records).await?;

        tracing::info!(
            id = %record.id,
            animal = %animal.name,
            scale = %record.scale_name,
            date = %record.date,
            "assessment saved"
        );
        Ok(record)
    }

    /// All assessments for one animal, most recent date first. Same-date
    /// records keep insertion order within the date.
    pub async fn list_assessments(
        &self,
        animal_id: Uuid,
    ) -> Result<Vec<AssessmentRecord>, StoreError> {
        let mut records: Vec<AssessmentRecord> =
            documents::load(&self.assessments_path(animal_id)).await?;
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// Delete one assessment by record id, wherever it lives.
    pub async fn delete_assessment(&self, record_id: Uuid) -> Result<(), StoreError> {
        let animals = self.list_animals().await?;
        for animal in &animals {
            let path = self.assessments_path(animal.id);
            let mut records: Vec<AssessmentRecord> = documents::load(&path).await?;
            let before = records.len();
            records.retain(|r| r.id != record_id);
            if records.len() != before {
                documents::save(&path, &records).await?;
                tracing::info!(id = %record_id, animal = %animal.name, "assessment deleted");
                return Ok(());
            }
        }
        Err(StoreError::AssessmentNotFound(record_id))
    }
}
