//! Weight history.
//!
//! Each animal's measurements live in one document, kept sorted ascending
//! by `(date, seq)`. The `seq` counter makes same-date records ordered:
//! insertion order wins, so the current weight is always the last record.
//! Adding or deleting a measurement also refreshes the registry's
//! `current_weight` so list views stay consistent.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warren_core::models::weight::WeightRecord;
use warren_core::progress;

use crate::documents;
use crate::error::StoreError;
use crate::Store;

#[derive(Debug, Default, Serialize, Deserialize)]
struct WeightDoc {
    next_seq: u64,
    records: Vec<WeightRecord>,
}

impl Store {
    pub async fn add_weight(
        &self,
        animal_id: Uuid,
        date: jiff::civil::Date,
        weight: f64,
    ) -> Result<WeightRecord, StoreError> {
        self.get_animal(animal_id).await?;

        let path = self.weights_path(animal_id);
        let mut doc: WeightDoc = documents::load(&path).await?;

        let record = WeightRecord::new(doc.next_seq, date, weight)?;
        doc.next_seq += 1;
        doc.records.push(record);
        doc.records.sort_by_key(|r| (r.date, r.seq));
        documents::save(&path, &doc).await?;

        let current = progress::current_weight(&doc.records);
        self.update_animal(animal_id, |animal| animal.current_weight = current)
            .await?;

        tracing::info!(animal_id = %animal_id, date = %date, weight, "weight recorded");
        Ok(record)
    }

    /// History sorted ascending by `(date, seq)`, the order the progress
    /// computation expects.
    pub async fn weight_history(&self, animal_id: Uuid) -> Result<Vec<WeightRecord>, StoreError> {
        let doc: WeightDoc = documents::load(&self.weights_path(animal_id)).await?;
        Ok(doc.records)
    }

    pub async fn delete_weight(&self, animal_id: Uuid, seq: u64) -> Result<(), StoreError> {
        let path = self.weights_path(animal_id);
        let mut doc: WeightDoc = documents::load(&path).await?;

        let before = doc.records.len();
        doc.records.retain(|r| r.seq != seq);
        if doc.records.len() == before {
            return Err(StoreError::WeightNotFound { animal_id, seq });
        }
        documents::save(&path, &doc).await?;

        let current = progress::current_weight(&doc.records);
        self.update_animal(animal_id, |animal| animal.current_weight = current)
            .await?;

        tracing::info!(animal_id = %animal_id, seq, "weight record deleted");
        Ok(())
    }
}
