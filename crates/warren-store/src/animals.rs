//! The animal registry.

use uuid::Uuid;

use warren_core::error::CoreError;
use warren_core::models::animal::{Animal, Sex};
use warren_core::models::weight::WeightTarget;

use crate::documents;
use crate::error::StoreError;
use crate::Store;

/// Fields supplied when registering an animal; everything else is derived.
#[derive(Debug, Clone)]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birthday: Option<jiff::civil::Date>,
    pub sex: Option<Sex>,
    pub castrated: Option<bool>,
}

impl Store {
    pub async fn add_animal(&self, new: NewAnimal) -> Result<Animal, StoreError> {
        let now = jiff::Timestamp::now();
        let animal = Animal {
            id: Uuid::new_v4(),
            name: new.name,
            species: new.species,
            breed: new.breed,
            birthday: new.birthday,
            sex: new.sex,
            castrated: new.castrated,
            current_weight: None,
            target: None,
            created_at: now,
            updated_at: now,
        };

        let mut animals: Vec<Animal> = documents::load(&self.animals_path()).await?;
        animals.push(animal.clone());
        documents::save(&self.animals_path(), &animals).await?;

        tracing::info!(id = %animal.id, name = %animal.name, species = %animal.species, "animal registered");
        Ok(animal)
    }

    pub async fn get_animal(&self, id: Uuid) -> Result<Animal, StoreError> {
        let animals: Vec<Animal> = documents::load(&self.animals_path()).await?;
        animals
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(StoreError::AnimalNotFound(id))
    }

    /// All animals, ordered by name.
    pub async fn list_animals(&self) -> Result<Vec<Animal>, StoreError> {
        let mut animals: Vec<Animal> = documents::load(&self.animals_path()).await?;
        animals.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(animals)
    }

    /// Remove an animal and its record documents.
    pub async fn delete_animal(&self, id: Uuid) -> Result<(), StoreError> {
        let mut animals: Vec<Animal> = documents::load(&self.animals_path()).await?;
        let before = animals.len();
        animals.retain(|a| a.id != id);
        if animals.len() == before {
            return Err(StoreError::AnimalNotFound(id));
        }
        documents::save(&self.animals_path(), &animals).await?;

        let dir = self.root().join(id.to_string());
        if dir.exists() {
            tokio::fs::remove_dir_all(&dir).await?;
        }

        tracing::info!(id = %id, "animal deleted");
        Ok(())
    }

    /// Set or replace the animal's weight target wholesale. No history of
    /// past targets is kept.
    pub async fn set_weight_target(
        &self,
        id: Uuid,
        target: WeightTarget,
    ) -> Result<Animal, StoreError> {
        if target.target_weight <= 0.0 {
            return Err(CoreError::NonPositiveWeight(target.target_weight).into());
        }
        self.update_animal(id, |animal| animal.target = Some(target))
            .await
    }

    pub async fn clear_weight_target(&self, id: Uuid) -> Result<Animal, StoreError> {
        self.update_animal(id, |animal| animal.target = None).await
    }

    pub(crate) async fn update_animal(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut Animal),
    ) -> Result<Animal, StoreError> {
        let mut animals: Vec<Animal> = documents::load(&self.animals_path()).await?;
        let animal = animals
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::AnimalNotFound(id))?;

        apply(animal);
        animal.updated_at = jiff::Timestamp::now();
        let updated = animal.clone();

        documents::save(&self.animals_path(), &animals).await?;
        Ok(updated)
    }
}
