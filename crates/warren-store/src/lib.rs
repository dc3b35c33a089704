//! warren-store
//!
//! Record persistence: the animal registry, per-animal assessment records,
//! and per-animal weight history, all as JSON documents under a local data
//! directory. The store treats assessment result payloads opaquely: the
//! scoring engine writes them, the report projection interprets them.
//!
//! Layout:
//!
//! ```text
//! <root>/animals.json               registry of all animals
//! <root>/<animal-id>/assessments.json
//! <root>/<animal-id>/weights.json
//! ```
//!
//! Access is serialized per animal by the surrounding application (one
//! interactive surface per animal record set); the store itself does
//! load-modify-save with atomic writes and no locking.

pub mod animals;
pub mod assessments;
pub mod error;
pub mod weights;

mod documents;

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::StoreError;

pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open (creating if needed) a data directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn animals_path(&self) -> PathBuf {
        self.root.join("animals.json")
    }

    fn assessments_path(&self, animal_id: Uuid) -> PathBuf {
        self.root.join(animal_id.to_string()).join("assessments.json")
    }

    fn weights_path(&self, animal_id: Uuid) -> PathBuf {
        self.root.join(animal_id.to_string()).join("weights.json")
    }
}
