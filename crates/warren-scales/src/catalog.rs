//! The scale catalog: which scales exist for which species.
//!
//! Catalog content is fixed at build time. The catalog is an immutable
//! value passed by reference to whoever needs it: load it once at startup
//! with [`ScaleCatalog::builtin`], or build a fixture with
//! [`ScaleCatalog::new`] in tests. There is deliberately no global.

use crate::error::ScaleError;
use crate::scoring::ScaleDefinition;
use crate::species;

pub struct SpeciesScales {
    pub species: String,
    pub scales: Vec<ScaleDefinition>,
}

pub struct ScaleCatalog {
    entries: Vec<SpeciesScales>,
}

impl ScaleCatalog {
    pub fn new(entries: Vec<SpeciesScales>) -> Self {
        Self { entries }
    }

    /// The full built-in catalog: six species, 2–3 scales each. Scale and
    /// band ordering is part of the contract; do not reorder.
    pub fn builtin() -> Self {
        Self::new(vec![
            SpeciesScales {
                species: "Rat".to_string(),
                scales: species::rat::scales(),
            },
            SpeciesScales {
                species: "Mouse".to_string(),
                scales: species::mouse::scales(),
            },
            SpeciesScales {
                species: "Rabbit".to_string(),
                scales: species::rabbit::scales(),
            },
            SpeciesScales {
                species: "Goat".to_string(),
                scales: species::goat::scales(),
            },
            SpeciesScales {
                species: "Sheep".to_string(),
                scales: species::sheep::scales(),
            },
            SpeciesScales {
                species: "Pig".to_string(),
                scales: species::pig::scales(),
            },
        ])
    }

    pub fn species(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.species.as_str()).collect()
    }

    /// Scale names for a species, in declaration order. A species without
    /// entries yields an empty vec; callers treat that as "no scale
    /// available", not an error.
    pub fn list_scales(&self, species: &str) -> Vec<&str> {
        self.entries
            .iter()
            .find(|e| e.species == species)
            .map(|e| e.scales.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Look up one scale. Never fabricates a fallback: a miss is a miss,
    /// and the caller decides whether to abort or offer a generic flow.
    pub fn lookup(&self, species: &str, name: &str) -> Result<&ScaleDefinition, ScaleError> {
        self.entries
            .iter()
            .find(|e| e.species == species)
            .and_then(|e| e.scales.iter().find(|s| s.name == name))
            .ok_or_else(|| ScaleError::UnknownScale {
                species: species.to_string(),
                name: name.to_string(),
            })
    }
}
