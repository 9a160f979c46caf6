//! Unit / level / pair records consumed by the game.
//!
//! A `Unit` arrives from the host already loaded (usually as JSON). The game
//! logic treats it as immutable and assumes it passed [`Unit::validate`]:
//! at least one level, every level non-empty, concepts unique per level.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod sample;

pub use sample::sample_unit;

/// One concept and the definition it must be dropped on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub concept: String,
    pub definition: String,
}

impl Pair {
    pub fn new(concept: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            definition: definition.into(),
        }
    }
}

/// Level descriptor (immutable once loaded). `concept` is the matching key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub pairs: Vec<Pair>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Display title shown above the board.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub intro: String,
    pub levels: Vec<Level>,
}

#[derive(Debug, Error)]
pub enum UnitError {
    #[error("failed to parse unit data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unit has no levels")]
    NoLevels,
    #[error("level {index} ('{name}') has no pairs")]
    EmptyLevel { index: usize, name: String },
    #[error("level {index} ('{name}') repeats concept '{concept}'")]
    DuplicateConcept {
        index: usize,
        name: String,
        concept: String,
    },
}

impl Unit {
    /// Parse a unit from JSON and reject structurally invalid data.
    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        let unit: Unit = serde_json::from_str(json)?;
        unit.validate()?;
        Ok(unit)
    }

    pub fn validate(&self) -> Result<(), UnitError> {
        if self.levels.is_empty() {
            return Err(UnitError::NoLevels);
        }
        for (index, level) in self.levels.iter().enumerate() {
            if level.pairs.is_empty() {
                return Err(UnitError::EmptyLevel {
                    index,
                    name: level.name.clone(),
                });
            }
            let mut seen = HashSet::new();
            for pair in &level.pairs {
                if !seen.insert(pair.concept.as_str()) {
                    return Err(UnitError::DuplicateConcept {
                        index,
                        name: level.name.clone(),
                        concept: pair.concept.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
