//! Data Loading and Management
//!
//! Loads the hitzone dataset (one JSON document) into typed monster records.
//! The dataset is read once at startup and shared read-only afterwards.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::hitzones::normalize::{monster_from_json, slugify};
use crate::hitzones::types::MonsterRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset has no `monsters` object")]
    MissingMonsters,
}

/// All monsters of the dataset, in document order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub monsters: Vec<MonsterRecord>,
}

impl Dataset {
    /// Load and normalize the dataset JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        tracing::info!("Loading dataset from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_value(&value)
    }

    /// Normalize an already-parsed document.
    ///
    /// Only a missing `monsters` object is fatal; malformed monsters and rows
    /// are normalized to empty values instead.
    pub fn from_value(value: &Value) -> Result<Self, DatasetError> {
        let monsters = value
            .get("monsters")
            .and_then(Value::as_object)
            .ok_or(DatasetError::MissingMonsters)?;

        let monsters: Vec<MonsterRecord> = monsters
            .iter()
            .filter_map(|(id, monster)| {
                if !monster.is_object() {
                    tracing::debug!("Skipping monster '{}': not an object", id);
                    return None;
                }
                Some(monster_from_json(monster))
            })
            .collect();

        let rows: usize = monsters
            .iter()
            .flat_map(|m| m.tabs.iter())
            .map(|t| t.rows.len())
            .sum();
        tracing::info!("  Monsters: {}", monsters.len());
        tracing::info!("  Body-part rows: {}", rows);

        Ok(Self { monsters })
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Resolve a monster by slug, then name, then slugified query (all case-insensitive)
    pub fn find(&self, query: &str) -> Option<&MonsterRecord> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.monsters
            .iter()
            .find(|m| m.slug.eq_ignore_ascii_case(query))
            .or_else(|| self.monsters.iter().find(|m| m.name.eq_ignore_ascii_case(query)))
            .or_else(|| {
                let slug = slugify(query);
                self.monsters.iter().find(|m| m.slug == slug)
            })
    }
}
