//! View Models for Monster API
//!
//! Structured output of the three view builders. Field names are part of the
//! JSON contract; the text formatter renders from the same structs.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::hitzones::ranking::RankedPart;
use crate::hitzones::types::{ElementKey, StatusEntry, WeaponKey, ZoneKey, ZoneValue};
use crate::utils::thresholds::StarRating;

/// Insertion-ordered key/value pairs, serialized as a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedMap<K, V>(pub Vec<(K, V)>);

impl<K, V> KeyedMap<K, V> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, V)> {
        self.0.iter()
    }
}

impl<K: PartialEq, V> KeyedMap<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<K, V> Default for KeyedMap<K, V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K, V> FromIterator<(K, V)> for KeyedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: AsRef<str>, V: Serialize> Serialize for KeyedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k.as_ref() as &str, v)?;
        }
        map.end()
    }
}

// ============================================================================
// Plain view
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlainView {
    pub name: String,
    pub slug: String,
    pub url: Option<String>,
    pub tabs: KeyedMap<String, Vec<PlainRow>>,
    pub status: KeyedMap<String, StatusEntry>,
}

/// A row echoed as-is: `{"part": ..., <key>: <value>, ...}` for present keys only
#[derive(Debug, Clone, PartialEq)]
pub struct PlainRow {
    pub part: String,
    pub values: Vec<(ZoneKey, ZoneValue)>,
}

impl Serialize for PlainRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("part", &self.part)?;
        for (k, v) in &self.values {
            let key: &str = k.as_ref();
            map.serialize_entry(key, v)?;
        }
        map.end()
    }
}

// ============================================================================
// Shared ranked pieces
// ============================================================================

/// Full per-part breakdown of present values with their ratings
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PartBreakdown {
    pub part: String,
    pub raw: KeyedMap<WeaponKey, ZoneValue>,
    pub element: KeyedMap<ElementKey, ZoneValue>,
    pub stars: KeyedMap<ZoneKey, StarRating>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StatusSummary {
    pub key: String,
    pub icon: String,
    pub initial: ZoneValue,
    pub stars: StarRating,
}

// ============================================================================
// Per-tab ranked view
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankedView {
    pub name: String,
    pub slug: String,
    pub url: Option<String>,
    pub tabs: KeyedMap<String, TabSummary>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TabSummary {
    pub best_raw: Vec<RankedPart>,
    pub best_elem: BestElement,
    pub parts: Vec<PartBreakdown>,
    pub status: Vec<StatusSummary>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BestElement {
    pub element: ElementKey,
    pub icon: String,
    pub top: Vec<RankedPart>,
}

// ============================================================================
// Collapsed ranked view
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CollapsedView {
    pub name: String,
    pub slug: String,
    pub url: Option<String>,
    pub header: CollapsedHeader,
    pub parts: Vec<PartBreakdown>,
    pub status: Vec<StatusSummary>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, Default)]
pub struct CollapsedHeader {
    pub best_weapons: Vec<KeyBest>,
    pub best_elements: Vec<KeyBest>,
}

/// Top-1 part for a single field
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct KeyBest {
    pub key: ZoneKey,
    pub icon: String,
    pub part: String,
    pub value: ZoneValue,
    pub stars: StarRating,
}
