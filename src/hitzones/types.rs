//! Shared data types for hitzone views.
//!
//! Data sources:
//! - Monster records: `monsters` object of the dataset JSON (see `data.rs`)
//! - Body-part rows: `tabs.A` / `tabs.B` arrays of each monster
//! - Status entries: `status` object of each monster
//!
//! Everything here is built once at load time and never mutated afterwards.

use serde::Serialize;
use std::fmt;

/// Weapon damage type. Fixed order: cut, blunt, shot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WeaponKey {
    Cut,
    Blunt,
    Shot,
}

impl WeaponKey {
    pub const ALL: [WeaponKey; 3] = [WeaponKey::Cut, WeaponKey::Blunt, WeaponKey::Shot];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Element type. Fixed order: fire, water, thunder, ice, dragon.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ElementKey {
    Fire,
    Water,
    Thunder,
    Ice,
    Dragon,
}

impl ElementKey {
    pub const ALL: [ElementKey; 5] = [
        ElementKey::Fire,
        ElementKey::Water,
        ElementKey::Thunder,
        ElementKey::Ice,
        ElementKey::Dragon,
    ];

    /// Picked when no element clears the element profile anywhere
    pub const FALLBACK: ElementKey = ElementKey::Ice;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Any hitzone field: one weapon type or one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneKey {
    Weapon(WeaponKey),
    Element(ElementKey),
}

impl ZoneKey {
    /// All eight keys, weapons first, each family in its fixed order
    pub fn all() -> impl Iterator<Item = ZoneKey> {
        WeaponKey::ALL
            .into_iter()
            .map(ZoneKey::Weapon)
            .chain(ElementKey::ALL.into_iter().map(ZoneKey::Element))
    }
}

impl AsRef<str> for ZoneKey {
    fn as_ref(&self) -> &str {
        match self {
            ZoneKey::Weapon(k) => k.as_ref(),
            ZoneKey::Element(k) => k.as_ref(),
        }
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl Serialize for ZoneKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl From<WeaponKey> for ZoneKey {
    fn from(k: WeaponKey) -> Self {
        ZoneKey::Weapon(k)
    }
}

impl From<ElementKey> for ZoneKey {
    fn from(k: ElementKey) -> Self {
        ZoneKey::Element(k)
    }
}

/// A usable numeric value: finite and strictly positive.
///
/// Produced only by [`ZoneValue::new`], so holding one means the presence
/// check already happened at ingestion.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ZoneValue(f64);

impl ZoneValue {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Presence predicate over a raw JSON value: a number greater than zero.
    /// Strings, booleans, null and non-positive numbers are absent.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_f64().and_then(Self::new)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Larger of two optional values; `None` never wins over a present value
    pub fn max_present(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(x), Some(y)) => Some(if y.0 > x.0 { y } else { x }),
            (x, None) => x,
            (None, y) => y,
        }
    }

    fn as_integer(self) -> Option<i64> {
        // 2^53: beyond this f64 no longer represents every integer
        (self.0.fract() == 0.0 && self.0 < 9_007_199_254_740_992.0).then_some(self.0 as i64)
    }
}

impl fmt::Display for ZoneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(i) => write!(f, "{}", i),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for ZoneValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// One body-part row of a tab, with every field already normalized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyPartRecord {
    /// Part label; may be empty when the source row had neither spelling
    pub part: String,
    pub raw: [Option<ZoneValue>; 3],
    pub element: [Option<ZoneValue>; 5],
}

impl BodyPartRecord {
    pub fn new(part: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter, mostly for tests and fixtures
    pub fn with(mut self, key: impl Into<ZoneKey>, value: f64) -> Self {
        self.set(key.into(), ZoneValue::new(value));
        self
    }

    pub fn value(&self, key: impl Into<ZoneKey>) -> Option<ZoneValue> {
        match key.into() {
            ZoneKey::Weapon(k) => self.raw[k.index()],
            ZoneKey::Element(k) => self.element[k.index()],
        }
    }

    pub fn set(&mut self, key: ZoneKey, value: Option<ZoneValue>) {
        match key {
            ZoneKey::Weapon(k) => self.raw[k.index()] = value,
            ZoneKey::Element(k) => self.element[k.index()] = value,
        }
    }

    /// True when the row carries no weapon or element value at all
    pub fn is_blank(&self) -> bool {
        self.raw.iter().chain(self.element.iter()).all(Option::is_none)
    }
}

/// One status ailment of a monster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusEntry {
    #[serde(skip)]
    pub key: String,
    pub initial: ZoneValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increase: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<serde_json::Number>,
}

impl StatusEntry {
    pub fn new(key: impl Into<String>, initial: ZoneValue) -> Self {
        Self {
            key: key.into(),
            initial,
            increase: None,
            max: None,
            duration: None,
            damage: None,
        }
    }
}

/// One data tab ("A" or "B") in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tab {
    pub name: String,
    pub rows: Vec<BodyPartRecord>,
}

/// A monster with all of its tabs and status entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonsterRecord {
    pub name: String,
    pub slug: String,
    pub url: Option<String>,
    pub tabs: Vec<Tab>,
    /// Document order of the source `status` object
    pub status: Vec<StatusEntry>,
}

impl MonsterRecord {
    /// Rows of a named tab; missing tabs read as empty
    pub fn tab_rows(&self, name: &str) -> &[BodyPartRecord] {
        self.tabs
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.rows.as_slice())
            .unwrap_or(&[])
    }
}
