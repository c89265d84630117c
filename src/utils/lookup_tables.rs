//! Rating Lookup Tables
//!
//! Threshold profiles, display icons and key enumerations used by every view.
//! Built once at startup (`RatingConfig::default()`) and passed by reference
//! into the classifiers and view builders; nothing reads these tables globally.

use crate::hitzones::types::{ElementKey, WeaponKey, ZoneKey};
use crate::utils::thresholds::ThresholdProfile;

// ============================================================================
// EMBEDDED ICON DATA
// ============================================================================

static WEAPON_ICONS: [&str; 3] = ["⚔️", "🔨", "🎯"];

static ELEMENT_ICONS: [&str; 5] = ["🔥", "💧", "⚡", "❄️", "🐉"];

static STATUS_ICONS: &[(&str, &str)] = &[
    ("poison", "☠️"),
    ("paralysis", "⚡"),
    ("sleep", "😴"),
    ("stun", "💫"),
    ("exhaust", "🌀"),
    ("blast", "💥"),
    ("jump", "🦘"),
    ("mount", "🧗"),
];

/// Tabs in the order they are reported and merged
static TAB_NAMES: [&str; 2] = ["A", "B"];

/// Immutable rating configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
    pub raw: ThresholdProfile,
    pub element: ThresholdProfile,
    pub status: ThresholdProfile,
    pub weapon_icons: [String; 3],
    pub element_icons: [String; 5],
    /// Known status keys with their icons, in legend order
    pub status_icons: Vec<(String, String)>,
    pub tab_names: Vec<String>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            raw: ThresholdProfile::RAW,
            element: ThresholdProfile::ELEMENT,
            status: ThresholdProfile::STATUS,
            weapon_icons: WEAPON_ICONS.map(String::from),
            element_icons: ELEMENT_ICONS.map(String::from),
            status_icons: STATUS_ICONS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            tab_names: TAB_NAMES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl RatingConfig {
    pub fn weapon_icon(&self, key: WeaponKey) -> &str {
        &self.weapon_icons[key.index()]
    }

    pub fn element_icon(&self, key: ElementKey) -> &str {
        &self.element_icons[key.index()]
    }

    pub fn zone_icon(&self, key: ZoneKey) -> &str {
        match key {
            ZoneKey::Weapon(k) => self.weapon_icon(k),
            ZoneKey::Element(k) => self.element_icon(k),
        }
    }

    /// Profile a field is rated under: raw for weapons, element for elements
    pub fn profile_for(&self, key: ZoneKey) -> &ThresholdProfile {
        match key {
            ZoneKey::Weapon(_) => &self.raw,
            ZoneKey::Element(_) => &self.element,
        }
    }

    /// Case-insensitive status icon lookup; unknown keys render as themselves.
    pub fn status_icon<'a>(&'a self, key: &'a str) -> &'a str {
        self.status_icons
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, icon)| icon.as_str())
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles() {
        let cfg = RatingConfig::default();
        assert_eq!(cfg.raw, ThresholdProfile::RAW);
        assert_eq!(cfg.element, ThresholdProfile::ELEMENT);
        assert_eq!(cfg.status, ThresholdProfile::STATUS);
        assert_eq!(cfg.profile_for(ZoneKey::Weapon(WeaponKey::Shot)), &ThresholdProfile::RAW);
        assert_eq!(cfg.profile_for(ZoneKey::Element(ElementKey::Ice)), &ThresholdProfile::ELEMENT);
    }

    #[test]
    fn test_icons() {
        let cfg = RatingConfig::default();
        assert_eq!(cfg.weapon_icon(WeaponKey::Cut), "⚔️");
        assert_eq!(cfg.weapon_icon(WeaponKey::Shot), "🎯");
        assert_eq!(cfg.element_icon(ElementKey::Fire), "🔥");
        assert_eq!(cfg.element_icon(ElementKey::Dragon), "🐉");
        assert_eq!(cfg.zone_icon(ZoneKey::Element(ElementKey::Thunder)), "⚡");
    }

    #[test]
    fn test_status_icon_case_insensitive() {
        let cfg = RatingConfig::default();
        assert_eq!(cfg.status_icon("poison"), "☠️");
        assert_eq!(cfg.status_icon("Poison"), "☠️");
        assert_eq!(cfg.status_icon("SLEEP"), "😴");
    }

    #[test]
    fn test_status_icon_fallback() {
        let cfg = RatingConfig::default();
        assert_eq!(cfg.status_icon("confusion"), "confusion");
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(RatingConfig::default().tab_names, vec!["A", "B"]);
    }
}
