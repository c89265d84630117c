//! Legend: the constant rating tables, echoed for clients.

use serde::Serialize;

use crate::hitzones::types::{ElementKey, WeaponKey};
use crate::utils::lookup_tables::RatingConfig;
use crate::utils::thresholds::{
    serialize_cut_point, ThresholdProfile, STATUS_ONE_MAX, STATUS_THREE_MAX, STATUS_TWO_MAX,
};

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub weapons: Vec<LegendEntry>,
    pub elements: Vec<LegendEntry>,
    pub statuses: Vec<LegendEntry>,
    pub thresholds: LegendThresholds,
    pub notes: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendThresholds {
    pub raw: ThresholdProfile,
    pub element: ThresholdProfile,
    pub status_initial: StatusBands,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBands {
    #[serde(serialize_with = "serialize_cut_point")]
    pub three_max: f64,
    #[serde(serialize_with = "serialize_cut_point")]
    pub two_max: f64,
    #[serde(serialize_with = "serialize_cut_point")]
    pub one_max: f64,
}

const NOTES: [&str; 4] = [
    "Weapons: cut/blunt/shot use RAW thresholds (higher is better).",
    "Elements use ELEMENT thresholds (higher is better).",
    "Statuses use initial build-up values (lower is better).",
    "Any value below ★ threshold is omitted in outputs.",
];

pub fn build_legend(config: &RatingConfig) -> Legend {
    Legend {
        weapons: WeaponKey::ALL
            .into_iter()
            .map(|k| entry(k.as_ref(), config.weapon_icon(k)))
            .collect(),
        elements: ElementKey::ALL
            .into_iter()
            .map(|k| entry(k.as_ref(), config.element_icon(k)))
            .collect(),
        statuses: config
            .status_icons
            .iter()
            .map(|(k, icon)| entry(k, icon))
            .collect(),
        thresholds: LegendThresholds {
            raw: config.raw,
            element: config.element,
            status_initial: StatusBands {
                three_max: STATUS_THREE_MAX,
                two_max: STATUS_TWO_MAX,
                one_max: STATUS_ONE_MAX,
            },
        },
        notes: NOTES.to_vec(),
    }
}

fn entry(key: &str, icon: &str) -> LegendEntry {
    LegendEntry {
        key: key.to_string(),
        label: label_for(key),
        icon: icon.to_string(),
    }
}

/// `exhaust` -> `Exhaust`, `dragon_blight` -> `Dragon Blight`
fn label_for(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_tables() {
        let legend = build_legend(&RatingConfig::default());
        assert_eq!(legend.weapons.len(), 3);
        assert_eq!(legend.weapons[0].key, "cut");
        assert_eq!(legend.weapons[0].label, "Cut");
        assert_eq!(legend.elements[4].icon, "🐉");
        assert_eq!(legend.statuses.len(), 8);
        assert_eq!(legend.notes.len(), 4);
    }

    #[test]
    fn test_legend_json_thresholds() {
        let json = serde_json::to_value(build_legend(&RatingConfig::default())).unwrap();
        assert_eq!(json["thresholds"]["raw"], serde_json::json!({"one": 25, "two": 35, "three": 45}));
        assert_eq!(json["thresholds"]["element"]["three"], 25);
        assert_eq!(json["thresholds"]["status_initial"]["two_max"], 300);

        let text = serde_json::to_string(&build_legend(&RatingConfig::default())).unwrap();
        assert!(text.contains(r#""three":45"#));
        assert!(text.contains(r#""three_max":150"#));
        assert!(!text.contains("45.0"));
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for("paralysis"), "Paralysis");
        assert_eq!(label_for("dragon_blight"), "Dragon Blight");
    }
}
