//! Record normalization.
//!
//! Turns loosely-typed JSON rows into [`BodyPartRecord`]s / [`StatusEntry`]s
//! and extracts the present values of a record for display. Malformed input is
//! never an error: bad fields are simply absent.

use serde_json::Value;

use crate::hitzones::types::{
    BodyPartRecord, ElementKey, MonsterRecord, StatusEntry, Tab, WeaponKey, ZoneKey, ZoneValue,
};
use crate::utils::thresholds::{classify, StarRating, ThresholdProfile};

/// Source field spellings of a row's part name, in priority order
const PART_FIELDS: [&str; 2] = ["part", "name"];

// ============================================================================
// Present-value extraction
// ============================================================================

/// Weapon values that are present, in cut/blunt/shot order.
pub fn present_weapon_values(record: &BodyPartRecord) -> Vec<(WeaponKey, ZoneValue)> {
    WeaponKey::ALL
        .into_iter()
        .filter_map(|k| record.raw[k.index()].map(|v| (k, v)))
        .collect()
}

/// Element values that are present, in fire/water/thunder/ice/dragon order.
pub fn present_element_values(record: &BodyPartRecord) -> Vec<(ElementKey, ZoneValue)> {
    ElementKey::ALL
        .into_iter()
        .filter_map(|k| record.element[k.index()].map(|v| (k, v)))
        .collect()
}

/// Classify each present value. Unrated results are kept.
pub fn stars_for<K: Copy>(
    present: &[(K, ZoneValue)],
    profile: &ThresholdProfile,
) -> Vec<(K, StarRating)> {
    present
        .iter()
        .map(|&(k, v)| (k, classify(v.get(), profile)))
        .collect()
}

/// Part label of a raw row: first non-empty string among the accepted spellings.
pub fn part_label(row: &Value) -> Option<&str> {
    PART_FIELDS
        .iter()
        .filter_map(|field| row.get(field).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
}

// ============================================================================
// Ingestion
// ============================================================================

/// Normalize one raw tab row. Non-object rows become a blank, unnamed record.
pub fn body_part_from_json(row: &Value) -> BodyPartRecord {
    let mut record = BodyPartRecord::new(part_label(row).unwrap_or_default());
    for key in ZoneKey::all() {
        let field: &str = key.as_ref();
        let value = row.get(field).and_then(ZoneValue::from_json);
        record.set(key, value);
    }
    record
}

/// Normalize the `tabs` object of a monster, keeping document order.
pub fn tabs_from_json(tabs: Option<&Value>) -> Vec<Tab> {
    let Some(obj) = tabs.and_then(Value::as_object) else {
        return Vec::new();
    };

    obj.iter()
        .map(|(name, rows)| Tab {
            name: name.clone(),
            rows: rows
                .as_array()
                .map(|arr| arr.iter().map(body_part_from_json).collect())
                .unwrap_or_default(),
        })
        .collect()
}

/// Normalize the `status` object of a monster.
///
/// Entries are kept only when `initial` is a positive number; the optional
/// numeric details ride along untouched.
pub fn status_from_json(status: Option<&Value>) -> Vec<StatusEntry> {
    let Some(obj) = status.and_then(Value::as_object) else {
        return Vec::new();
    };

    obj.iter()
        .filter_map(|(key, entry)| {
            let initial = entry.get("initial").and_then(ZoneValue::from_json)?;
            let number = |field: &str| match entry.get(field) {
                Some(Value::Number(n)) => Some(n.clone()),
                _ => None,
            };
            Some(StatusEntry {
                key: key.clone(),
                initial,
                increase: number("increase"),
                max: number("max"),
                duration: number("duration"),
                damage: number("damage"),
            })
        })
        .collect()
}

/// Normalize a whole monster object.
pub fn monster_from_json(value: &Value) -> MonsterRecord {
    let str_field = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let name = str_field("name")
        .or_else(|| str_field("slug"))
        .unwrap_or("Monster")
        .to_string();
    let slug = str_field("slug")
        .map(str::to_string)
        .unwrap_or_else(|| slugify(&name));

    MonsterRecord {
        name,
        slug,
        url: str_field("url").map(str::to_string),
        tabs: tabs_from_json(value.get("tabs")),
        status: status_from_json(value.get("status")),
    }
}

/// Lowercase, collapse every run of non `[a-z0-9]` into `-`, trim dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_label_spellings() {
        assert_eq!(part_label(&json!({"part": "Head"})), Some("Head"));
        assert_eq!(part_label(&json!({"name": "Tail"})), Some("Tail"));
        // First non-empty wins
        assert_eq!(part_label(&json!({"part": "", "name": "Wing"})), Some("Wing"));
        assert_eq!(part_label(&json!({"part": "Neck", "name": "Back"})), Some("Neck"));
        assert_eq!(part_label(&json!({"part": 3})), None);
        assert_eq!(part_label(&json!({})), None);
    }

    #[test]
    fn test_body_part_presence_rules() {
        let row = json!({
            "part": "Head",
            "cut": 45,
            "blunt": 0,
            "shot": -5,
            "fire": "20",
            "water": null,
            "thunder": 12.5,
            "dragon": 30
        });
        let record = body_part_from_json(&row);
        assert_eq!(record.part, "Head");

        let weapons = present_weapon_values(&record);
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].0, WeaponKey::Cut);
        assert_eq!(weapons[0].1.get(), 45.0);

        let elements: Vec<ElementKey> =
            present_element_values(&record).into_iter().map(|(k, _)| k).collect();
        assert_eq!(elements, vec![ElementKey::Thunder, ElementKey::Dragon]);
    }

    #[test]
    fn test_non_object_row_is_blank() {
        let record = body_part_from_json(&json!("garbage"));
        assert_eq!(record.part, "");
        assert!(record.is_blank());
    }

    #[test]
    fn test_stars_for_keeps_unrated() {
        let record = BodyPartRecord::new("Leg")
            .with(WeaponKey::Cut, 50.0)
            .with(WeaponKey::Shot, 10.0);
        let stars = stars_for(&present_weapon_values(&record), &ThresholdProfile::RAW);
        assert_eq!(
            stars,
            vec![(WeaponKey::Cut, StarRating::Three), (WeaponKey::Shot, StarRating::Unrated)]
        );
    }

    #[test]
    fn test_status_filtering_and_order() {
        let status = json!({
            "sleep": {"initial": 150, "increase": 100, "max": 550, "duration": 40},
            "poison": {"initial": 0},
            "blast": {"initial": "70"},
            "stun": {"initial": 200, "damage": 0}
        });
        let entries = status_from_json(Some(&status));
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["sleep", "stun"]);
        assert_eq!(entries[0].initial.get(), 150.0);
        assert_eq!(entries[0].increase.as_ref().and_then(|n| n.as_i64()), Some(100));
        assert!(entries[0].damage.is_none());
        assert_eq!(entries[1].damage.as_ref().and_then(|n| n.as_i64()), Some(0));
    }

    #[test]
    fn test_tabs_keep_document_order() {
        let tabs = json!({
            "B": [{"part": "Tail", "cut": 30}],
            "A": [{"part": "Head", "cut": 45}],
            "C": "not an array"
        });
        let parsed = tabs_from_json(Some(&tabs));
        let names: Vec<&str> = parsed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert!(parsed[2].rows.is_empty());
    }

    #[test]
    fn test_monster_name_and_slug_fallbacks() {
        let m = monster_from_json(&json!({"name": "Gore Magala"}));
        assert_eq!(m.name, "Gore Magala");
        assert_eq!(m.slug, "gore-magala");
        assert!(m.url.is_none());

        let m = monster_from_json(&json!({"slug": "rathalos", "url": "https://example.org/rath"}));
        assert_eq!(m.name, "rathalos");
        assert_eq!(m.url.as_deref(), Some("https://example.org/rath"));

        let m = monster_from_json(&json!({}));
        assert_eq!(m.name, "Monster");
        assert_eq!(m.slug, "monster");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hyper Rathalos"), "hyper-rathalos");
        assert_eq!(slugify("  Deviant: Hellblade Glavenus!! "), "deviant-hellblade-glavenus");
        assert_eq!(slugify("Zinogre (G)"), "zinogre-g");
        assert_eq!(slugify("!!!"), "");
    }
}
