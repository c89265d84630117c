//! View Builder - Converts monster records to view models
//!
//! Three variants share the same building blocks:
//! - Plain: present values per tab, echoed without ratings
//! - Per-tab ranked: best raw / best element / breakdown / status per tab
//! - Collapsed ranked: tabs merged first, then top-1 per field
//!
//! All builders are pure and never fail; missing data yields empty sections.

use crate::hitzones::merge::merge_all;
use crate::hitzones::normalize::{present_element_values, present_weapon_values, stars_for};
use crate::hitzones::ranking::{best_element_key, top_for_key};
use crate::hitzones::types::{BodyPartRecord, ElementKey, MonsterRecord, StatusEntry, WeaponKey, ZoneKey};
use crate::hitzones::view_models::*;
use crate::utils::lookup_tables::RatingConfig;
use crate::utils::thresholds::classify_or_absent;

const BEST_RAW_COUNT: usize = 3;
const BEST_ELEMENT_COUNT: usize = 2;

// ============================================================================
// Plain
// ============================================================================

/// Present values of every tab, no merging and no stars.
pub fn build_plain_view(monster: &MonsterRecord, config: &RatingConfig) -> PlainView {
    let tabs = config
        .tab_names
        .iter()
        .filter_map(|name| {
            let rows: Vec<PlainRow> = monster
                .tab_rows(name)
                .iter()
                .filter_map(plain_row)
                .collect();
            (!rows.is_empty()).then(|| (name.clone(), rows))
        })
        .collect();

    PlainView {
        name: monster.name.clone(),
        slug: monster.slug.clone(),
        url: monster.url.clone(),
        tabs,
        status: monster
            .status
            .iter()
            .map(|entry| (entry.key.clone(), entry.clone()))
            .collect(),
    }
}

/// Rows carrying nothing but a name are dropped
fn plain_row(record: &BodyPartRecord) -> Option<PlainRow> {
    let values: Vec<_> = ZoneKey::all()
        .filter_map(|k| record.value(k).map(|v| (k, v)))
        .collect();
    (!values.is_empty()).then(|| PlainRow {
        part: record.part.clone(),
        values,
    })
}

// ============================================================================
// Per-tab ranked
// ============================================================================

/// One independent summary block per non-empty tab.
pub fn build_ranked_view(monster: &MonsterRecord, config: &RatingConfig) -> RankedView {
    let tabs = config
        .tab_names
        .iter()
        .filter_map(|name| {
            let rows = monster.tab_rows(name);
            (!rows.is_empty()).then(|| (name.clone(), build_tab_summary(rows, &monster.status, config)))
        })
        .collect();

    RankedView {
        name: monster.name.clone(),
        slug: monster.slug.clone(),
        url: monster.url.clone(),
        tabs,
    }
}

fn build_tab_summary(
    rows: &[BodyPartRecord],
    status: &[StatusEntry],
    config: &RatingConfig,
) -> TabSummary {
    let element = best_element_key(rows, &config.element);

    TabSummary {
        best_raw: top_for_key(rows, WeaponKey::Cut, &config.raw, BEST_RAW_COUNT),
        best_elem: BestElement {
            element,
            icon: config.element_icon(element).to_string(),
            top: top_for_key(rows, element, &config.element, BEST_ELEMENT_COUNT),
        },
        parts: build_breakdown(rows, config),
        status: build_status_summary(status, config),
    }
}

// ============================================================================
// Collapsed ranked
// ============================================================================

/// Tabs merged into one block, headed by the best part per field.
pub fn build_collapsed_view(monster: &MonsterRecord, config: &RatingConfig) -> CollapsedView {
    let merged = merge_all(config.tab_names.iter().map(|name| monster.tab_rows(name)));

    CollapsedView {
        name: monster.name.clone(),
        slug: monster.slug.clone(),
        url: monster.url.clone(),
        header: CollapsedHeader {
            best_weapons: WeaponKey::ALL
                .into_iter()
                .filter_map(|k| key_best(&merged, k.into(), config))
                .collect(),
            best_elements: ElementKey::ALL
                .into_iter()
                .filter_map(|k| key_best(&merged, k.into(), config))
                .collect(),
        },
        parts: build_breakdown(&merged, config),
        status: build_status_summary(&monster.status, config),
    }
}

fn key_best(rows: &[BodyPartRecord], key: ZoneKey, config: &RatingConfig) -> Option<KeyBest> {
    let top = top_for_key(rows, key, config.profile_for(key), 1).into_iter().next()?;
    Some(KeyBest {
        key,
        icon: config.zone_icon(key).to_string(),
        part: top.part,
        value: top.value,
        stars: top.stars,
    })
}

// ============================================================================
// Shared sections
// ============================================================================

/// Per-part present values with ratings; unnamed rows and rows with nothing
/// present are dropped.
pub fn build_breakdown(rows: &[BodyPartRecord], config: &RatingConfig) -> Vec<PartBreakdown> {
    rows.iter()
        .filter(|record| !record.part.is_empty())
        .filter_map(|record| {
            let raw = present_weapon_values(record);
            let element = present_element_values(record);
            if raw.is_empty() && element.is_empty() {
                return None;
            }

            let stars = stars_for(&raw, &config.raw)
                .into_iter()
                .map(|(k, s)| (ZoneKey::from(k), s))
                .chain(
                    stars_for(&element, &config.element)
                        .into_iter()
                        .map(|(k, s)| (ZoneKey::from(k), s)),
                )
                .collect();

            Some(PartBreakdown {
                part: record.part.clone(),
                raw: KeyedMap(raw),
                element: KeyedMap(element),
                stars,
            })
        })
        .collect()
}

/// Rated status entries in dataset order; unrated ones are dropped.
pub fn build_status_summary(status: &[StatusEntry], config: &RatingConfig) -> Vec<StatusSummary> {
    status
        .iter()
        .filter_map(|entry| {
            let stars = classify_or_absent(entry.initial.get(), &config.status)?;
            Some(StatusSummary {
                key: entry.key.clone(),
                icon: config.status_icon(&entry.key).to_string(),
                initial: entry.initial,
                stars,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hitzones::types::{Tab, ZoneValue};
    use crate::utils::thresholds::StarRating;

    fn status(key: &str, initial: f64) -> StatusEntry {
        StatusEntry::new(key, ZoneValue::new(initial).unwrap())
    }

    fn monster() -> MonsterRecord {
        MonsterRecord {
            name: "Rathalos".to_string(),
            slug: "rathalos".to_string(),
            url: Some("https://example.org/rathalos".to_string()),
            tabs: vec![
                Tab {
                    name: "A".to_string(),
                    rows: vec![
                        BodyPartRecord::new("Head")
                            .with(WeaponKey::Cut, 50.0)
                            .with(WeaponKey::Blunt, 45.0)
                            .with(ElementKey::Dragon, 20.0),
                        BodyPartRecord::new("Wing").with(WeaponKey::Cut, 38.0).with(ElementKey::Dragon, 25.0),
                        BodyPartRecord::new("Tail").with(WeaponKey::Cut, 44.0).with(WeaponKey::Shot, 15.0),
                        BodyPartRecord::new("Back").with(WeaponKey::Cut, 20.0),
                        BodyPartRecord::new("Scar"),
                    ],
                },
                Tab {
                    name: "B".to_string(),
                    rows: vec![
                        BodyPartRecord::new("Head").with(ElementKey::Fire, 22.0),
                        BodyPartRecord::new("Leg").with(WeaponKey::Shot, 30.0).with(ElementKey::Thunder, 18.0),
                    ],
                },
            ],
            status: vec![status("poison", 120.0), status("sleep", 600.0), status("Blast", 70.0)],
        }
    }

    #[test]
    fn test_plain_view() {
        let view = build_plain_view(&monster(), &RatingConfig::default());
        assert_eq!(view.tabs.len(), 2);
        let a = view.tabs.get(&"A".to_string()).unwrap();
        // "Scar" has nothing but a name
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|r| r.part != "Scar"));
        assert_eq!(a[0].values.len(), 3);
        // Plain status keeps everything present, even unrated build-ups
        assert_eq!(view.status.len(), 3);
    }

    #[test]
    fn test_plain_view_skips_empty_tabs() {
        let mut m = monster();
        m.tabs[1].rows.clear();
        let view = build_plain_view(&m, &RatingConfig::default());
        assert_eq!(view.tabs.len(), 1);
        assert!(view.tabs.get(&"B".to_string()).is_none());
    }

    #[test]
    fn test_ranked_view_tab_a() {
        let view = build_ranked_view(&monster(), &RatingConfig::default());
        let a = view.tabs.get(&"A".to_string()).unwrap();

        let best_raw: Vec<&str> = a.best_raw.iter().map(|r| r.part.as_str()).collect();
        assert_eq!(best_raw, vec!["Head", "Tail", "Wing"]);

        assert_eq!(a.best_elem.element, ElementKey::Dragon);
        assert_eq!(a.best_elem.icon, "🐉");
        let top: Vec<&str> = a.best_elem.top.iter().map(|r| r.part.as_str()).collect();
        assert_eq!(top, vec!["Wing", "Head"]);

        // Back has a present (unrated) cut value; Scar has nothing
        let parts: Vec<&str> = a.parts.iter().map(|p| p.part.as_str()).collect();
        assert_eq!(parts, vec!["Head", "Wing", "Tail", "Back"]);
        let back = &a.parts[3];
        assert_eq!(back.stars.get(&ZoneKey::Weapon(WeaponKey::Cut)), Some(&StarRating::Unrated));
    }

    #[test]
    fn test_ranked_view_tabs_are_independent() {
        let view = build_ranked_view(&monster(), &RatingConfig::default());
        let b = view.tabs.get(&"B".to_string()).unwrap();
        assert!(b.best_raw.is_empty());
        // Fire 22 beats Thunder 18 in tab B alone
        assert_eq!(b.best_elem.element, ElementKey::Fire);
        assert_eq!(b.parts.len(), 2);
    }

    #[test]
    fn test_collapsed_view_merges_tabs() {
        let view = build_collapsed_view(&monster(), &RatingConfig::default());
        let parts: Vec<&str> = view.parts.iter().map(|p| p.part.as_str()).collect();
        assert_eq!(parts, vec!["Head", "Wing", "Tail", "Back", "Leg"]);

        let head = &view.parts[0];
        assert_eq!(head.raw.get(&WeaponKey::Cut).map(|v| v.get()), Some(50.0));
        assert_eq!(head.element.get(&ElementKey::Fire).map(|v| v.get()), Some(22.0));
        assert_eq!(head.stars.get(&ZoneKey::Element(ElementKey::Fire)), Some(&StarRating::Two));
    }

    #[test]
    fn test_collapsed_header() {
        let view = build_collapsed_view(&monster(), &RatingConfig::default());
        let weapons: Vec<(String, &str)> = view
            .header
            .best_weapons
            .iter()
            .map(|b| (b.key.to_string(), b.part.as_str()))
            .collect();
        assert_eq!(
            weapons,
            vec![
                ("cut".to_string(), "Head"),
                ("blunt".to_string(), "Head"),
                ("shot".to_string(), "Leg"),
            ]
        );

        let elements: Vec<String> = view.header.best_elements.iter().map(|b| b.key.to_string()).collect();
        // No water or ice anywhere
        assert_eq!(elements, vec!["fire", "thunder", "dragon"]);
    }

    #[test]
    fn test_status_summary() {
        let summary = build_status_summary(&monster().status, &RatingConfig::default());
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].key, "poison");
        assert_eq!(summary[0].icon, "☠️");
        assert_eq!(summary[0].stars, StarRating::Three);
        // Icon lookup ignores case
        assert_eq!(summary[1].key, "Blast");
        assert_eq!(summary[1].icon, "💥");

        let json = serde_json::to_value(&summary[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"key": "poison", "icon": "☠️", "initial": 120, "stars": "★★★"})
        );
    }

    #[test]
    fn test_status_unknown_key_icon() {
        let summary = build_status_summary(&[status("confusion", 200.0)], &RatingConfig::default());
        assert_eq!(summary[0].icon, "confusion");
        assert_eq!(summary[0].stars, StarRating::Two);
    }

    #[test]
    fn test_unnamed_rows_left_out_of_ranked_tab() {
        let m = MonsterRecord {
            name: "Khezu".to_string(),
            slug: "khezu".to_string(),
            tabs: vec![Tab {
                name: "A".to_string(),
                rows: vec![
                    BodyPartRecord::new("").with(WeaponKey::Cut, 70.0),
                    BodyPartRecord::new("Neck").with(WeaponKey::Cut, 50.0),
                ],
            }],
            ..Default::default()
        };
        let cfg = RatingConfig::default();
        let view = build_ranked_view(&m, &cfg);
        let tab = view.tabs.get(&"A".to_string()).unwrap();
        assert_eq!(tab.best_raw.len(), 1);
        assert_eq!(tab.best_raw[0].part, "Neck");
        assert!(tab.parts.iter().all(|p| !p.part.is_empty()));

        let text = crate::hitzones::formatters::TextFormatter::format_ranked(&view, &cfg);
        assert!(text.lines().all(|line| !line.starts_with(": ")));
    }

    #[test]
    fn test_empty_monster() {
        let m = MonsterRecord {
            name: "Nobody".to_string(),
            slug: "nobody".to_string(),
            ..Default::default()
        };
        let cfg = RatingConfig::default();
        assert!(build_plain_view(&m, &cfg).tabs.is_empty());
        assert!(build_ranked_view(&m, &cfg).tabs.is_empty());
        let collapsed = build_collapsed_view(&m, &cfg);
        assert!(collapsed.parts.is_empty());
        assert!(collapsed.header.best_weapons.is_empty());
        assert!(collapsed.status.is_empty());
    }
}
