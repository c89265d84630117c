use crate::hitzones::ranking::RankedPart;
use crate::hitzones::types::{WeaponKey, ZoneKey};
use crate::hitzones::view_models::{CollapsedView, KeyBest, PartBreakdown, RankedView, StatusSummary};
use crate::utils::lookup_tables::RatingConfig;

/// Line-oriented text formatter for the ranked views
pub struct TextFormatter;

impl TextFormatter {
    /// Format a per-tab ranked view
    pub fn format_ranked(view: &RankedView, config: &RatingConfig) -> String {
        let mut lines = vec![view.name.clone()];

        for (tab, summary) in view.tabs.iter() {
            lines.push(String::new());
            lines.push(format!("== Tab {} ==", tab));

            if !summary.best_raw.is_empty() {
                lines.push(format!(
                    "Best raw: {}",
                    Self::ranked_list(&summary.best_raw, config.weapon_icon(WeaponKey::Cut))
                ));
            }
            if !summary.best_elem.top.is_empty() {
                lines.push(format!(
                    "Best {} {}: {}",
                    summary.best_elem.icon,
                    summary.best_elem.element,
                    Self::ranked_list(&summary.best_elem.top, &summary.best_elem.icon)
                ));
            }

            lines.extend(summary.parts.iter().filter_map(|p| Self::part_line(p, config)));
            lines.extend(Self::status_line(&summary.status));
        }

        lines.join("\n")
    }

    /// Format a collapsed ranked view
    pub fn format_collapsed(view: &CollapsedView, config: &RatingConfig) -> String {
        let mut lines = vec![view.name.clone()];

        if !view.header.best_weapons.is_empty() {
            lines.push(format!("Weapons: {}", Self::key_best_list(&view.header.best_weapons)));
        }
        if !view.header.best_elements.is_empty() {
            lines.push(format!("Elements: {}", Self::key_best_list(&view.header.best_elements)));
        }

        lines.extend(view.parts.iter().filter_map(|p| Self::part_line(p, config)));
        lines.extend(Self::status_line(&view.status));

        lines.join("\n")
    }

    /// `<part>: <icon><stars> ... | <icon><stars> ...`, rated keys only.
    /// Returns `None` when neither block has a rated key.
    pub fn part_line(part: &PartBreakdown, config: &RatingConfig) -> Option<String> {
        let mut weapons = Vec::new();
        let mut elements = Vec::new();

        for (key, stars) in part.stars.iter() {
            if !stars.is_rated() {
                continue;
            }
            let cell = format!("{}{}", config.zone_icon(*key), stars);
            match key {
                ZoneKey::Weapon(_) => weapons.push(cell),
                ZoneKey::Element(_) => elements.push(cell),
            }
        }

        let blocks: Vec<String> = [weapons, elements]
            .into_iter()
            .filter(|b| !b.is_empty())
            .map(|b| b.join(" "))
            .collect();

        if blocks.is_empty() {
            None
        } else {
            Some(format!("{}: {}", part.part, blocks.join(" | ")))
        }
    }

    /// `Status: <icon><stars> ...` when any entry qualified
    pub fn status_line(status: &[StatusSummary]) -> Option<String> {
        if status.is_empty() {
            return None;
        }
        let cells: Vec<String> = status
            .iter()
            .map(|s| format!("{}{}", s.icon, s.stars))
            .collect();
        Some(format!("Status: {}", cells.join(" ")))
    }

    fn ranked_list(parts: &[RankedPart], icon: &str) -> String {
        parts
            .iter()
            .map(|r| format!("{} {}{}", r.part, icon, r.stars))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn key_best_list(best: &[KeyBest]) -> String {
        best.iter()
            .map(|b| format!("{} {} {}", b.icon, b.part, b.stars))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
