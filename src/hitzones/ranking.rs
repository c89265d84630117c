//! Top-k selection over body-part rows.

use serde::Serialize;

use crate::hitzones::types::{BodyPartRecord, ElementKey, ZoneKey, ZoneValue};
use crate::utils::thresholds::{classify_or_absent, StarRating, ThresholdProfile};

/// One ranked part for a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPart {
    pub part: String,
    pub value: ZoneValue,
    pub stars: StarRating,
}

/// Best `n` rows for `key`, rated under `profile`.
///
/// Unnamed and unrated rows are dropped; the rest are sorted by value descending. The sort
/// is stable, so equal values keep their input order.
pub fn top_for_key(
    records: &[BodyPartRecord],
    key: impl Into<ZoneKey>,
    profile: &ThresholdProfile,
    n: usize,
) -> Vec<RankedPart> {
    let key = key.into();
    let mut ranked: Vec<RankedPart> = records
        .iter()
        .filter(|record| !record.part.is_empty())
        .filter_map(|record| {
            let value = record.value(key)?;
            let stars = classify_or_absent(value.get(), profile)?;
            Some(RankedPart {
                part: record.part.clone(),
                value,
                stars,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.value.get().total_cmp(&a.value.get()));
    ranked.truncate(n);
    ranked
}

/// Element with the highest rated value across `records`.
///
/// Ties go to the earlier element in fire/water/thunder/ice/dragon order.
/// With no rated element at all the result is [`ElementKey::FALLBACK`].
pub fn best_element_key(records: &[BodyPartRecord], profile: &ThresholdProfile) -> ElementKey {
    let mut best = ElementKey::FALLBACK;
    let mut best_value = 0.0;

    for key in ElementKey::ALL {
        let candidate = records
            .iter()
            .filter(|r| !r.part.is_empty())
            .filter_map(|r| r.value(key))
            .map(ZoneValue::get)
            .filter(|v| classify_or_absent(*v, profile).is_some())
            .fold(0.0, f64::max);

        if candidate > best_value {
            best = key;
            best_value = candidate;
        }
    }

    best
}
