//! Tab merging.
//!
//! Collapses the rows of several tabs into one record per part name. Each
//! field keeps the largest value seen for that part; rows keep first-seen
//! order (all of the first tab, then the new parts of the next).

use rustc_hash::FxHashMap;

use crate::hitzones::types::{BodyPartRecord, ZoneKey, ZoneValue};

/// Merge two tabs into one ordered, deduplicated-by-part sequence.
pub fn merge_tabs(tab_a: &[BodyPartRecord], tab_b: &[BodyPartRecord]) -> Vec<BodyPartRecord> {
    merge_all([tab_a, tab_b])
}

/// Merge any number of tabs in the given order. Unnamed rows are skipped.
pub fn merge_all<'a, I>(tabs: I) -> Vec<BodyPartRecord>
where
    I: IntoIterator<Item = &'a [BodyPartRecord]>,
{
    let mut merged: Vec<BodyPartRecord> = Vec::new();
    let mut position: FxHashMap<String, usize> = FxHashMap::default();

    for row in tabs.into_iter().flatten() {
        if row.part.is_empty() {
            continue;
        }

        match position.get(&row.part) {
            Some(&idx) => absorb(&mut merged[idx], row),
            None => {
                position.insert(row.part.clone(), merged.len());
                merged.push(row.clone());
            }
        }
    }

    merged
}

/// Field-wise max of `other` into `target`
fn absorb(target: &mut BodyPartRecord, other: &BodyPartRecord) {
    for key in ZoneKey::all() {
        let best = ZoneValue::max_present(target.value(key), other.value(key));
        target.set(key, best);
    }
}
