//! Stable ordering of the visible set.
//!
//! Keys are derived once per record. The sort is `slice::sort_by`, which is
//! stable, so records with equal keys keep their discovery order. Display
//! direction is a single reversal of the whole sequence after comparison.

use crate::criteria::{Criterion, SortKey};
use crate::model::MediaRecord;

/// A visible record paired with its derived key.
#[derive(Debug, Clone)]
pub struct SortedEntry<'a> {
    pub key: SortKey,
    pub record: &'a MediaRecord,
}

pub fn sort<'a>(
    visible: Vec<&'a MediaRecord>,
    criterion: &Criterion,
    reverse: bool,
) -> Vec<SortedEntry<'a>> {
    let mut entries: Vec<SortedEntry<'a>> = visible
        .into_iter()
        .map(|record| SortedEntry {
            key: criterion.key_of(record),
            record,
        })
        .collect();

    entries.sort_by(|a, b| criterion.directed_cmp(&a.key, &b.key));

    if reverse {
        entries.reverse();
    }
    entries
}
