//! Partitioning of the sorted sequence into labeled buckets.
//!
//! Buckets are created in first-seen order during one traversal of the sorted
//! sequence. The reserved ungrouped bucket always comes first and survives
//! pruning even when empty; every other bucket exists only for one pass.

use super::sort::SortedEntry;
use crate::criteria::Criterion;
use crate::model::Bucket;
use std::collections::HashMap;

/// A bucket label (`None` for the reserved bucket) with its members.
pub type Slot<T> = (Option<String>, Vec<T>);

/// Buckets of one pass, with the reserved bucket at index 0.
#[derive(Debug)]
pub struct BucketSet<T> {
    slots: Vec<Slot<T>>,
    by_label: HashMap<String, usize>,
}

impl<T> Default for BucketSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BucketSet<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![(None, Vec::new())],
            by_label: HashMap::new(),
        }
    }

    pub fn ungrouped(&mut self) -> &mut Vec<T> {
        &mut self.slots[0].1
    }

    /// Members of the bucket labeled `label`, appended after all existing
    /// buckets if new.
    pub fn find_or_create(&mut self, label: &str) -> &mut Vec<T> {
        let index = match self.by_label.get(label) {
            Some(&index) => index,
            None => {
                self.slots.push((Some(label.to_string()), Vec::new()));
                let index = self.slots.len() - 1;
                self.by_label.insert(label.to_string(), index);
                index
            }
        };
        &mut self.slots[index].1
    }

    /// Drops empty transient buckets and returns the rest in creation order.
    pub fn prune_empty(self) -> Vec<Slot<T>> {
        self.slots
            .into_iter()
            .filter(|(label, members)| label.is_none() || !members.is_empty())
            .collect()
    }
}

/// Groups the sorted entries themselves, keeping them borrowable for captions.
pub fn group_entries<'s, 'a>(
    sorted: &'s [SortedEntry<'a>],
    criterion: &Criterion,
    enabled: bool,
) -> Vec<Slot<&'s SortedEntry<'a>>> {
    let mut set = BucketSet::new();
    for entry in sorted {
        let members = if enabled {
            set.find_or_create(&criterion.label_of(&entry.key))
        } else {
            set.ungrouped()
        };
        members.push(entry);
    }
    set.prune_empty()
}

pub fn group(sorted: &[SortedEntry], criterion: &Criterion, enabled: bool) -> Vec<Bucket> {
    group_entries(sorted, criterion, enabled)
        .into_iter()
        .map(|(label, entries)| Bucket {
            label,
            members: entries.iter().map(|e| e.record.id.clone()).collect(),
        })
        .collect()
}
