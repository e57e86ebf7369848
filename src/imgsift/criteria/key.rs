//! Sort keys and their comparators.
//!
//! Comparators are ascending and total. Direction lives elsewhere: the
//! criterion's `default_descending` and the caller's `reverse` flag.

use crate::hash::{self, HashFamily, HashValue};
use crate::model::MediaRecord;
use std::cmp::Ordering;

/// The derived key a criterion orders and buckets by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Every record compares equal: discovery order.
    Identity,
    Text(String),
    Number(u64),
    /// `(primary, secondary, bytes)` for width/height composites.
    Dims {
        primary: u64,
        secondary: u64,
        bytes: u64,
    },
    /// A categorical value with the capture date as tie-break.
    Pair { value: String, date: String },
    /// A decoded hash; `width` is the source length, kept for labels.
    Hash {
        family: HashFamily,
        value: HashValue,
        width: usize,
    },
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Identity => 0,
            SortKey::Text(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Dims { .. } => 3,
            SortKey::Pair { .. } => 4,
            SortKey::Hash { .. } => 5,
        }
    }

    pub(crate) fn hash(record: &MediaRecord, family: HashFamily, reversed: bool) -> Self {
        let source = record.hash(family);
        let value = if reversed {
            hash::decode_reversed(source, family.alphabet())
        } else {
            hash::decode(source, family.alphabet())
        };
        SortKey::Hash {
            family,
            value,
            width: source.chars().count(),
        }
    }
}

/// Keys of different shapes only meet if a registry entry is miswired;
/// ordering them by shape keeps the comparison total.
fn mismatched(a: &SortKey, b: &SortKey) -> Ordering {
    a.rank().cmp(&b.rank())
}

pub fn cmp_identity(_: &SortKey, _: &SortKey) -> Ordering {
    Ordering::Equal
}

pub fn cmp_text(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        _ => mismatched(a, b),
    }
}

pub fn cmp_number(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
        _ => mismatched(a, b),
    }
}

pub fn cmp_dims(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (
            SortKey::Dims {
                primary: p1,
                secondary: s1,
                bytes: b1,
            },
            SortKey::Dims {
                primary: p2,
                secondary: s2,
                bytes: b2,
            },
        ) => (p1, s1, b1).cmp(&(p2, s2, b2)),
        _ => mismatched(a, b),
    }
}

pub fn cmp_pair(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (
            SortKey::Pair {
                value: v1,
                date: d1,
            },
            SortKey::Pair {
                value: v2,
                date: d2,
            },
        ) => v1.cmp(v2).then_with(|| d1.cmp(d2)),
        _ => mismatched(a, b),
    }
}

/// Decoded numeric order; source width never breaks ties.
pub fn cmp_hash(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Hash { value: v1, .. }, SortKey::Hash { value: v2, .. }) => v1.cmp(v2),
        _ => mismatched(a, b),
    }
}
