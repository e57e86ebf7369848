//! Free-text query filtering.
//!
//! A record is visible when the trimmed, case-folded query is empty or when
//! any of these holds:
//!
//! - an exact match on a categorical attribute (format, mode, width, height,
//!   bytes, id)
//! - a prefix match on a hierarchical attribute (date, make-model)
//! - a substring match on the description
//! - for `#`-prefixed queries only, a substring match in the top-colors list
//!
//! A query that names a format or mode present in the collection is treated
//! as categorical: it selects by that value alone and the description is not
//! consulted. `jpeg` therefore hides a PNG whose description mentions jpeg.

use crate::attributes::{get_attr, get_text, query_attrs, QueryMatch};
use crate::model::MediaRecord;
use std::collections::HashSet;

const COLOR_PREFIX: char = '#';

/// Attributes whose values form the categorical vocabulary of a collection.
const VOCABULARY_ATTRS: [&str; 2] = ["format", "mode"];

/// The visible/hidden split of one pass, both in discovery order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub visible: Vec<&'a MediaRecord>,
    pub hidden: Vec<&'a MediaRecord>,
}

/// A normalized query, bound to the vocabulary of the collection it filters.
#[derive(Debug, Clone)]
pub struct Query {
    needle: String,
    categorical: bool,
}

impl Query {
    pub fn new(query: &str, records: &[MediaRecord]) -> Self {
        let needle = query.trim().to_lowercase();
        let categorical = !needle.is_empty()
            && vocabulary(records).contains(needle.as_str());
        Self {
            needle,
            categorical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, record: &MediaRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.needle.starts_with(COLOR_PREFIX) {
            return self.any(record, QueryMatch::Colors, |v| v.contains(&self.needle));
        }
        if self.any(record, QueryMatch::Exact, |v| v == self.needle) {
            return true;
        }
        if self.categorical {
            return false;
        }
        self.any(record, QueryMatch::Prefix, |v| v.starts_with(&self.needle))
            || self.any(record, QueryMatch::Substring, |v| v.contains(&self.needle))
    }

    /// Tests the case-folded text of every present attribute with `mode`.
    fn any(&self, record: &MediaRecord, mode: QueryMatch, test: impl Fn(&str) -> bool) -> bool {
        query_attrs(mode)
            .filter(|spec| !get_attr(record, spec.name).is_default())
            .any(|spec| test(&get_text(record, spec.name).to_lowercase()))
    }
}

fn vocabulary(records: &[MediaRecord]) -> HashSet<String> {
    records
        .iter()
        .flat_map(|r| VOCABULARY_ATTRS.iter().map(move |name| get_text(r, name)))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_lowercase())
        .collect()
}

/// Splits `records` into visible and hidden, preserving discovery order.
pub fn filter<'a>(records: &'a [MediaRecord], query: &str) -> Partition<'a> {
    let query = Query::new(query, records);
    let (visible, hidden) = records.iter().partition(|r| query.matches(r));
    Partition { visible, hidden }
}
