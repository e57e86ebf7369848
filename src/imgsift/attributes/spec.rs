//! Attribute specifications and registry.
//!
//! This module defines the schema for record attributes: what kind of value
//! each holds, and how the free-text query matches against it.

use crate::hash::HashFamily;

/// The kind of value an attribute holds, which fixes its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free or categorical text. Default: empty string.
    Text,

    /// Unsigned number (bytes, pixels, percentages). Default: `0`.
    Number,

    /// Ordered list of strings (top colors). Default: empty list.
    List,

    /// Perceptual hash decoded to a big integer. Default: zero.
    Hash(HashFamily),
}

/// How the free-text query matches an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMatch {
    /// Not consulted by the query.
    Never,

    /// Whole value equals the query, case-insensitive.
    Exact,

    /// Value starts with the query (hierarchical text: dates, maker-model).
    Prefix,

    /// Value contains the query (free-text description).
    Substring,

    /// Delimited list contains the query; only for `#`-prefixed queries.
    Colors,
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The attribute name used in catalogs and expressions (e.g. "make-model")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// How the free-text query matches this attribute
    pub query: QueryMatch,
}

impl AttributeSpec {
    const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            query: QueryMatch::Never,
        }
    }

    const fn matched(mut self, query: QueryMatch) -> Self {
        self.query = query;
        self
    }
}

/// Registry of all record attributes, in display order.
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("id", AttributeKind::Text).matched(QueryMatch::Exact),
    AttributeSpec::new("pth", AttributeKind::Text),
    AttributeSpec::new("date", AttributeKind::Text).matched(QueryMatch::Prefix),
    AttributeSpec::new("format", AttributeKind::Text).matched(QueryMatch::Exact),
    AttributeSpec::new("mode", AttributeKind::Text).matched(QueryMatch::Exact),
    AttributeSpec::new("bytes", AttributeKind::Number).matched(QueryMatch::Exact),
    AttributeSpec::new("width", AttributeKind::Number).matched(QueryMatch::Exact),
    AttributeSpec::new("height", AttributeKind::Number).matched(QueryMatch::Exact),
    AttributeSpec::new("make-model", AttributeKind::Text).matched(QueryMatch::Prefix),
    AttributeSpec::new("lens", AttributeKind::Text),
    AttributeSpec::new("iso", AttributeKind::Number),
    AttributeSpec::new("aperture", AttributeKind::Text),
    AttributeSpec::new("focal-length", AttributeKind::Text),
    AttributeSpec::new("shutter-speed", AttributeKind::Text),
    AttributeSpec::new("illumination", AttributeKind::Number),
    AttributeSpec::new("contrast", AttributeKind::Number),
    AttributeSpec::new("saturation", AttributeKind::Number),
    AttributeSpec::new("top-colors", AttributeKind::List).matched(QueryMatch::Colors),
    AttributeSpec::new("description", AttributeKind::Text).matched(QueryMatch::Substring),
    AttributeSpec::new("ahash", AttributeKind::Hash(HashFamily::Ahash)),
    AttributeSpec::new("dhash", AttributeKind::Hash(HashFamily::Dhash)),
    AttributeSpec::new("vhash", AttributeKind::Hash(HashFamily::Vhash)),
    AttributeSpec::new("bhash", AttributeKind::Hash(HashFamily::Bhash)),
    AttributeSpec::new("rchash", AttributeKind::Hash(HashFamily::Rchash)),
    AttributeSpec::new("chash", AttributeKind::Hash(HashFamily::Chash)),
];

/// Look up an attribute spec by name.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Attributes consulted by the free-text query with the given match mode.
pub fn query_attrs(mode: QueryMatch) -> impl Iterator<Item = &'static AttributeSpec> {
    ATTRIBUTES.iter().filter(move |spec| spec.query == mode)
}
