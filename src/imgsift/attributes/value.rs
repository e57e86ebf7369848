//! Attribute value types.

use super::AttributeKind;
use crate::hash::HashValue;

/// Runtime representation of an attribute value.
///
/// Every variant has exactly one default, returned for absent attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Number(u64),
    List(Vec<String>),
    Hash(HashValue),
}

impl AttrValue {
    /// The documented default for an attribute kind.
    pub fn default_for(kind: AttributeKind) -> Self {
        match kind {
            AttributeKind::Text => AttrValue::Text(String::new()),
            AttributeKind::Number => AttrValue::Number(0),
            AttributeKind::List => AttrValue::List(Vec::new()),
            AttributeKind::Hash(_) => AttrValue::Hash(HashValue::zero()),
        }
    }

    /// Whether this value equals its kind's default (i.e. the attribute is absent).
    pub fn is_default(&self) -> bool {
        match self {
            AttrValue::Text(s) => s.is_empty(),
            AttrValue::Number(n) => *n == 0,
            AttrValue::List(v) => v.is_empty(),
            AttrValue::Hash(h) => h.is_zero(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_hash(&self) -> Option<&HashValue> {
        match self {
            AttrValue::Hash(h) => Some(h),
            _ => None,
        }
    }
}
