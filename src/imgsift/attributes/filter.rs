//! Attribute expressions.
//!
//! Expressions select which records enter a view at all, e.g.
//! `date >= 2020 ; date < 2021`, `format = PNG, bytes > 100000` or
//! `make-model ~ sony`. All clauses of an expression must hold.

use super::{get_attr, get_spec, get_text, AttrValue, AttributeKind, AttributeSpec};
use crate::error::{ImgsiftError, Result};
use crate::hash;
use crate::model::MediaRecord;
use std::cmp::Ordering;

/// Filter operation for comparing attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    /// Case-insensitive substring.
    Contains,
}

impl FilterOp {
    /// Two-character operators first, so `>=` is not read as `>`.
    const TOKENS: [(&'static str, FilterOp); 8] = [
        ("==", FilterOp::Eq),
        ("!=", FilterOp::Ne),
        (">=", FilterOp::Ge),
        ("<=", FilterOp::Le),
        ("=", FilterOp::Eq),
        (">", FilterOp::Gt),
        ("<", FilterOp::Lt),
        ("~", FilterOp::Contains),
    ];

    fn accepts(self, ord: Ordering) -> bool {
        match self {
            FilterOp::Eq => ord == Ordering::Equal,
            FilterOp::Ne => ord != Ordering::Equal,
            FilterOp::Gt => ord == Ordering::Greater,
            FilterOp::Ge => ord != Ordering::Less,
            FilterOp::Lt => ord == Ordering::Less,
            FilterOp::Le => ord != Ordering::Greater,
            FilterOp::Contains => false,
        }
    }
}

/// A filter condition on an attribute.
#[derive(Debug, Clone)]
pub struct AttrFilter {
    pub attr: &'static AttributeSpec,
    pub op: FilterOp,
    pub value: String,
}

impl AttrFilter {
    /// Create a filter on a registered attribute.
    pub fn new(attr: &str, op: FilterOp, value: impl Into<String>) -> Result<Self> {
        let spec = get_spec(attr)
            .ok_or_else(|| ImgsiftError::Filter(format!("unknown attribute '{}'", attr)))?;
        Ok(Self {
            attr: spec,
            op,
            value: value.into(),
        })
    }

    /// Check if this filter matches the given record.
    pub fn matches(&self, record: &MediaRecord) -> bool {
        if self.op == FilterOp::Contains {
            return get_text(record, self.attr.name)
                .to_lowercase()
                .contains(&self.value.to_lowercase());
        }

        let ord = match (self.attr.kind, get_attr(record, self.attr.name)) {
            (AttributeKind::Number, AttrValue::Number(n)) => match self.value.parse::<u64>() {
                Ok(v) => n.cmp(&v),
                Err(_) => self.text_cmp(record),
            },
            (AttributeKind::Hash(family), AttrValue::Hash(h)) => {
                h.cmp(&hash::decode(&self.value, family.alphabet()))
            }
            _ => self.text_cmp(record),
        };
        self.op.accepts(ord)
    }

    fn text_cmp(&self, record: &MediaRecord) -> Ordering {
        get_text(record, self.attr.name)
            .to_lowercase()
            .cmp(&self.value.to_lowercase())
    }
}

/// Parses `attr OP value` clauses separated by `;` or `,`.
///
/// Whitespace around tokens and empty clauses are ignored.
pub fn parse_filter_expr(expr: &str) -> Result<Vec<AttrFilter>> {
    expr.split([';', ','])
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(parse_clause)
        .collect()
}

fn parse_clause(clause: &str) -> Result<AttrFilter> {
    let start = clause
        .find(['=', '!', '<', '>', '~'])
        .ok_or_else(|| ImgsiftError::Filter(format!("missing operator in '{}'", clause)))?;
    let (attr, rest) = clause.split_at(start);

    let (token, op) = FilterOp::TOKENS
        .iter()
        .find(|(token, _)| rest.starts_with(token))
        .ok_or_else(|| ImgsiftError::Filter(format!("invalid operator in '{}'", clause)))?;

    let attr = attr.trim();
    let value = rest[token.len()..].trim();
    if attr.is_empty() || value.is_empty() {
        return Err(ImgsiftError::Filter(format!("incomplete clause '{}'", clause)));
    }
    AttrFilter::new(attr, *op, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MediaRecord {
        MediaRecord {
            id: "a1".into(),
            date: "2020-07-04 12:00:00".into(),
            format: "PNG".into(),
            bytes: 150_000,
            width: 6000,
            make_model: "Sony-ILCE-7".into(),
            dhash: "000v".into(),
            ..Default::default()
        }
    }

    fn single(expr: &str) -> AttrFilter {
        let mut parsed = parse_filter_expr(expr).unwrap();
        assert_eq!(parsed.len(), 1, "{}", expr);
        parsed.remove(0)
    }

    #[test]
    fn parses_simple_expression() {
        let f = single("date = 2020");
        assert_eq!(f.attr.name, "date");
        assert_eq!(f.op, FilterOp::Eq);
        assert_eq!(f.value, "2020");
    }

    #[test]
    fn ignores_spaces_and_empty_clauses() {
        let f = single("date   =   2020    ;;");
        assert_eq!((f.attr.name, f.value.as_str()), ("date", "2020"));
        let f = single("   date  ==   2020 , ");
        assert_eq!((f.attr.name, f.op), ("date", FilterOp::Eq));
    }

    #[test]
    fn parses_two_character_operators() {
        assert_eq!(single("bytes >= 10").op, FilterOp::Ge);
        assert_eq!(single("bytes <= 10").op, FilterOp::Le);
        assert_eq!(single("bytes != 10").op, FilterOp::Ne);
        assert_eq!(single("make-model ~ sony").op, FilterOp::Contains);
    }

    #[test]
    fn multiple_clauses_are_all_parsed() {
        let parsed = parse_filter_expr("format = PNG ; bytes > 100000").unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed.iter().all(|f| f.matches(&record())));
    }

    #[test]
    fn rejects_malformed_clauses() {
        assert!(parse_filter_expr("date 2020").is_err());
        assert!(parse_filter_expr("= 2020").is_err());
        assert!(parse_filter_expr("date =").is_err());
        assert!(parse_filter_expr("nope = 1").is_err());
        assert!(parse_filter_expr("date ! 1").is_err());
    }

    #[test]
    fn numeric_attributes_compare_numerically() {
        let r = record();
        assert!(single("bytes > 100000").matches(&r));
        assert!(!single("bytes > 99999999").matches(&r));
        // 6000 < 10000 numerically although "6000" > "10000" as text
        assert!(single("width < 10000").matches(&r));
    }

    #[test]
    fn text_attributes_compare_case_insensitively() {
        let r = record();
        assert!(single("format = png").matches(&r));
        assert!(single("format != jpeg").matches(&r));
        assert!(single("date >= 2020").matches(&r));
        assert!(!single("date >= 2021").matches(&r));
        assert!(single("make-model ~ ilce").matches(&r));
    }

    #[test]
    fn hash_attributes_compare_decoded_values() {
        let r = record();
        assert!(single("dhash > 00u").matches(&r));
        assert!(single("dhash = v").matches(&r));
    }
}
