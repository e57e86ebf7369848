//! # Attribute System
//!
//! A typed accessor over a record's named attributes. Instead of reading each
//! field ad-hoc, filtering, expressions and the info view go through:
//!
//! - **Specifications**: the [`ATTRIBUTES`] registry (name, kind, query matching)
//! - **Unified access**: [`get_attr`] / [`get_text`] by attribute name
//! - **Filtering**: [`AttrFilter`] expressions that work with any attribute
//!
//! ## Attribute Kinds
//!
//! | Kind | Examples | Default |
//! |------|----------|---------|
//! | `Text` | `format`, `date`, `make-model` | `""` |
//! | `Number` | `bytes`, `width`, `contrast` | `0` |
//! | `List` | `top-colors` | `[]` |
//! | `Hash` | `dhash`, `chash` | big-integer zero |
//!
//! There is no failure path: an unknown attribute name resolves to the text
//! default and is logged at debug level.

mod filter;
mod spec;
mod value;

pub use filter::{parse_filter_expr, AttrFilter, FilterOp};
pub use spec::{get_spec, query_attrs, AttributeKind, AttributeSpec, QueryMatch, ATTRIBUTES};
pub use value::AttrValue;

use crate::hash;
use crate::model::MediaRecord;
use tracing::debug;

/// Typed value of `name` on `record`, or the kind's default.
pub fn get_attr(record: &MediaRecord, name: &str) -> AttrValue {
    let Some(spec) = get_spec(name) else {
        debug!(target: "imgsift::attributes", attr = name, "unknown attribute");
        return AttrValue::Text(String::new());
    };
    match spec.kind {
        AttributeKind::Hash(family) => {
            AttrValue::Hash(hash::decode(record.hash(family), family.alphabet()))
        }
        AttributeKind::Number => AttrValue::Number(number_attr(record, name)),
        AttributeKind::List => AttrValue::List(record.top_colors.clone()),
        AttributeKind::Text => AttrValue::Text(text_attr(record, name).to_string()),
    }
}

/// Text form of `name` as the gallery stores it: numbers in decimal, lists
/// comma-delimited, hashes as their raw encoded string.
pub fn get_text(record: &MediaRecord, name: &str) -> String {
    let Some(spec) = get_spec(name) else {
        debug!(target: "imgsift::attributes", attr = name, "unknown attribute");
        return String::new();
    };
    match spec.kind {
        AttributeKind::Hash(family) => record.hash(family).to_string(),
        AttributeKind::Number => number_attr(record, name).to_string(),
        AttributeKind::List => record.top_colors.join(","),
        AttributeKind::Text => text_attr(record, name).to_string(),
    }
}

fn number_attr(record: &MediaRecord, name: &str) -> u64 {
    match name {
        "bytes" => record.bytes,
        "width" => record.width,
        "height" => record.height,
        "iso" => record.iso,
        "illumination" => record.illumination,
        "contrast" => record.contrast,
        "saturation" => record.saturation,
        _ => 0,
    }
}

fn text_attr<'a>(record: &'a MediaRecord, name: &str) -> &'a str {
    match name {
        "id" => &record.id,
        "pth" => &record.pth,
        "date" => &record.date,
        "format" => &record.format,
        "mode" => &record.mode,
        "make-model" => &record.make_model,
        "lens" => &record.lens,
        "aperture" => &record.aperture,
        "focal-length" => &record.focal_length,
        "shutter-speed" => &record.shutter_speed,
        "description" => &record.description,
        _ => "",
    }
}

/// Non-default attributes of `record`, in registry order.
pub fn present_attrs(record: &MediaRecord) -> Vec<(&'static str, String)> {
    ATTRIBUTES
        .iter()
        .filter(|spec| match spec.kind {
            // Hashes are shown as stored; an all-zero hash is still present.
            AttributeKind::Hash(family) => !record.hash(family).is_empty(),
            _ => !get_attr(record, spec.name).is_default(),
        })
        .map(|spec| (spec.name, get_text(record, spec.name)))
        .collect()
}
