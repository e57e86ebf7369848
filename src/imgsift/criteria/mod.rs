//! # Criterion Registry
//!
//! Every sort/group strategy is a tagged descriptor, [`Criterion`], looked up
//! by id instead of dispatched through a chain of conditionals. Each
//! descriptor carries:
//!
//! - `key`: derives a [`SortKey`] from a record
//! - `compare`: a total, ascending order over keys
//! - `bucket_label`: a pure label derived from the key
//! - `caption`: the per-record sub-text shown for this criterion
//! - `default_descending`: the criterion's natural direction
//!
//! ## Families
//!
//! | Family | Ids | Key | Default |
//! |--------|-----|-----|---------|
//! | Scalar | `date`, `bytes`, `illumination`, `contrast`, `saturation` | text / number | descending |
//! | Composite | `width-height`, `height-width` | `(primary, secondary, bytes)` | descending |
//! | Categorical | `format-mode`, `camera-model`, `top-colors` | `(value, date)` | ascending |
//! | Hash | `ahash` … `chash` | decoded big integer | descending |
//! | Reversed hash | `ahash-rev` … `chash-rev` | decoded reversed string | descending |
//!
//! The registry is built once and immutable afterwards; [`CriterionRegistry::global`]
//! shares one instance across passes.

mod key;
pub mod labels;

pub use key::SortKey;

use crate::hash::HashFamily;
use crate::model::MediaRecord;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use tracing::warn;

/// Id of the fallback criterion used for unknown ids.
pub const IDENTITY: &str = "identity";

pub type KeyFn = Box<dyn Fn(&MediaRecord) -> SortKey + Send + Sync>;
pub type CaptionFn = Box<dyn Fn(&MediaRecord) -> String + Send + Sync>;

/// How a criterion derives its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionFamily {
    Identity,
    Scalar,
    Composite,
    Categorical,
    Hash,
    ReversedHash,
}

/// A named, registered sort/group strategy.
pub struct Criterion {
    pub id: &'static str,
    pub family: CriterionFamily,
    pub key: KeyFn,
    pub compare: fn(&SortKey, &SortKey) -> Ordering,
    pub bucket_label: fn(&SortKey) -> String,
    pub caption: CaptionFn,
    pub default_descending: bool,
}

impl std::fmt::Debug for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Criterion")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("default_descending", &self.default_descending)
            .finish()
    }
}

impl Criterion {
    fn new(
        id: &'static str,
        family: CriterionFamily,
        key: impl Fn(&MediaRecord) -> SortKey + Send + Sync + 'static,
        compare: fn(&SortKey, &SortKey) -> Ordering,
        bucket_label: fn(&SortKey) -> String,
    ) -> Self {
        Self {
            id,
            family,
            key: Box::new(key),
            compare,
            bucket_label,
            caption: Box::new(labels::default_caption),
            default_descending: true,
        }
    }

    fn ascending(mut self) -> Self {
        self.default_descending = false;
        self
    }

    fn captioned(mut self, caption: impl Fn(&MediaRecord) -> String + Send + Sync + 'static) -> Self {
        self.caption = Box::new(caption);
        self
    }

    /// Discovery order: every key compares equal.
    pub fn identity() -> Self {
        Self::new(
            IDENTITY,
            CriterionFamily::Identity,
            |_| SortKey::Identity,
            key::cmp_identity,
            labels::identity_label,
        )
        .ascending()
    }

    pub fn key_of(&self, record: &MediaRecord) -> SortKey {
        (self.key)(record)
    }

    /// Order in the criterion's default direction.
    pub fn directed_cmp(&self, a: &SortKey, b: &SortKey) -> Ordering {
        let ord = (self.compare)(a, b);
        if self.default_descending {
            ord.reverse()
        } else {
            ord
        }
    }

    pub fn label_of(&self, key: &SortKey) -> String {
        (self.bucket_label)(key)
    }

    pub fn caption_of(&self, record: &MediaRecord) -> String {
        (self.caption)(record)
    }
}

/// Returned by [`CriterionRegistry::resolve`] for ids outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCriterion {
    pub id: String,
}

impl std::fmt::Display for UnknownCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown sort criterion: {}", self.id)
    }
}

impl std::error::Error for UnknownCriterion {}

/// The closed set of criteria, in menu order.
pub struct CriterionRegistry {
    criteria: Vec<Criterion>,
    identity: Criterion,
}

static GLOBAL: Lazy<CriterionRegistry> = Lazy::new(CriterionRegistry::standard);

impl CriterionRegistry {
    /// The shared, immutable registry.
    pub fn global() -> &'static CriterionRegistry {
        &GLOBAL
    }

    /// Builds every standard criterion.
    pub fn standard() -> Self {
        use CriterionFamily::*;

        let mut criteria = vec![
            Criterion::new(
                "date",
                Scalar,
                |r| SortKey::Text(r.date.clone()),
                key::cmp_text,
                labels::date_label,
            ),
            Criterion::new(
                "bytes",
                Scalar,
                |r| SortKey::Number(r.bytes),
                key::cmp_number,
                labels::bytes_label,
            )
            .captioned(labels::bytes_caption),
            Criterion::new(
                "format-mode",
                Categorical,
                |r| SortKey::Pair {
                    value: format!("{} {}", r.format, r.mode),
                    date: r.date.clone(),
                },
                key::cmp_pair,
                labels::format_mode_label,
            )
            .ascending()
            .captioned(labels::format_mode_caption),
            Criterion::new(
                "camera-model",
                Categorical,
                |r| SortKey::Pair {
                    value: r.make_model.clone(),
                    date: r.date.clone(),
                },
                key::cmp_pair,
                labels::camera_label,
            )
            .ascending()
            .captioned(labels::camera_caption),
            Criterion::new(
                "width-height",
                Composite,
                |r| SortKey::Dims {
                    primary: r.width,
                    secondary: r.height,
                    bytes: r.bytes,
                },
                key::cmp_dims,
                labels::dims_label,
            )
            .captioned(labels::width_height_caption),
            Criterion::new(
                "height-width",
                Composite,
                |r| SortKey::Dims {
                    primary: r.height,
                    secondary: r.width,
                    bytes: r.bytes,
                },
                key::cmp_dims,
                labels::dims_label,
            )
            .captioned(labels::height_width_caption),
            Criterion::new(
                "top-colors",
                Categorical,
                |r| SortKey::Pair {
                    value: r.dominant_color().to_string(),
                    date: r.date.clone(),
                },
                key::cmp_pair,
                labels::color_label,
            )
            .ascending()
            .captioned(labels::color_caption),
            Criterion::new(
                "illumination",
                Scalar,
                |r| SortKey::Number(r.illumination),
                key::cmp_number,
                labels::illumination_label,
            )
            .captioned(labels::illumination_caption),
            Criterion::new(
                "contrast",
                Scalar,
                |r| SortKey::Number(r.contrast),
                key::cmp_number,
                labels::contrast_label,
            )
            .captioned(labels::contrast_caption),
            Criterion::new(
                "saturation",
                Scalar,
                |r| SortKey::Number(r.saturation),
                key::cmp_number,
                labels::saturation_label,
            )
            .captioned(labels::saturation_caption),
        ];

        for family in HashFamily::ALL {
            criteria.push(
                Criterion::new(
                    family.name(),
                    Hash,
                    move |r| SortKey::hash(r, family, false),
                    key::cmp_hash,
                    labels::hash_label,
                )
                .captioned(move |r| labels::hash_caption(r, family)),
            );
            criteria.push(
                Criterion::new(
                    family.reversed_name(),
                    ReversedHash,
                    move |r| SortKey::hash(r, family, true),
                    key::cmp_hash,
                    labels::hash_label,
                )
                .captioned(move |r| labels::hash_caption(r, family)),
            );
        }

        Self {
            criteria,
            identity: Criterion::identity(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    pub fn resolve(&self, id: &str) -> Result<&Criterion, UnknownCriterion> {
        self.get(id).ok_or_else(|| UnknownCriterion { id: id.to_string() })
    }

    /// Resolves `id`, falling back to discovery order for unknown ids.
    pub fn resolve_or_identity(&self, id: &str) -> &Criterion {
        match self.resolve(id) {
            Ok(criterion) => criterion,
            Err(unknown) => {
                warn!(
                    target: "imgsift::criteria",
                    criterion = %unknown.id,
                    "unknown sort criterion; keeping discovery order"
                );
                &self.identity
            }
        }
    }

    pub fn identity(&self) -> &Criterion {
        &self.identity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.criteria.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static CriterionRegistry {
        CriterionRegistry::global()
    }

    #[test]
    fn registers_the_closed_set() {
        let ids: Vec<_> = registry().ids().collect();
        assert_eq!(ids.len(), 22);
        for id in [
            "date",
            "bytes",
            "format-mode",
            "camera-model",
            "width-height",
            "height-width",
            "top-colors",
            "illumination",
            "contrast",
            "saturation",
            "ahash",
            "ahash-rev",
            "bhash",
            "chash-rev",
            "rchash",
        ] {
            assert!(ids.contains(&id), "missing {}", id);
        }
        assert!(!ids.contains(&IDENTITY));
    }

    #[test]
    fn ids_are_unique() {
        let ids: Vec<_> = registry().ids().collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate {}", id);
        }
    }

    #[test]
    fn unknown_id_is_reported() {
        let err = registry().resolve("camera,model").unwrap_err();
        assert_eq!(err.id, "camera,model");
        assert_eq!(registry().resolve_or_identity("nope").id, IDENTITY);
    }

    #[test]
    fn default_directions() {
        let r = registry();
        assert!(r.get("bytes").unwrap().default_descending);
        assert!(r.get("width-height").unwrap().default_descending);
        assert!(r.get("dhash").unwrap().default_descending);
        assert!(!r.get("camera-model").unwrap().default_descending);
        assert!(!r.get("format-mode").unwrap().default_descending);
        assert!(!r.identity().default_descending);
    }

    #[test]
    fn directed_cmp_applies_default_direction() {
        let bytes = registry().get("bytes").unwrap();
        let big = SortKey::Number(10);
        let small = SortKey::Number(1);
        assert_eq!(bytes.directed_cmp(&big, &small), Ordering::Less);
        assert_eq!((bytes.compare)(&big, &small), Ordering::Greater);
    }

    #[test]
    fn composite_keys_swap_primary() {
        let r = MediaRecord {
            width: 6000,
            height: 4000,
            bytes: 7,
            ..Default::default()
        };
        let wh = registry().get("width-height").unwrap().key_of(&r);
        let hw = registry().get("height-width").unwrap().key_of(&r);
        assert_eq!(
            wh,
            SortKey::Dims {
                primary: 6000,
                secondary: 4000,
                bytes: 7
            }
        );
        assert_eq!(
            hw,
            SortKey::Dims {
                primary: 4000,
                secondary: 6000,
                bytes: 7
            }
        );
        assert_eq!(registry().get("height-width").unwrap().label_of(&hw), "4k");
    }

    #[test]
    fn categorical_keys_carry_date() {
        let r = MediaRecord {
            format: "JPEG".into(),
            mode: "RGB".into(),
            date: "2020-01-01".into(),
            top_colors: vec!["#ffffff=50".into()],
            ..Default::default()
        };
        let key = registry().get("format-mode").unwrap().key_of(&r);
        assert_eq!(
            key,
            SortKey::Pair {
                value: "JPEG RGB".into(),
                date: "2020-01-01".into()
            }
        );
        let colors = registry().get("top-colors").unwrap();
        assert_eq!(colors.label_of(&colors.key_of(&r)), "#ffffff");
    }

    #[test]
    fn reversed_hash_clusters_by_suffix() {
        let a = MediaRecord {
            ahash: "10".into(),
            ..Default::default()
        };
        let b = MediaRecord {
            ahash: "01".into(),
            ..Default::default()
        };
        let fwd = registry().get("ahash").unwrap();
        let rev = registry().get("ahash-rev").unwrap();
        assert_eq!(
            (fwd.compare)(&fwd.key_of(&a), &fwd.key_of(&b)),
            Ordering::Greater
        );
        assert_eq!(
            (rev.compare)(&rev.key_of(&a), &rev.key_of(&b)),
            Ordering::Less
        );
    }

    #[test]
    fn hash_criteria_use_family_alphabet() {
        // "v0" and "z0" differ only in base36; under base32 'z' is malformed.
        let r = MediaRecord {
            chash: "z0".into(),
            dhash: "v0".into(),
            ..Default::default()
        };
        let chash = registry().get("chash").unwrap();
        let dhash = registry().get("dhash").unwrap();
        match (chash.key_of(&r), dhash.key_of(&r)) {
            (SortKey::Hash { value: c, .. }, SortKey::Hash { value: d, .. }) => {
                assert_eq!(c.to_u128(), Some(35 * 36));
                assert_eq!(d.to_u128(), Some(31 * 32));
            }
            other => panic!("unexpected keys {:?}", other),
        }
    }

    #[test]
    fn every_criterion_labels_and_captions_defaults() {
        let empty = MediaRecord::new("x");
        for c in registry().iter() {
            let key = c.key_of(&empty);
            assert!(!c.label_of(&key).is_empty(), "{} has empty label", c.id);
            assert!(!c.caption_of(&empty).is_empty(), "{} has empty caption", c.id);
            assert_eq!((c.compare)(&key, &key), Ordering::Equal);
        }
    }
}
