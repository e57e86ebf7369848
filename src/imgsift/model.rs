use crate::hash::HashFamily;
use serde::{Deserialize, Deserializer, Serialize};

/// One catalogued image and its extracted attributes.
///
/// Records are read-only for the session. Every field has a default so absent
/// catalog keys never produce an undefined value: empty text, zero numbers,
/// empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "RecordRepr")]
pub struct MediaRecord {
    pub id: String,
    pub pth: String,
    /// Capture date, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
    pub bytes: u64,
    pub format: String,
    pub mode: String,
    pub width: u64,
    pub height: u64,
    /// Camera maker and model, joined with `-`.
    pub make_model: String,
    pub lens: String,
    pub iso: u64,
    pub aperture: String,
    pub focal_length: String,
    pub shutter_speed: String,
    pub illumination: u64,
    pub contrast: u64,
    pub saturation: u64,
    /// Dominant colors, most dominant first, as `#rrggbb=share`.
    pub top_colors: Vec<String>,
    pub description: String,
    pub ahash: String,
    pub dhash: String,
    pub vhash: String,
    pub bhash: String,
    pub rchash: String,
    pub chash: String,
}

impl MediaRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// The raw hash string of `family`, empty when absent.
    pub fn hash(&self, family: HashFamily) -> &str {
        match family {
            HashFamily::Ahash => &self.ahash,
            HashFamily::Dhash => &self.dhash,
            HashFamily::Vhash => &self.vhash,
            HashFamily::Bhash => &self.bhash,
            HashFamily::Rchash => &self.rchash,
            HashFamily::Chash => &self.chash,
        }
    }

    /// The first (most dominant) top color, empty when there is none.
    pub fn dominant_color(&self) -> &str {
        self.top_colors.first().map(String::as_str).unwrap_or("")
    }
}

/// Top colors come either as a JSON list or as the gallery's comma-delimited string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColorList {
    List(Vec<String>),
    Delimited(String),
}

impl Default for ColorList {
    fn default() -> Self {
        ColorList::List(Vec::new())
    }
}

impl ColorList {
    fn into_vec(self) -> Vec<String> {
        match self {
            ColorList::List(v) => v,
            ColorList::Delimited(s) => s
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// On-disk shape of a record, accepting the legacy key spellings.
///
/// Explicit `null` values resolve to the same defaults as absent keys.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct RecordRepr {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    pth: String,
    #[serde(deserialize_with = "null_as_default")]
    date: String,
    #[serde(deserialize_with = "null_as_default")]
    bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    format: String,
    #[serde(deserialize_with = "null_as_default")]
    mode: String,
    width: Option<u64>,
    height: Option<u64>,
    /// Legacy `"W,H"` dimensions, used only when width/height are absent.
    size: Option<String>,
    #[serde(deserialize_with = "null_as_default", alias = "maker-model")]
    make_model: String,
    #[serde(
        deserialize_with = "null_as_default",
        alias = "lens-maker-model",
        alias = "lens-make-model"
    )]
    lens: String,
    #[serde(deserialize_with = "null_as_default")]
    iso: u64,
    #[serde(deserialize_with = "null_as_default")]
    aperture: String,
    #[serde(deserialize_with = "null_as_default")]
    focal_length: String,
    #[serde(deserialize_with = "null_as_default")]
    shutter_speed: String,
    #[serde(deserialize_with = "null_as_default")]
    illumination: u64,
    #[serde(deserialize_with = "null_as_default")]
    contrast: u64,
    #[serde(deserialize_with = "null_as_default")]
    saturation: u64,
    #[serde(deserialize_with = "null_as_default")]
    top_colors: ColorList,
    #[serde(deserialize_with = "null_as_default", alias = "obj-detect-llm")]
    description: String,
    #[serde(deserialize_with = "null_as_default")]
    ahash: String,
    #[serde(deserialize_with = "null_as_default")]
    dhash: String,
    #[serde(deserialize_with = "null_as_default")]
    vhash: String,
    #[serde(deserialize_with = "null_as_default")]
    bhash: String,
    #[serde(deserialize_with = "null_as_default")]
    rchash: String,
    #[serde(deserialize_with = "null_as_default")]
    chash: String,
}

/// `null` deserializes to the type's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<RecordRepr> for MediaRecord {
    fn from(r: RecordRepr) -> Self {
        let (legacy_w, legacy_h) = r
            .size
            .as_deref()
            .and_then(|s| s.split_once(','))
            .map(|(w, h)| {
                (
                    w.trim().parse().unwrap_or(0),
                    h.trim().parse().unwrap_or(0),
                )
            })
            .unwrap_or((0, 0));

        MediaRecord {
            id: r.id,
            pth: r.pth,
            date: r.date,
            bytes: r.bytes,
            format: r.format,
            mode: r.mode,
            width: r.width.unwrap_or(legacy_w),
            height: r.height.unwrap_or(legacy_h),
            make_model: r.make_model,
            lens: r.lens,
            iso: r.iso,
            aperture: r.aperture,
            focal_length: r.focal_length,
            shutter_speed: r.shutter_speed,
            illumination: r.illumination,
            contrast: r.contrast,
            saturation: r.saturation,
            top_colors: r.top_colors.into_vec(),
            description: r.description,
            ahash: r.ahash,
            dhash: r.dhash,
            vhash: r.vhash,
            bhash: r.bhash,
            rchash: r.rchash,
            chash: r.chash,
        }
    }
}

/// The user-chosen inputs of one view pass.
///
/// Passed by value into every `apply`; the engine keeps no copy between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub query: String,
    pub criterion: String,
    pub reverse: bool,
    pub groups: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            query: String::new(),
            criterion: "date".to_string(),
            reverse: false,
            groups: false,
        }
    }
}

impl ViewSettings {
    pub fn new(criterion: impl Into<String>) -> Self {
        Self {
            criterion: criterion.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn grouped(mut self, groups: bool) -> Self {
        self.groups = groups;
        self
    }
}

/// A labeled partition of the sorted visible records.
///
/// `label` is `None` only for the reserved ungrouped bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: Option<String>,
    pub members: Vec<String>,
}

impl Bucket {
    pub fn is_reserved(&self) -> bool {
        self.label.is_none()
    }
}

/// The output of one pass: buckets in display order, plus the hidden records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    /// The criterion that actually ordered the pass (`identity` after a fallback).
    pub criterion: String,
    pub buckets: Vec<Bucket>,
    /// Records rejected by the query, in discovery order.
    pub hidden: Vec<String>,
}

impl RenderPlan {
    /// All visible ids in display order.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .flat_map(|b| b.members.iter().map(String::as_str))
    }

    pub fn visible_count(&self) -> usize {
        self.buckets.iter().map(|b| b.members.len()).sum()
    }
}
