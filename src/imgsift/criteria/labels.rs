//! Bucket labels and tile captions.
//!
//! Bucket labels are derived from the *sort key*, so decoded and composite
//! shapes are available. Captions are the per-record sub-text shown for the
//! active criterion and read the raw record.

use super::SortKey;
use crate::hash::HashFamily;
use crate::model::MediaRecord;

const MEGABYTE: u64 = 1024 * 1024;

/// Leading symbols of the re-encoded hash used as its bucket label.
pub const HASH_LABEL_SYMBOLS: usize = 1;

/// Integer division rounded half up, without overflow near `u64::MAX`.
fn round_div(value: u64, divisor: u64) -> u64 {
    value / divisor + u64::from(value % divisor >= divisor - divisor / 2)
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        "unknown".to_string()
    } else {
        value.to_string()
    }
}

pub fn identity_label(_: &SortKey) -> String {
    "all".to_string()
}

/// Year-month truncation: `2021-06-01 10:00:00` → `2021-06`.
pub fn date_label(key: &SortKey) -> String {
    match key {
        SortKey::Text(date) if !date.is_empty() => date.chars().take(7).collect(),
        _ => "undated".to_string(),
    }
}

/// Rounded megabytes: `1.6 MiB` → `2mb`.
pub fn bytes_label(key: &SortKey) -> String {
    match key {
        SortKey::Number(bytes) => format!("{}mb", round_div(*bytes, MEGABYTE)),
        _ => "0mb".to_string(),
    }
}

/// Primary dimension rounded to the nearest thousand pixels: `6000` → `6k`.
pub fn dims_label(key: &SortKey) -> String {
    match key {
        SortKey::Dims { primary, .. } => format!("{}k", round_div(*primary, 1000)),
        _ => "0k".to_string(),
    }
}

pub fn format_mode_label(key: &SortKey) -> String {
    match key {
        SortKey::Pair { value, .. } => or_unknown(value.trim()),
        _ => "unknown".to_string(),
    }
}

/// Maker-model with dashes shown as spaces.
pub fn camera_label(key: &SortKey) -> String {
    match key {
        SortKey::Pair { value, .. } => or_unknown(&value.replace('-', " ")),
        _ => "unknown".to_string(),
    }
}

/// The color part of `#rrggbb=share`.
pub fn color_label(key: &SortKey) -> String {
    match key {
        SortKey::Pair { value, .. } => or_unknown(value.split('=').next().unwrap_or("")),
        _ => "unknown".to_string(),
    }
}

fn percent_label(key: &SortKey, step: u64, suffix: char) -> String {
    let value = match key {
        SortKey::Number(n) => *n,
        _ => 0,
    };
    format!("{}{}", round_div(value, step), suffix)
}

/// Illumination in steps of 10: `45` → `5L`.
pub fn illumination_label(key: &SortKey) -> String {
    percent_label(key, 10, 'L')
}

/// Contrast in steps of 20: `45` → `2C`.
pub fn contrast_label(key: &SortKey) -> String {
    percent_label(key, 20, 'C')
}

/// Saturation in steps of 10: `45` → `5S`.
pub fn saturation_label(key: &SortKey) -> String {
    percent_label(key, 10, 'S')
}

/// Leading symbols of the decoded value, re-encoded at the source width.
pub fn hash_label(key: &SortKey) -> String {
    match key {
        SortKey::Hash {
            family,
            value,
            width,
        } => {
            let encoded = value.encode(family.alphabet(), *width);
            let head: String = encoded.chars().take(HASH_LABEL_SYMBOLS).collect();
            format!("{}…", head)
        }
        _ => "0…".to_string(),
    }
}

// --- Captions ---

pub fn default_caption(r: &MediaRecord) -> String {
    format!("{} {}×{} px", r.format, r.width, r.height)
}

pub fn bytes_caption(r: &MediaRecord) -> String {
    format!("Size: {:.2} KB", r.bytes as f64 / 1024.0)
}

pub fn format_mode_caption(r: &MediaRecord) -> String {
    format!("{} {}", r.format, r.mode)
}

pub fn camera_caption(r: &MediaRecord) -> String {
    format!("Cam: {}", or_unknown(&r.make_model))
}

pub fn width_height_caption(r: &MediaRecord) -> String {
    format!("W×H {}×{} px", r.width, r.height)
}

pub fn height_width_caption(r: &MediaRecord) -> String {
    format!("H×W {}×{} px", r.height, r.width)
}

pub fn color_caption(r: &MediaRecord) -> String {
    match r.dominant_color().split('=').next() {
        Some(color) if !color.is_empty() => format!("Color: {}", color),
        _ => "Color: -".to_string(),
    }
}

pub fn illumination_caption(r: &MediaRecord) -> String {
    match r.illumination {
        0 => "Light: -".to_string(),
        light => format!("Light: {}%", light),
    }
}

pub fn contrast_caption(r: &MediaRecord) -> String {
    match r.contrast {
        0 => "Contrast: -".to_string(),
        contrast => format!("Contrast: {}", contrast),
    }
}

pub fn saturation_caption(r: &MediaRecord) -> String {
    match r.saturation {
        0 => "Saturation: -".to_string(),
        saturation => format!("Saturation: {}%", saturation),
    }
}

/// Long hashes (blur, crop, row-col) are shortened to 8 symbols.
pub fn hash_caption(r: &MediaRecord, family: HashFamily) -> String {
    let raw = r.hash(family);
    match family {
        HashFamily::Bhash | HashFamily::Chash | HashFamily::Rchash
            if raw.chars().count() > 8 =>
        {
            let head: String = raw.chars().take(8).collect();
            format!("{}: {}…", family, head)
        }
        _ => format!("{}: {}", family, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{decode, HashValue, BASE36};

    fn pair(value: &str) -> SortKey {
        SortKey::Pair {
            value: value.into(),
            date: "2020-01-01".into(),
        }
    }

    #[test]
    fn date_truncates_to_year_month() {
        assert_eq!(date_label(&SortKey::Text("2021-06-01 10:00:00".into())), "2021-06");
        assert_eq!(date_label(&SortKey::Text(String::new())), "undated");
    }

    #[test]
    fn bytes_round_to_megabytes() {
        assert_eq!(bytes_label(&SortKey::Number(0)), "0mb");
        assert_eq!(bytes_label(&SortKey::Number(500_000)), "0mb");
        assert_eq!(bytes_label(&SortKey::Number(600_000)), "1mb");
        assert_eq!(bytes_label(&SortKey::Number(2_000_000)), "2mb");
    }

    #[test]
    fn dims_round_to_thousands() {
        let key = |primary| SortKey::Dims {
            primary,
            secondary: 0,
            bytes: 0,
        };
        assert_eq!(dims_label(&key(6000)), "6k");
        assert_eq!(dims_label(&key(1499)), "1k");
        assert_eq!(dims_label(&key(1500)), "2k");
    }

    #[test]
    fn categorical_labels() {
        assert_eq!(format_mode_label(&pair("JPEG RGB")), "JPEG RGB");
        assert_eq!(format_mode_label(&pair(" ")), "unknown");
        assert_eq!(camera_label(&pair("Sony-ILCE-7")), "Sony ILCE 7");
        assert_eq!(camera_label(&pair("")), "unknown");
        assert_eq!(color_label(&pair("#6f4e37=35")), "#6f4e37");
        assert_eq!(color_label(&pair("")), "unknown");
    }

    #[test]
    fn percentage_steps() {
        assert_eq!(illumination_label(&SortKey::Number(45)), "5L");
        assert_eq!(contrast_label(&SortKey::Number(45)), "2C");
        assert_eq!(saturation_label(&SortKey::Number(0)), "0S");
    }

    #[test]
    fn rounding_covers_the_full_u64_range() {
        assert_eq!(round_div(u64::MAX, 10), u64::MAX / 10 + 1);
        assert_eq!(round_div(u64::MAX, MEGABYTE), u64::MAX / MEGABYTE + 1);
        assert_eq!(round_div(14, 10), 1);
        assert_eq!(round_div(15, 10), 2);
        assert_eq!(round_div(7, 1), 7);
        assert_eq!(
            illumination_label(&SortKey::Number(u64::MAX)),
            format!("{}L", u64::MAX / 10 + 1)
        );
    }

    #[test]
    fn hash_label_keeps_leading_zeros() {
        let key = SortKey::Hash {
            family: HashFamily::Chash,
            value: decode("0az", BASE36),
            width: 3,
        };
        assert_eq!(hash_label(&key), "0…");

        let key = SortKey::Hash {
            family: HashFamily::Chash,
            value: decode("z00", BASE36),
            width: 3,
        };
        assert_eq!(hash_label(&key), "z…");

        let missing = SortKey::Hash {
            family: HashFamily::Dhash,
            value: HashValue::zero(),
            width: 0,
        };
        assert_eq!(hash_label(&missing), "0…");
    }

    #[test]
    fn captions() {
        let r = MediaRecord {
            format: "JPEG".into(),
            mode: "RGB".into(),
            width: 6000,
            height: 4000,
            bytes: 2048,
            illumination: 45,
            top_colors: vec!["#6f4e37=35".into()],
            chash: "0123456789abc".into(),
            dhash: "0123".into(),
            ..Default::default()
        };
        assert_eq!(default_caption(&r), "JPEG 6000×4000 px");
        assert_eq!(bytes_caption(&r), "Size: 2.00 KB");
        assert_eq!(format_mode_caption(&r), "JPEG RGB");
        assert_eq!(camera_caption(&r), "Cam: unknown");
        assert_eq!(width_height_caption(&r), "W×H 6000×4000 px");
        assert_eq!(height_width_caption(&r), "H×W 4000×6000 px");
        assert_eq!(color_caption(&r), "Color: #6f4e37");
        assert_eq!(illumination_caption(&r), "Light: 45%");
        assert_eq!(contrast_caption(&r), "Contrast: -");
        assert_eq!(saturation_caption(&r), "Saturation: -");
        assert_eq!(hash_caption(&r, HashFamily::Chash), "chash: 01234567…");
        assert_eq!(hash_caption(&r, HashFamily::Dhash), "dhash: 0123");
    }
}
