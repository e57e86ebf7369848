//! # Perceptual Hash Keys
//!
//! Perceptual hashes are stored on records as fixed-length strings over a digit
//! alphabet. Ordering them as strings is wrong: the gallery orders by the
//! *numeric* value the string encodes, and decoded values routinely exceed 64
//! (and 128) bits. This module provides:
//!
//! - [`Alphabet`]: the digit alphabets, modeled as explicit constants
//! - [`HashFamily`]: each hash family bound to exactly one alphabet
//! - [`HashValue`]: an unsigned arbitrary-precision integer with a total order
//!
//! ## Family Alphabets
//!
//! | Family | Alphabet | Source |
//! |--------|----------|--------|
//! | `ahash` | base32 `0-9a-v` | average hash bit matrix |
//! | `dhash` | base32 `0-9a-v` | horizontal difference hash |
//! | `vhash` | base32 `0-9a-v` | vertical difference hash |
//! | `rchash` | base32 `0-9a-v` | row+column difference hash |
//! | `bhash` | base36 `0-9a-z` | blur hash, case-folded |
//! | `chash` | base36 `0-9a-z` | crop-resistant hash |
//!
//! The two alphabets are never inferred from the data: a base36 string decoded
//! as base32 (or the reverse) yields a different order.

mod alphabet;
mod value;

pub use alphabet::{Alphabet, BASE32, BASE36};
pub use value::{decode, decode_reversed, HashValue};

/// A perceptual hash family stored on every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashFamily {
    Ahash,
    Dhash,
    Vhash,
    Bhash,
    Rchash,
    Chash,
}

impl HashFamily {
    pub const ALL: [HashFamily; 6] = [
        HashFamily::Ahash,
        HashFamily::Dhash,
        HashFamily::Vhash,
        HashFamily::Bhash,
        HashFamily::Rchash,
        HashFamily::Chash,
    ];

    /// The attribute name of this family (also its criterion id).
    pub const fn name(self) -> &'static str {
        match self {
            HashFamily::Ahash => "ahash",
            HashFamily::Dhash => "dhash",
            HashFamily::Vhash => "vhash",
            HashFamily::Bhash => "bhash",
            HashFamily::Rchash => "rchash",
            HashFamily::Chash => "chash",
        }
    }

    /// The id of the suffix-clustering criterion for this family.
    pub const fn reversed_name(self) -> &'static str {
        match self {
            HashFamily::Ahash => "ahash-rev",
            HashFamily::Dhash => "dhash-rev",
            HashFamily::Vhash => "vhash-rev",
            HashFamily::Bhash => "bhash-rev",
            HashFamily::Rchash => "rchash-rev",
            HashFamily::Chash => "chash-rev",
        }
    }

    pub const fn alphabet(self) -> Alphabet {
        match self {
            HashFamily::Ahash | HashFamily::Dhash | HashFamily::Vhash | HashFamily::Rchash => {
                BASE32
            }
            HashFamily::Bhash | HashFamily::Chash => BASE36,
        }
    }
}

impl std::fmt::Display for HashFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
