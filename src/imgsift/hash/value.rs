use super::Alphabet;
use std::cmp::Ordering;
use tracing::warn;

/// Unsigned arbitrary-precision integer decoded from a hash string.
///
/// Stored as little-endian 32-bit limbs with no trailing zero limbs, so zero is
/// the empty limb vector and equal values always have equal representations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HashValue {
    limbs: Vec<u32>,
}

impl HashValue {
    pub fn zero() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_u64(value: u64) -> Self {
        let mut out = Self {
            limbs: vec![value as u32, (value >> 32) as u32],
        };
        out.normalize();
        out
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits.
    #[cfg(test)]
    pub(crate) fn bits(&self) -> u64 {
        match self.limbs.last() {
            None => 0,
            Some(top) => (self.limbs.len() as u64 - 1) * 32 + (32 - top.leading_zeros() as u64),
        }
    }

    /// The value as `u128`, or `None` if it does not fit.
    #[cfg(test)]
    pub(crate) fn to_u128(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, &limb| (acc << 32) | limb as u128),
        )
    }

    /// `self = self * base + digit`
    fn mul_add(&mut self, base: u32, digit: u32) {
        let mut carry = digit as u64;
        for limb in self.limbs.iter_mut() {
            let v = (*limb as u64) * (base as u64) + carry;
            *limb = v as u32;
            carry = v >> 32;
        }
        if carry > 0 {
            self.limbs.push(carry as u32);
        }
    }

    /// `self = self / divisor`, returning the remainder.
    fn div_rem(&mut self, divisor: u32) -> u32 {
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let cur = (rem << 32) | *limb as u64;
            *limb = (cur / divisor as u64) as u32;
            rem = cur % divisor as u64;
        }
        self.normalize();
        rem as u32
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Encodes the value in `alphabet`, left-padded with the zero symbol to `width`.
    pub fn encode(&self, alphabet: Alphabet, width: usize) -> String {
        let base = alphabet.base();
        let mut rest = self.clone();
        let mut digits = Vec::new();
        while !rest.is_zero() {
            digits.push(alphabet.symbol(rest.div_rem(base)));
        }
        while digits.len() < width.max(1) {
            digits.push(alphabet.symbol(0));
        }
        digits.into_iter().rev().collect()
    }
}

impl Ord for HashValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for HashValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Decodes `source` left to right: `value = value * BASE + digit(c)`.
///
/// Symbols outside the alphabet count as digit zero; one warning is logged per
/// string. An empty string decodes to zero.
pub fn decode(source: &str, alphabet: Alphabet) -> HashValue {
    decode_chars(source, source.chars(), alphabet)
}

/// Decodes the character-reversed `source`, so values cluster by suffix.
pub fn decode_reversed(source: &str, alphabet: Alphabet) -> HashValue {
    decode_chars(source, source.chars().rev(), alphabet)
}

fn decode_chars(
    source: &str,
    chars: impl Iterator<Item = char>,
    alphabet: Alphabet,
) -> HashValue {
    let base = alphabet.base();
    let mut value = HashValue::zero();
    let mut malformed = 0usize;
    for c in chars {
        let digit = alphabet.digit(c).unwrap_or_else(|| {
            malformed += 1;
            0
        });
        value.mul_add(base, digit);
    }
    if malformed > 0 {
        warn!(
            target: "imgsift::hash",
            hash = source,
            alphabet = alphabet.name(),
            malformed,
            "hash contains symbols outside its alphabet; treated as zero digits"
        );
    }
    value
}

#[cfg(test)]
mod tests {
    use super::super::{BASE32, BASE36};
    use super::*;

    #[test]
    fn empty_string_decodes_to_zero() {
        assert!(decode("", BASE32).is_zero());
        assert!(decode_reversed("", BASE36).is_zero());
    }

    #[test]
    fn decodes_positional_digits() {
        assert_eq!(decode("10", BASE32).to_u128(), Some(32));
        assert_eq!(decode("10", BASE36).to_u128(), Some(36));
        assert_eq!(decode("zz", BASE36).to_u128(), Some(35 * 36 + 35));
        assert_eq!(decode("0000v", BASE32).to_u128(), Some(31));
    }

    #[test]
    fn alphabets_are_not_interchangeable() {
        assert_ne!(decode("1a", BASE32), decode("1a", BASE36));
    }

    #[test]
    fn reversed_decoding_reads_suffix_first() {
        assert_eq!(decode_reversed("01", BASE32).to_u128(), Some(32));
        assert_eq!(decode_reversed("10", BASE32).to_u128(), Some(1));
    }

    #[test]
    fn malformed_symbols_count_as_zero() {
        assert_eq!(decode("1#", BASE36), decode("10", BASE36));
        assert_eq!(decode("w1", BASE32), decode("01", BASE32));
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(decode("AbC", BASE36), decode("abc", BASE36));
    }

    #[test]
    fn decodes_beyond_native_width() {
        // 40 base36 symbols hold ~206 bits.
        let wide = "z".repeat(40);
        let value = decode(&wide, BASE36);
        assert!(value.bits() > 128);
        assert!(value.to_u128().is_none());
        assert!(value > decode(&"z".repeat(39), BASE36));
    }

    #[test]
    fn compares_numerically_not_lexically() {
        let small = decode("0zzz", BASE36);
        let big = decode("1000", BASE36);
        assert!(small < big);
        assert_eq!(big.cmp(&big.clone()), Ordering::Equal);
    }

    #[test]
    fn encode_restores_fixed_width() {
        let value = decode("00a1v", BASE32);
        assert_eq!(value.encode(BASE32, 5), "00a1v");
        assert_eq!(HashValue::zero().encode(BASE36, 3), "000");
        assert_eq!(HashValue::from_u64(35).encode(BASE36, 0), "z");
    }

    #[test]
    fn from_u64_matches_decode() {
        assert_eq!(HashValue::from_u64(0), HashValue::zero());
        assert_eq!(
            HashValue::from_u64(u64::MAX),
            decode("fvvvvvvvvvvvv", BASE32)
        );
        assert_eq!(HashValue::from_u64(1 << 40).bits(), 41);
    }
}
