/// A positional digit alphabet for hash strings.
///
/// The symbol index is the digit value; the alphabet length is the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    symbols: &'static [u8],
}

/// 32 symbols: `0-9a-v`.
pub const BASE32: Alphabet = Alphabet::new("base32", b"0123456789abcdefghijklmnopqrstuv");

/// 36 symbols: `0-9a-z`.
pub const BASE36: Alphabet = Alphabet::new("base36", b"0123456789abcdefghijklmnopqrstuvwxyz");

impl Alphabet {
    const fn new(name: &'static str, symbols: &'static [u8]) -> Self {
        Self { name, symbols }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn base(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Digit value of `c`, case-insensitive. `None` for symbols outside the alphabet.
    pub fn digit(&self, c: char) -> Option<u32> {
        if !c.is_ascii() {
            return None;
        }
        let folded = c.to_ascii_lowercase() as u8;
        self.symbols
            .iter()
            .position(|&s| s == folded)
            .map(|pos| pos as u32)
    }

    /// Symbol for digit `d`. Panics if `d >= base`, which the encoder never produces.
    pub fn symbol(&self, d: u32) -> char {
        self.symbols[d as usize] as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_lookup_is_case_insensitive() {
        assert_eq!(BASE36.digit('0'), Some(0));
        assert_eq!(BASE36.digit('z'), Some(35));
        assert_eq!(BASE36.digit('Z'), Some(35));
        assert_eq!(BASE32.digit('V'), Some(31));
    }

    #[test]
    fn symbols_outside_alphabet_have_no_digit() {
        assert_eq!(BASE32.digit('w'), None);
        assert_eq!(BASE32.digit('z'), None);
        assert_eq!(BASE36.digit('#'), None);
        assert_eq!(BASE36.digit('é'), None);
    }

    #[test]
    fn bases_match_symbol_counts() {
        assert_eq!(BASE32.base(), 32);
        assert_eq!(BASE36.base(), 36);
        assert_eq!(BASE32.symbol(31), 'v');
        assert_eq!(BASE36.symbol(35), 'z');
    }
}
