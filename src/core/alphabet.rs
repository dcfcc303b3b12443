use std::collections::HashMap;

use super::error::{KeyIdError, Result};

/// The key alphabet, in code order. Ids issued by any version depend on this exact order.
pub const POOL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Number of symbols in [`POOL`]; also the checksum modulus.
pub const RADIX: u32 = 63;

/// Bidirectional mapping between key symbols and their numeric codes.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    codes: HashMap<char, u8>,
}

impl Alphabet {
    pub fn new() -> Self {
        let symbols: Vec<char> = POOL.chars().collect();
        let codes = symbols
            .iter()
            .enumerate()
            .map(|(code, &symbol)| (symbol, code as u8))
            .collect();
        Self { symbols, codes }
    }

    pub fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Symbol for `code`, which must be below the radix.
    pub fn symbol_at(&self, code: u8) -> Result<char> {
        self.symbols
            .get(code as usize)
            .copied()
            .ok_or(KeyIdError::CodeOutOfRange(code.into()))
    }

    /// Code for `symbol`, or [`KeyIdError::UnknownSymbol`].
    pub fn code_of(&self, symbol: char) -> Result<u8> {
        self.codes
            .get(&symbol)
            .copied()
            .ok_or(KeyIdError::UnknownSymbol(symbol))
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Infallible lookup for codes already reduced below the radix.
    pub(crate) fn symbol(&self, code: u8) -> char {
        self.symbols[usize::from(code)]
    }

    pub fn encode(&self, codes: &[u8]) -> Result<String> {
        codes.iter().map(|&c| self.symbol_at(c)).collect()
    }

    pub fn decode(&self, s: &str) -> Result<Vec<u8>> {
        s.chars().map(|c| self.code_of(c)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_has_radix_distinct_symbols() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.radix(), RADIX);
        assert_eq!(POOL.chars().count(), RADIX as usize);
        assert_eq!(alphabet.codes.len(), RADIX as usize);
    }

    #[test]
    fn code_order_is_lower_upper_digits_underscore() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.symbol_at(0).unwrap(), 'a');
        assert_eq!(alphabet.symbol_at(25).unwrap(), 'z');
        assert_eq!(alphabet.symbol_at(26).unwrap(), 'A');
        assert_eq!(alphabet.symbol_at(51).unwrap(), 'Z');
        assert_eq!(alphabet.symbol_at(52).unwrap(), '0');
        assert_eq!(alphabet.symbol_at(61).unwrap(), '9');
        assert_eq!(alphabet.symbol_at(62).unwrap(), '_');
    }

    #[test]
    fn symbol_and_code_are_inverse() {
        let alphabet = Alphabet::new();
        for code in 0..RADIX as u8 {
            let symbol = alphabet.symbol_at(code).unwrap();
            assert_eq!(alphabet.code_of(symbol).unwrap(), code);
        }
    }

    #[test]
    fn lookups_outside_the_alphabet_fail() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.symbol_at(63), Err(KeyIdError::CodeOutOfRange(63)));
        assert_eq!(alphabet.code_of('-'), Err(KeyIdError::UnknownSymbol('-')));
        assert_eq!(alphabet.code_of('é'), Err(KeyIdError::UnknownSymbol('é')));
        assert!(!alphabet.contains(' '));
    }

    #[test]
    fn decode_rejects_first_unknown_symbol() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.decode("aB9_").unwrap(), vec![0, 27, 61, 62]);
        assert_eq!(alphabet.decode("ab-c"), Err(KeyIdError::UnknownSymbol('-')));
        assert_eq!(alphabet.encode(&[0, 27, 61, 62]).unwrap(), "aB9_");
    }
}
