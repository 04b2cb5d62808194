use std::collections::HashMap;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstructionError {
    EmptyAlphabet,
    RadixTooSmall { radix: usize },
    DecodeMapLengthMismatch { expected: usize, actual: usize },
    SymbolCollision { symbol: char, first: usize, second: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    Malformed,
    InvalidSymbol { symbol: char, position: usize },
    NegativeNotAllowed,
    Overflow,
}

impl error::Error for ConstructionError {}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::EmptyAlphabet => write!(f, "Empty alphabet"),
            Self::RadixTooSmall { radix } => write!(f, "Radix {} too small, at least 2 symbols required", radix),
            Self::DecodeMapLengthMismatch { expected, actual } => {
                write!(f, "Decode map has {} variant strings, expected {}", actual, expected)
            }
            Self::SymbolCollision { symbol, first, second } => {
                write!(f, "Symbol '{}' claimed by digit values {} and {}", symbol, first, second)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Malformed => write!(f, "Malformed input"),
            Self::InvalidSymbol { symbol, position } => {
                write!(f, "Invalid symbol '{}' at position {}", symbol, position)
            }
            Self::NegativeNotAllowed => write!(f, "Negative value not allowed for unsigned target"),
            Self::Overflow => write!(f, "Value out of range for target width"),
        }
    }
}

/// Immutable symbol table binding digit values `[0, R)` to text symbols.
///
/// Encoding always emits the canonical symbol stored at each digit position.
/// Decoding goes through a separate lookup table which may be many-to-one:
/// several symbols can resolve to the same digit value, either through case
/// folding or through an explicit decode map ([`Alphabet::new_with_decode_map`]).
///
/// An alphabet holds no mutable state after construction and can be shared
/// freely across threads.
pub struct Alphabet {
    symbols: Vec<char>,
    decode: HashMap<char, usize>,
    case_sensitive: bool,
}

fn fold(symbol: char) -> char {
    symbol.to_lowercase().next().unwrap_or(symbol)
}

impl Alphabet {
    /// Builds a symmetric alphabet from a string of symbols, where digit
    /// value equals position in the string.
    ///
    /// When `case_sensitive` is false, decode lookups fold input to one case
    /// first, so `decode("ff")` and `decode("FF")` agree; encoding still
    /// emits the symbols exactly as supplied.
    ///
    /// An alphabet may contain `-` as a symbol, but the decoder strips one
    /// leading `-` as a sign marker before any symbol lookup, so such
    /// alphabets are ambiguous for text whose first digit is `-`.
    pub fn new(symbols: &str, case_sensitive: bool) -> Result<Self, ConstructionError> {
        let symbols: Vec<char> = symbols.chars().collect();
        Self::check_radix(symbols.len())?;
        let mut decode = HashMap::with_capacity(symbols.len());
        for (digit, &symbol) in symbols.iter().enumerate() {
            let key = if case_sensitive { symbol } else { fold(symbol) };
            if let Some(&first) = decode.get(&key) {
                return Err(ConstructionError::SymbolCollision { symbol, first, second: digit });
            }
            decode.insert(key, digit);
        }
        Ok(Self { symbols, decode, case_sensitive })
    }

    /// Builds an asymmetric alphabet: `encode_symbols` supplies the canonical
    /// symbol per digit value, and every character of `decode_variants[i]`
    /// additionally decodes to digit value `i`.
    ///
    /// This supports tolerant schemes such as Crockford base32, where `0`,
    /// `o` and `O` all decode to digit 0. The decode map is taken literally
    /// (no case folding); variants spell out every accepted form. Canonical
    /// symbols always decode to their own digit value, whether or not they
    /// are repeated in their variant string.
    pub fn new_with_decode_map(encode_symbols: &str, decode_variants: &[&str]) -> Result<Self, ConstructionError> {
        let symbols: Vec<char> = encode_symbols.chars().collect();
        Self::check_radix(symbols.len())?;
        if decode_variants.len() != symbols.len() {
            return Err(ConstructionError::DecodeMapLengthMismatch {
                expected: symbols.len(),
                actual: decode_variants.len(),
            });
        }
        let mut decode = HashMap::with_capacity(symbols.len());
        for (digit, &symbol) in symbols.iter().enumerate() {
            Self::insert(&mut decode, symbol, digit)?;
        }
        for (digit, variants) in decode_variants.iter().enumerate() {
            for symbol in variants.chars() {
                Self::insert(&mut decode, symbol, digit)?;
            }
        }
        Ok(Self { symbols, decode, case_sensitive: true })
    }

    fn check_radix(radix: usize) -> Result<(), ConstructionError> {
        match radix {
            0 => Err(ConstructionError::EmptyAlphabet),
            1 => Err(ConstructionError::RadixTooSmall { radix }),
            _ => Ok(()),
        }
    }

    fn insert(decode: &mut HashMap<char, usize>, symbol: char, digit: usize) -> Result<(), ConstructionError> {
        match decode.get(&symbol) {
            Some(&first) if first != digit => Err(ConstructionError::SymbolCollision { symbol, first, second: digit }),
            Some(_) => Ok(()),
            None => {
                decode.insert(symbol, digit);
                Ok(())
            }
        }
    }

    /// Number of distinct digit values; equals the symbol count.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Resolves a symbol to its digit value. `position` is only used to
    /// report where in the input the symbol was found.
    pub fn digit_value(&self, symbol: char, position: usize) -> Result<usize, DecodeError> {
        let key = if self.case_sensitive { symbol } else { fold(symbol) };
        match self.decode.get(&key) {
            Some(&digit) => Ok(digit),
            None => Err(DecodeError::InvalidSymbol { symbol, position }),
        }
    }

    /// Canonical symbol for a digit value. Digits are produced internally
    /// via modulo-radix, so they are always in range.
    pub fn symbol_for(&self, digit: usize) -> char {
        self.symbols[digit]
    }
}
