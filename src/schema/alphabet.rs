//! Symbol sets and target sequences.
//!
//! Genomes are byte sequences over a small fixed character set: the space
//! character plus the uppercase letters `A`-`Z`. An [`Alphabet`] is a
//! duplicate-free subset of that set; a [`Target`] is a non-empty sequence of
//! symbols drawn from an alphabet.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Every symbol a genome may ever contain, in canonical order.
pub const STANDARD_SYMBOLS: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An immutable, ordered set of allowed gene symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Create an alphabet from a string of symbols.
    ///
    /// The symbols must be non-empty, unique, and all taken from
    /// [`STANDARD_SYMBOLS`].
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut seen = Vec::with_capacity(symbols.len());
        for ch in symbols.chars() {
            if !STANDARD_SYMBOLS.contains(ch) {
                return Err(ConfigError::UnsupportedSymbol(ch));
            }
            // ASCII only past this point, so the cast is lossless.
            let byte = ch as u8;
            if seen.contains(&byte) {
                return Err(ConfigError::DuplicateSymbol(ch));
            }
            seen.push(byte);
        }

        Ok(Self { symbols: seen })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, in the alphabet's order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// Check whether a symbol belongs to this alphabet.
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// The symbols as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: STANDARD_SYMBOLS.as_bytes().to_vec(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.symbols))
    }
}

impl TryFrom<String> for Alphabet {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

/// The fixed sequence a population evolves toward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    symbols: Box<[u8]>,
}

impl Target {
    /// Create a target, checking every symbol against `alphabet`.
    pub fn new(text: &str, alphabet: &Alphabet) -> Result<Self, ConfigError> {
        if text.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }

        let mut symbols = Vec::with_capacity(text.len());
        for (position, ch) in text.chars().enumerate() {
            if !ch.is_ascii() || !alphabet.contains(ch as u8) {
                return Err(ConfigError::InvalidTargetSymbol {
                    symbol: ch,
                    position,
                });
            }
            symbols.push(ch as u8);
        }

        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// Target length (the genome length `L`).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed target.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The target symbols.
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.symbols))
    }
}

/// Render ASCII gene symbols as text.
pub(crate) fn render(symbols: &[u8]) -> String {
    symbols.iter().map(|&b| b as char).collect()
}
