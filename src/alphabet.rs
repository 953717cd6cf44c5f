use crate::error::{EnigmaError, Result};
use std::collections::HashMap;
use std::fmt;

/// Characters reserved by cycle notation and settings lines
const RESERVED: [char; 3] = ['(', ')', '*'];

/// Ordered set of distinct symbols with index lookup in both directions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    indices: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `chars`, in order
    pub fn new(chars: &str) -> Result<Self> {
        let mut symbols = Vec::with_capacity(chars.len());
        let mut indices = HashMap::with_capacity(chars.len());

        for c in chars.chars() {
            if c.is_whitespace() || RESERVED.contains(&c) {
                return Err(EnigmaError::InvalidAlphabet(format!(
                    "reserved character {:?}",
                    c
                )));
            }
            if indices.insert(c, symbols.len()).is_some() {
                return Err(EnigmaError::InvalidAlphabet(format!(
                    "duplicate character {:?}",
                    c
                )));
            }
            symbols.push(c);
        }

        if symbols.is_empty() {
            return Err(EnigmaError::InvalidAlphabet("empty alphabet".into()));
        }

        Ok(Self { symbols, indices })
    }

    /// The 26 upper-case Latin letters
    pub fn latin() -> Self {
        let symbols: Vec<char> = ('A'..='Z').collect();
        let indices = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, indices }
    }

    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.indices.contains_key(&c)
    }

    /// Index of `c`, or `AlphabetMismatch` if it is not a member
    pub fn to_index(&self, c: char) -> Result<usize> {
        self.indices
            .get(&c)
            .copied()
            .ok_or(EnigmaError::AlphabetMismatch(c))
    }

    /// Symbol at `index`
    ///
    /// # Panics
    /// If `index >= self.size()`.
    pub fn to_symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
