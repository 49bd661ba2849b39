//! Corpus Data Types
//!
//! The two immutable values shared by every rank: the alphabet and the
//! corpus itself. Both are serialized with bincode when broadcast.

use serde::{Deserialize, Serialize};

/// The deduplicated symbols appearing in the corpus, in first-seen order.
///
/// The order fixes the candidate index space, so it must be identical on
/// every rank; it is established once on the coordinator during ingestion
/// and broadcast from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Wraps an already-deduplicated symbol list. Order is preserved as given.
    pub fn from_symbols(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `index`. Callers stay within `0..len()` by construction
    /// of the mixed-radix arithmetic.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

/// The full input as one contiguous symbol sequence, all lines concatenated
/// with no inserted separator. Immutable after distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    symbols: Vec<char>,
}

impl Corpus {
    pub fn from_symbols(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
