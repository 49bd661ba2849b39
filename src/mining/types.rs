//! Mining Data Types
//!
//! The candidate record and its scored counterpart. `ScoredCandidate` is the
//! record the gather collective moves across ranks, so its shape is part of
//! the wire contract versioned by `cluster::types::PROTOCOL_VERSION`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-length symbol sequence drawn from the alphabet.
///
/// Identity is the symbol sequence. The length is 1..=`max_len`; the empty
/// candidate is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    symbols: Vec<char>,
}

impl Candidate {
    pub fn new(symbols: Vec<char>) -> Self {
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

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// A candidate plus its coverage score:
/// non-overlapping occurrence count times candidate length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub coverage: u64,
}
