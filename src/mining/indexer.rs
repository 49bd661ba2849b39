use anyhow::{Context, Result};

use super::types::Candidate;
use crate::corpus::types::Alphabet;

/// Number of candidates of `length` symbols: `alphabet_size ^ length`.
///
/// The whole index space must fit in `u64`; exceeding it is a fatal
/// configuration error, reported here before any arithmetic can wrap.
pub fn total_count(alphabet_size: usize, length: usize) -> Result<u64> {
    let exponent = u32::try_from(length).context("candidate length out of range")?;
    (alphabet_size as u64).checked_pow(exponent).ok_or_else(|| {
        anyhow::anyhow!(
            "index space {}^{} exceeds the u64 candidate index range",
            alphabet_size,
            length
        )
    })
}

/// Materializes the candidate at `index` in the length-`length` index space.
///
/// Mixed-radix positional scheme, base = alphabet size: each step takes
/// `index mod base` as the next symbol (least significant position first)
/// and divides by the base. Identical on every rank for an identical
/// alphabet order.
pub fn encode(alphabet: &Alphabet, index: u64, length: usize) -> Candidate {
    let base = alphabet.len() as u64;
    let mut remaining = index;
    let mut symbols = Vec::with_capacity(length);
    for _ in 0..length {
        symbols.push(alphabet.symbol((remaining % base) as usize));
        remaining /= base;
    }
    Candidate::new(symbols)
}

/// Inverse of `encode`. `None` if any symbol is not in the alphabet.
pub fn decode(alphabet: &Alphabet, candidate: &Candidate) -> Option<u64> {
    let base = alphabet.len() as u64;
    let mut index = 0u64;
    for symbol in candidate.symbols().iter().rev() {
        let position = alphabet.symbols().iter().position(|s| s == symbol)?;
        index = index * base + position as u64;
    }
    Some(index)
}
