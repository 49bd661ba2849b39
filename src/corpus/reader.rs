use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::BufRead;

use super::types::{Alphabet, Corpus};

/// Reads every line of `input` to completion, building the corpus by plain
/// concatenation and the alphabet by first-seen-order deduplication of every
/// symbol encountered.
///
/// Line terminators are not part of the corpus; nothing else is filtered.
pub fn read_corpus(input: impl BufRead) -> Result<(Alphabet, Corpus)> {
    let mut seen = HashSet::new();
    let mut alphabet = Vec::new();
    let mut symbols = Vec::new();

    for line in input.lines() {
        let line = line.context("reading a corpus line")?;
        for symbol in line.chars() {
            if seen.insert(symbol) {
                alphabet.push(symbol);
            }
            symbols.push(symbol);
        }
    }

    Ok((Alphabet::from_symbols(alphabet), Corpus::from_symbols(symbols)))
}
