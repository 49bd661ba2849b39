/// Non-overlapping coverage of `pattern` over `corpus`.
///
/// Scans from the start of the corpus; every occurrence advances the cursor
/// past its own end, so overlapping matches are never counted. Returns
/// `occurrences * pattern length`. A pattern containing a symbol absent from
/// the corpus simply scores 0.
pub fn coverage(corpus: &[char], pattern: &[char]) -> u64 {
    if pattern.is_empty() {
        return 0;
    }

    let mut cursor = 0;
    let mut occurrences = 0u64;
    while cursor + pattern.len() <= corpus.len() {
        if corpus[cursor..cursor + pattern.len()] == *pattern {
            occurrences += 1;
            cursor += pattern.len();
        } else {
            cursor += 1;
        }
    }

    occurrences * pattern.len() as u64
}
