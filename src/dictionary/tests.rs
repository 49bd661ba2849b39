//! Dictionary Module Tests
//!
//! Validates the bounded top-K admission policy against a brute-force
//! reference, plus the tie-break and ordering guarantees the coordinator
//! depends on for deterministic output.

#[cfg(test)]
mod tests {
    use crate::dictionary::CoverageDictionary;
    use crate::mining::types::{Candidate, ScoredCandidate};

    fn scored(tag: char, coverage: u64) -> ScoredCandidate {
        ScoredCandidate {
            candidate: Candidate::new(vec![tag]),
            coverage,
        }
    }

    #[test]
    fn test_appends_below_capacity() {
        let mut dictionary = CoverageDictionary::new(4);

        dictionary.admit(scored('a', 3));
        dictionary.admit(scored('b', 1));
        dictionary.admit(scored('c', 2));

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.capacity(), 4);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut dictionary = CoverageDictionary::new(3);

        for coverage in 0..50 {
            dictionary.admit(scored('x', coverage));
            assert!(dictionary.len() <= 3);
        }

        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_retains_highest_scores() {
        let mut dictionary = CoverageDictionary::new(3);

        for &coverage in &[5u64, 1, 9, 3, 7, 2, 8] {
            dictionary.admit(scored('x', coverage));
        }

        let mut retained: Vec<u64> = dictionary
            .entries()
            .iter()
            .map(|entry| entry.coverage)
            .collect();
        retained.sort_unstable();
        assert_eq!(retained, vec![7, 8, 9]);
    }

    #[test]
    fn test_matches_brute_force_top_k() {
        // Pseudo-random but reproducible admission sequence.
        let mut scores = Vec::new();
        let mut state = 7u64;
        for _ in 0..200 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            scores.push(state % 1000);
        }

        for capacity in [2usize, 5, 16, 128] {
            let mut dictionary = CoverageDictionary::new(capacity);
            for &coverage in &scores {
                dictionary.admit(scored('x', coverage));
            }

            let mut retained: Vec<u64> = dictionary
                .entries()
                .iter()
                .map(|entry| entry.coverage)
                .collect();
            retained.sort_unstable_by(|a, b| b.cmp(a));

            let mut expected = scores.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(capacity);

            assert_eq!(retained, expected, "capacity {}", capacity);
        }
    }

    #[test]
    fn test_exact_score_tie_keeps_first_seen() {
        let mut dictionary = CoverageDictionary::new(2);

        dictionary.admit(scored('a', 5));
        dictionary.admit(scored('b', 3));
        // Equal to the current worst: must be discarded, not swapped in.
        dictionary.admit(scored('c', 3));

        let tags: Vec<char> = dictionary
            .entries()
            .iter()
            .map(|entry| entry.candidate.symbols()[0])
            .collect();
        assert_eq!(tags, vec!['a', 'b']);
    }

    #[test]
    fn test_strictly_better_replaces_worst() {
        let mut dictionary = CoverageDictionary::new(2);

        dictionary.admit(scored('a', 5));
        dictionary.admit(scored('b', 3));
        dictionary.admit(scored('c', 4));

        let mut tags: Vec<char> = dictionary
            .entries()
            .iter()
            .map(|entry| entry.candidate.symbols()[0])
            .collect();
        tags.sort_unstable();
        assert_eq!(tags, vec!['a', 'c']);
    }

    #[test]
    fn test_worst_cache_survives_repeated_discards() {
        let mut dictionary = CoverageDictionary::new(2);

        dictionary.admit(scored('a', 10));
        dictionary.admit(scored('b', 5));
        // A run of losers exercises the cached-worst fast path.
        for _ in 0..20 {
            dictionary.admit(scored('x', 1));
        }
        dictionary.admit(scored('c', 6));

        let mut retained: Vec<u64> = dictionary
            .entries()
            .iter()
            .map(|entry| entry.coverage)
            .collect();
        retained.sort_unstable();
        assert_eq!(retained, vec![6, 10]);
    }

    #[test]
    fn test_finalize_sorts_descending_preserving_tie_order() {
        let mut dictionary = CoverageDictionary::new(4);

        dictionary.admit(scored('a', 2));
        dictionary.admit(scored('b', 7));
        dictionary.admit(scored('c', 2));
        dictionary.admit(scored('d', 7));

        let results = dictionary.finalize();
        let tags: Vec<char> = results
            .iter()
            .map(|entry| entry.candidate.symbols()[0])
            .collect();

        assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
        assert_eq!(results[0].coverage, 7);
        assert_eq!(results[3].coverage, 2);
    }

    #[test]
    fn test_finalize_below_capacity() {
        let mut dictionary = CoverageDictionary::new(128);

        dictionary.admit(scored('a', 1));
        dictionary.admit(scored('b', 9));

        let results = dictionary.finalize();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].coverage, 9);
    }
}
