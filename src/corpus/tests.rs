//! Corpus Module Tests
//!
//! Validates ingestion (concatenation, alphabet discovery order) and the
//! broadcast distribution of both shared values.

#[cfg(test)]
mod tests {
    use crate::cluster::communicator::Communicator;
    use crate::cluster::types::RunConfig;
    use crate::corpus::distribute::distribute;
    use crate::corpus::reader::read_corpus;
    use crate::corpus::types::{Alphabet, Corpus};
    use std::io::Cursor;
    use tokio::net::TcpListener;

    // ============================================================
    // READER TESTS
    // ============================================================

    #[test]
    fn test_lines_concatenated_without_separator() {
        let (_, corpus) = read_corpus(Cursor::new("AB\nCD\nE")).unwrap();

        assert_eq!(corpus.symbols(), &['A', 'B', 'C', 'D', 'E']);
        assert_eq!(corpus.len(), 5);
    }

    #[test]
    fn test_alphabet_first_seen_order() {
        let (alphabet, _) = read_corpus(Cursor::new("banana")).unwrap();

        assert_eq!(alphabet.symbols(), &['b', 'a', 'n']);
    }

    #[test]
    fn test_alphabet_dedup_across_lines() {
        let (alphabet, corpus) = read_corpus(Cursor::new("AT\nGA\nTC")).unwrap();

        assert_eq!(alphabet.symbols(), &['A', 'T', 'G', 'C']);
        assert_eq!(corpus.symbols(), &['A', 'T', 'G', 'A', 'T', 'C']);
    }

    #[test]
    fn test_empty_input() {
        let (alphabet, corpus) = read_corpus(Cursor::new("")).unwrap();

        assert!(alphabet.is_empty());
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let (_, corpus) = read_corpus(Cursor::new("AB\n")).unwrap();

        assert_eq!(corpus.len(), 2);
    }

    // ============================================================
    // DISTRIBUTION TESTS
    // ============================================================

    #[tokio::test]
    async fn test_distribution_replicates_both_values() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let config = RunConfig {
            max_len: 2,
            capacity: 4,
        };

        let workers: Vec<_> = (0..2)
            .map(|_| {
                tokio::spawn(async move {
                    let mut comm = Communicator::worker(addr).await.unwrap();
                    distribute(&mut comm, None).await.unwrap()
                })
            })
            .collect();

        let ingested = read_corpus(Cursor::new("ATGCATGC")).unwrap();
        let mut comm = Communicator::coordinator(listener, 3, config).await.unwrap();
        let (alphabet, corpus) = distribute(&mut comm, Some(ingested)).await.unwrap();

        let expected_alphabet = Alphabet::from_symbols(vec!['A', 'T', 'G', 'C']);
        let expected_corpus =
            Corpus::from_symbols(vec!['A', 'T', 'G', 'C', 'A', 'T', 'G', 'C']);
        assert_eq!(alphabet, expected_alphabet);
        assert_eq!(corpus, expected_corpus);

        for worker in workers {
            let (worker_alphabet, worker_corpus) = worker.await.unwrap();
            assert_eq!(worker_alphabet, expected_alphabet);
            assert_eq!(worker_corpus, expected_corpus);
        }
    }

    #[test]
    fn test_corpus_bincode_round_trip() {
        let corpus = Corpus::from_symbols(vec!['a', 'b', 'c']);

        let encoded = bincode::serialize(&corpus).expect("serialization failed");
        let restored: Corpus = bincode::deserialize(&encoded).expect("deserialization failed");

        assert_eq!(restored, corpus);
    }
}
