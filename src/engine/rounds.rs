use anyhow::Result;
use std::ops::Range;

use crate::cluster::communicator::Communicator;
use crate::corpus::distribute::distribute;
use crate::corpus::types::{Alphabet, Corpus};
use crate::dictionary::CoverageDictionary;
use crate::mining::types::ScoredCandidate;
use crate::mining::{indexer, partition, scorer};

/// Full protocol for one process: distribute the shared state, run every
/// aggregation round, and finalize.
///
/// The coordinator passes `Some(ingested)` and gets back `Some(results)`,
/// sorted descending by coverage; workers pass `None` and get `None`.
pub async fn execute(
    comm: &mut Communicator,
    ingested: Option<(Alphabet, Corpus)>,
) -> Result<Option<Vec<ScoredCandidate>>> {
    let (alphabet, corpus) = distribute(comm, ingested).await?;
    run_rounds(comm, &alphabet, &corpus).await
}

/// The per-length aggregation loop.
///
/// Every rank, the coordinator included, computes its own partition and
/// scores it locally; one gather per length delivers all contributions to
/// the coordinator. The dictionary persists across lengths, so shorter and
/// longer candidates compete in the same bounded result set.
pub async fn run_rounds(
    comm: &mut Communicator,
    alphabet: &Alphabet,
    corpus: &Corpus,
) -> Result<Option<Vec<ScoredCandidate>>> {
    let max_len = comm.config().max_len;
    let capacity = comm.config().capacity;

    // Reject an unaddressable index space before any round starts; every
    // rank derives the same verdict from the broadcast alphabet size.
    for length in 1..=max_len {
        indexer::total_count(alphabet.len(), length)?;
    }

    let mut dictionary = if comm.is_coordinator() {
        Some(CoverageDictionary::new(capacity))
    } else {
        None
    };

    for length in 1..=max_len {
        let total = indexer::total_count(alphabet.len(), length)?;
        let assigned = partition::plan(total, comm.world_size(), comm.rank());

        if comm.is_coordinator() {
            tracing::info!(
                "computing candidates of size {} ({} across {} rank(s))",
                length,
                total,
                comm.world_size()
            );
        }

        let local = score_partition(alphabet, corpus, length, assigned);
        tracing::debug!(
            "rank {} scored {} candidate(s) of size {}",
            comm.rank(),
            local.len(),
            length
        );

        let gathered = comm.gather(local).await?;

        if let Some(dictionary) = dictionary.as_mut() {
            let blocks = gathered
                .ok_or_else(|| anyhow::anyhow!("gather returned no blocks on the coordinator"))?;
            for block in blocks {
                for entry in block {
                    dictionary.admit(entry);
                }
            }
        }
    }

    Ok(dictionary.map(CoverageDictionary::finalize))
}

/// Enumerates and scores the candidates in `assigned`. An empty range yields
/// an empty, still-gathered contribution. The output order (ascending index)
/// is part of the tie-break determinism contract.
fn score_partition(
    alphabet: &Alphabet,
    corpus: &Corpus,
    length: usize,
    assigned: Range<u64>,
) -> Vec<ScoredCandidate> {
    let mut local = Vec::with_capacity((assigned.end - assigned.start) as usize);
    for index in assigned {
        let candidate = indexer::encode(alphabet, index, length);
        let coverage = scorer::coverage(corpus.symbols(), candidate.symbols());
        local.push(ScoredCandidate { candidate, coverage });
    }
    local
}
