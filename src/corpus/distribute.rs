use anyhow::Result;

use super::types::{Alphabet, Corpus};
use crate::cluster::communicator::Communicator;

/// Distributes the ingested state to the whole group: one broadcast round for
/// the alphabet, then one for the corpus, each size-then-payload on the wire.
///
/// The coordinator passes `Some(ingested)`; workers pass `None`. Every rank,
/// the coordinator included, returns its own identical copy. Any transport
/// failure mid-protocol is fatal, there is no partial-broadcast recovery.
pub async fn distribute(
    comm: &mut Communicator,
    ingested: Option<(Alphabet, Corpus)>,
) -> Result<(Alphabet, Corpus)> {
    let (alphabet_in, corpus_in) = match ingested {
        Some((alphabet, corpus)) => (Some(alphabet), Some(corpus)),
        None => (None, None),
    };

    let alphabet: Alphabet = comm.broadcast(alphabet_in.as_ref()).await?;
    let corpus: Corpus = comm.broadcast(corpus_in.as_ref()).await?;

    tracing::debug!(
        "rank {} holds {} alphabet symbol(s) and a corpus of {} symbol(s)",
        comm.rank(),
        alphabet.len(),
        corpus.len()
    );

    Ok((alphabet, corpus))
}
