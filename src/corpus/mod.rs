//! Corpus Ingestion & Distribution Module
//!
//! Handles the acquisition of the raw text corpus and its distribution to
//! every rank of the process group.
//!
//! ## Workflow
//! 1. **Ingestion**: The coordinator reads the whole input stream line by
//!    line, concatenating every symbol (no separators) into the corpus and
//!    recording each distinct symbol in first-seen order for the alphabet.
//! 2. **Distribution**: Two broadcast rounds, alphabet then corpus, each
//!    size-then-payload on the wire, leave every rank holding bit-identical
//!    copies. The alphabet order is broadcast, never recomputed locally,
//!    because the candidate index space depends on it.
//!
//! Both values are immutable once distributed.

pub mod distribute;
pub mod reader;
pub mod types;

#[cfg(test)]
mod tests;
