//! Bounded Top-K Dictionary Module
//!
//! The fixed-capacity result structure the coordinator folds every gathered
//! candidate into. Admission is O(1) amortized: a cached "current worst"
//! slot avoids a full rescan on every call.
//!
//! The dictionary is owned exclusively by the coordinator and fed
//! sequentially; it is not safe for concurrent mutation and is never
//! replicated to other ranks.

pub mod top_k;

pub use top_k::CoverageDictionary;

#[cfg(test)]
mod tests;
