//! Candidate Mining Module
//!
//! The pure computation kernels of the engine. Nothing here touches the
//! network or holds state; every rank runs these functions independently and
//! must get identical answers from identical inputs.
//!
//! ## Submodules
//! - **`indexer`**: The bijection between candidate sequences and their
//!   global indices (mixed-radix, least-significant symbol first).
//! - **`partition`**: The contiguous index sub-range each rank owns for a
//!   given candidate length, computed identically everywhere with no
//!   communication.
//! - **`scorer`**: The non-overlapping coverage score of a candidate against
//!   the corpus.
//! - **`types`**: The candidate record and the scored record the gather
//!   collective carries across ranks.

pub mod indexer;
pub mod partition;
pub mod scorer;
pub mod types;
