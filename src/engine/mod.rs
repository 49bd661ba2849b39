//! Aggregation Engine Module
//!
//! Drives the whole computation once the process group is formed.
//!
//! ## Protocol, per process
//! 1. **Distribution**: Receive (or, on the coordinator, provide) the
//!    alphabet and corpus via the two broadcast rounds.
//! 2. **Rounds**: For each candidate length, plan the local partition,
//!    enumerate and score it, and join the gather collective. The
//!    coordinator folds every gathered block, rank-ascending and
//!    index-ascending within a block, into the single persistent dictionary.
//! 3. **Report**: After the last round the coordinator finalizes the
//!    dictionary and writes the result table.
//!
//! ## Submodules
//! - **`rounds`**: The per-length aggregation loop and local enumeration.
//! - **`report`**: The stdout result table format.

pub mod report;
pub mod rounds;
