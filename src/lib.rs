//! Distributed N-gram Coverage Mining Cluster Library
//!
//! This library crate defines the core modules that make up the distributed
//! mining engine. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`cluster`**: The collective communication runtime. A fixed-size process
//!   group over TCP with a rank-0 coordinator, providing the two collectives
//!   the engine needs: broadcast (one-to-all) and gather (all-to-one).
//! - **`corpus`**: The data intake pipeline. Reads the raw input stream on the
//!   coordinator, derives the alphabet, and distributes both to every rank.
//! - **`mining`**: The pure computation kernels. Contains the candidate
//!   indexer (mixed-radix enumeration), the partition planner, and the
//!   non-overlapping coverage scorer.
//! - **`dictionary`**: The bounded top-K result structure retaining only the
//!   highest-coverage candidates admitted so far.
//! - **`engine`**: The per-length aggregation rounds and the final report.

pub mod cluster;
pub mod corpus;
pub mod dictionary;
pub mod engine;
pub mod mining;
