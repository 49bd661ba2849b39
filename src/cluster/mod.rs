//! Collective Communication Module
//!
//! Implements a fixed-size process group over TCP, modelled on the classic
//! coordinator/worker collective topology: rank 0 listens and every other
//! rank connects, and from then on the group cooperates exclusively through
//! blocking collective operations.
//!
//! ## Core Mechanisms
//! - **Group formation**: Workers send a versioned `Join`; the coordinator
//!   assigns ranks in connection order and replies with a `Welcome` carrying
//!   the rank, the world size, and the run configuration.
//! - **Broadcast**: One-to-all, size-then-payload framing. Every rank,
//!   the coordinator included, leaves with an identical copy.
//! - **Gather**: All-to-one. The coordinator receives each rank's
//!   contribution as a contiguous block, in ascending rank order.
//!
//! Every collective is a barrier: a rank that never arrives stalls the whole
//! run, and any transport error is fatal with no retry.

pub mod communicator;
pub mod types;
