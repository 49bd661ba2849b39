//! Cluster Wire Types
//!
//! Defines the control frames exchanged while the process group forms, and
//! the run configuration the coordinator hands to every joining worker.
//!
//! All frames are serialized with bincode behind a u32 length prefix. The
//! protocol version is checked at join time so that mismatched binaries fail
//! the run immediately instead of corrupting a collective mid-protocol.

use serde::{Deserialize, Serialize};

/// Version of the frame layout and of the gathered record format.
/// Bumped whenever `ScoredCandidate` or any frame changes shape.
pub const PROTOCOL_VERSION: u32 = 1;

/// Rank of the coordinator process.
pub const COORDINATOR_RANK: usize = 0;

/// Run parameters fixed by the coordinator and delivered to every worker
/// inside `Welcome`, so no rank can disagree on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Maximum candidate length enumerated (inclusive).
    pub max_len: usize,
    /// Capacity of the coordinator's bounded top-K dictionary.
    pub capacity: usize,
}

impl RunConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_len < 2 {
            anyhow::bail!("max candidate length must be at least 2, got {}", self.max_len);
        }
        if self.capacity < 2 {
            anyhow::bail!("dictionary capacity must be at least 2, got {}", self.capacity);
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_len: 3,
            capacity: 128,
        }
    }
}

/// The control handshake for group formation.
///
/// - `Join`: Sent by a connecting worker, carrying its protocol version.
/// - `Welcome`: The coordinator's reply, assigning the worker its rank and
///   sharing the group size and run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ControlFrame {
    Join {
        protocol_version: u32,
    },

    Welcome {
        protocol_version: u32,
        rank: usize,
        world_size: usize,
        config: RunConfig,
    },
}
