use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::types::{ControlFrame, RunConfig, COORDINATOR_RANK, PROTOCOL_VERSION};

/// Upper bound on a single frame. Anything larger indicates a corrupted or
/// mismatched peer rather than a legitimate payload.
const MAX_FRAME_BYTES: u32 = 1 << 30;

enum Links {
    /// Rank 0. `peers[r - 1]` is the link to rank `r`.
    Coordinator { peers: Vec<TcpStream> },
    /// Any other rank; a single link back to the coordinator.
    Worker { upstream: TcpStream },
}

/// One process's endpoint of the fixed-size group.
///
/// Owns the sockets for the lifetime of the run. Both collectives block until
/// every participant has arrived; a rank that never calls in stalls the whole
/// computation, which is the intended failure mode.
pub struct Communicator {
    rank: usize,
    world_size: usize,
    config: RunConfig,
    links: Links,
}

impl Communicator {
    /// Forms the group as rank 0. Blocks until exactly `world_size - 1`
    /// workers have joined, assigning ranks in connection order.
    pub async fn coordinator(
        listener: TcpListener,
        world_size: usize,
        config: RunConfig,
    ) -> Result<Self> {
        if world_size == 0 {
            anyhow::bail!("world size must be at least 1");
        }
        config.validate()?;

        let mut peers = Vec::with_capacity(world_size - 1);
        for next_rank in 1..world_size {
            let (mut stream, addr) = listener
                .accept()
                .await
                .context("accepting a worker connection")?;
            stream.set_nodelay(true)?;

            match read_control(&mut stream).await? {
                ControlFrame::Join { protocol_version } => {
                    if protocol_version != PROTOCOL_VERSION {
                        anyhow::bail!(
                            "worker {} speaks protocol {} (expected {})",
                            addr,
                            protocol_version,
                            PROTOCOL_VERSION
                        );
                    }
                }
                other => {
                    anyhow::bail!("unexpected frame from {} during join: {:?}", addr, other);
                }
            }

            let welcome = ControlFrame::Welcome {
                protocol_version: PROTOCOL_VERSION,
                rank: next_rank,
                world_size,
                config: config.clone(),
            };
            write_control(&mut stream, &welcome).await?;

            tracing::info!("worker {} joined as rank {}", addr, next_rank);
            peers.push(stream);
        }

        tracing::info!("process group formed: {} rank(s)", world_size);

        Ok(Self {
            rank: COORDINATOR_RANK,
            world_size,
            config,
            links: Links::Coordinator { peers },
        })
    }

    /// Joins the group as a worker, receiving the runtime-assigned rank and
    /// the run configuration from the coordinator.
    pub async fn worker(coordinator: SocketAddr) -> Result<Self> {
        let mut upstream = TcpStream::connect(coordinator)
            .await
            .with_context(|| format!("connecting to the coordinator at {}", coordinator))?;
        upstream.set_nodelay(true)?;

        let join = ControlFrame::Join {
            protocol_version: PROTOCOL_VERSION,
        };
        write_control(&mut upstream, &join).await?;

        match read_control(&mut upstream).await? {
            ControlFrame::Welcome {
                protocol_version,
                rank,
                world_size,
                config,
            } => {
                if protocol_version != PROTOCOL_VERSION {
                    anyhow::bail!(
                        "coordinator speaks protocol {} (expected {})",
                        protocol_version,
                        PROTOCOL_VERSION
                    );
                }
                config.validate()?;

                Ok(Self {
                    rank,
                    world_size,
                    config,
                    links: Links::Worker { upstream },
                })
            }
            other => anyhow::bail!("unexpected frame during join: {:?}", other),
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn world_size(&self) -> usize {
        self.world_size
    }

    pub fn is_coordinator(&self) -> bool {
        self.rank == COORDINATOR_RANK
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// One-to-all collective. The coordinator passes `Some(value)`, workers
    /// pass `None`; every rank returns its own copy of the value.
    ///
    /// On the wire this is size-then-payload: the u32 length prefix first,
    /// then the bincode bytes, written once per worker in ascending rank
    /// order.
    pub async fn broadcast<T>(&mut self, value: Option<&T>) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        match &mut self.links {
            Links::Coordinator { peers } => {
                let value = value
                    .ok_or_else(|| anyhow::anyhow!("broadcast payload missing on the coordinator"))?;
                let bytes = bincode::serialize(value).context("encoding broadcast payload")?;
                for peer in peers.iter_mut() {
                    write_payload(peer, &bytes).await?;
                }
                Ok(value.clone())
            }
            Links::Worker { upstream } => {
                if value.is_some() {
                    anyhow::bail!("only the coordinator provides a broadcast payload");
                }
                let bytes = read_payload(upstream).await?;
                bincode::deserialize(&bytes).context("decoding broadcast payload")
            }
        }
    }

    /// All-to-one collective. Every rank contributes its local list; the
    /// coordinator returns `Some(blocks)` with exactly `world_size` blocks in
    /// ascending rank order (its own contribution first), workers get `None`.
    ///
    /// Entry order within a block is the order the contributing rank built it.
    pub async fn gather<T>(&mut self, local: Vec<T>) -> Result<Option<Vec<Vec<T>>>>
    where
        T: Serialize + DeserializeOwned,
    {
        match &mut self.links {
            Links::Coordinator { peers } => {
                let mut blocks = Vec::with_capacity(peers.len() + 1);
                blocks.push(local);
                for peer in peers.iter_mut() {
                    let bytes = read_payload(peer).await?;
                    blocks.push(bincode::deserialize(&bytes).context("decoding gathered block")?);
                }
                Ok(Some(blocks))
            }
            Links::Worker { upstream } => {
                let bytes = bincode::serialize(&local).context("encoding gather contribution")?;
                write_payload(upstream, &bytes).await?;
                Ok(None)
            }
        }
    }
}

async fn write_control(stream: &mut TcpStream, frame: &ControlFrame) -> Result<()> {
    let bytes = bincode::serialize(frame).context("encoding control frame")?;
    write_payload(stream, &bytes).await
}

async fn read_control(stream: &mut TcpStream) -> Result<ControlFrame> {
    let bytes = read_payload(stream).await?;
    bincode::deserialize(&bytes).context("decoding control frame")
}

async fn write_payload(stream: &mut TcpStream, bytes: &[u8]) -> Result<()> {
    let len = u32::try_from(bytes.len()).context("frame exceeds the u32 length prefix")?;
    if len > MAX_FRAME_BYTES {
        anyhow::bail!("frame of {} bytes exceeds the {} byte limit", len, MAX_FRAME_BYTES);
    }
    stream.write_u32(len).await?;
    stream.write_all(bytes).await?;
    stream.flush().await?;
    Ok(())
}

async fn read_payload(stream: &mut TcpStream) -> Result<Vec<u8>> {
    let len = stream
        .read_u32()
        .await
        .context("peer closed the collective link")?;
    if len > MAX_FRAME_BYTES {
        anyhow::bail!("frame of {} bytes exceeds the {} byte limit", len, MAX_FRAME_BYTES);
    }
    let mut buf = vec![0u8; len as usize];
    stream.read_exact(&mut buf).await.context("reading frame payload")?;
    Ok(buf)
}
