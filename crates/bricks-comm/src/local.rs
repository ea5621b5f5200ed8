//! # In-Process Group
//!
//! Ranks of one process, each driven by its own task. Every rank owns an
//! unbounded `tokio::sync::mpsc` queue, and a root pushes its frame onto
//! every queue, its own included.
//!
//! Roots enqueue under one shared lock, so all queues hold frames in the
//! same order and a root may run any number of collectives ahead of a slow
//! rank. Each frame carries the root and the collective's sequence number;
//! a rank that reads a frame from a different collective reports a
//! mismatch instead of adopting foreign bytes.

use async_trait::async_trait;
use bricks_core::{bricks_require, BricksError, BricksResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace, warn};

use crate::communicator::Communicator;

/// One broadcast payload on the wire.
#[derive(Debug, Clone)]
struct Frame {
    root: usize,
    sequence: u64,
    payload: Arc<Vec<u8>>,
}

/// Queues of every rank, indexed by rank.
type Queues = Arc<Mutex<Vec<UnboundedSender<Frame>>>>;

/// Builder of a fixed set of in-process ranks.
pub struct LocalCommGroup {
    members: Vec<LocalComm>,
}

impl LocalCommGroup {
    /// Create a group of `size` ranks.
    pub fn new(size: usize) -> BricksResult<Self> {
        if size == 0 {
            return Err(BricksError::InvalidConfig(
                "communicator group needs at least one rank".to_string(),
            ));
        }

        let (senders, receivers): (Vec<_>, Vec<_>) =
            (0..size).map(|_| mpsc::unbounded_channel()).unzip();
        let queues: Queues = Arc::new(Mutex::new(senders));

        let members = receivers
            .into_iter()
            .enumerate()
            .map(|(rank, receiver)| LocalComm {
                rank,
                size,
                queues: Arc::clone(&queues),
                receiver: tokio::sync::Mutex::new(receiver),
                sequence: AtomicU64::new(0),
            })
            .collect();

        debug!(size, "Local communicator group created");
        Ok(Self { members })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Hand out the ranks, ordered by rank.
    #[must_use]
    pub fn into_communicators(self) -> Vec<LocalComm> {
        self.members
    }
}

/// One rank of a [`LocalCommGroup`].
pub struct LocalComm {
    rank: usize,
    size: usize,
    queues: Queues,
    receiver: tokio::sync::Mutex<UnboundedReceiver<Frame>>,
    /// Collectives entered so far.
    sequence: AtomicU64,
}

impl LocalComm {
    /// Push `frame` onto every rank's queue.
    fn publish(&self, frame: Frame) {
        let queues = self.queues.lock();
        let mut delivered = 0usize;
        for (rank, queue) in queues.iter().enumerate() {
            if queue.send(frame.clone()).is_ok() {
                delivered += 1;
            } else {
                // A rank that already left the group
                trace!(rank, sequence = frame.sequence, "Frame not delivered");
            }
        }
        trace!(
            root = frame.root,
            sequence = frame.sequence,
            bytes = frame.payload.len(),
            delivered,
            "Frame sent"
        );
    }
}

impl std::fmt::Debug for LocalComm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalComm")
            .field("rank", &self.rank)
            .field("size", &self.size)
            .finish()
    }
}

#[async_trait]
impl Communicator for LocalComm {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    async fn broadcast(&self, root: usize, buffer: &mut Vec<u8>) -> BricksResult<()> {
        bricks_require!(root < self.size);

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let mut receiver = self.receiver.lock().await;

        if self.rank == root {
            self.publish(Frame {
                root,
                sequence,
                payload: Arc::new(buffer.clone()),
            });
        }

        let frame = receiver
            .recv()
            .await
            .ok_or_else(|| BricksError::Comm("communicator group closed".to_string()))?;

        if frame.root != root || frame.sequence != sequence {
            warn!(
                rank = self.rank,
                expected_root = root,
                expected_sequence = sequence,
                frame_root = frame.root,
                frame_sequence = frame.sequence,
                "Collective mismatch"
            );
            return Err(BricksError::Comm(format!(
                "rank {} expected broadcast #{sequence} from root {root}, got #{} from root {}",
                self.rank, frame.sequence, frame.root
            )));
        }

        if self.rank != root {
            buffer.clear();
            buffer.extend_from_slice(&frame.payload);
        }
        Ok(())
    }
}
