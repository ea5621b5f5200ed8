//! # Communicator
//!
//! The rank-group abstraction the collectives run on.

use async_trait::async_trait;
use bricks_core::BricksResult;

/// A member of a fixed-size group of ranks.
#[async_trait]
pub trait Communicator: Send + Sync {
    /// This member's rank, in `0..size()`.
    fn rank(&self) -> usize;

    /// Number of ranks in the group.
    fn size(&self) -> usize;

    /// Replace `buffer` on every rank with the root's `buffer`.
    ///
    /// Collective: every rank must call it with the same `root`.
    async fn broadcast(&self, root: usize, buffer: &mut Vec<u8>) -> BricksResult<()>;
}
