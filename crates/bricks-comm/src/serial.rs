//! Single-rank communicator.

use async_trait::async_trait;
use bricks_core::{bricks_require, BricksResult};

use crate::communicator::Communicator;

/// Group of one. Collectives leave buffers untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerialComm;

impl SerialComm {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Communicator for SerialComm {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }

    async fn broadcast(&self, root: usize, _buffer: &mut Vec<u8>) -> BricksResult<()> {
        bricks_require!(root == 0);
        Ok(())
    }
}
