//! # Bricks Comm - Rank Communication Seam
//!
//! Moves encoded object buffers between ranks of a process group.
//!
//! ## Collective Broadcast
//!
//! ```text
//!   rank 0 (root)                 rank 1..n
//!  ┌──────────────┐             ┌──────────────┐
//!  │ encode(h) ───┼──┐          │              │
//!  └──────────────┘  │          └──────────────┘
//!                    ▼                 ↑
//!              ┌─────────────┐         │
//!              │  broadcast  │ ────────┘ decode(bytes)
//!              └─────────────┘
//! ```
//!
//! Every rank must enter each collective in the same order with the same
//! root. Only bytes travel; each rank rebuilds objects from its own
//! identically registered family.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod collective;
pub mod communicator;
pub mod local;
pub mod serial;

pub use collective::{broadcast_objects, comm_equal};
pub use communicator::Communicator;
pub use local::{LocalComm, LocalCommGroup};
pub use serial::SerialComm;
