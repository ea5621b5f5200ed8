//! # Bricks Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Particle family shared by every flow
//! └── integration/
//!     ├── serializer_flows.rs   # registry + serializer
//!     ├── broadcast_flows.rs    # serializer + communicators
//!     └── iterator_flows.rs     # filtered iteration over decoded objects
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bricks-tests
//! cargo test -p bricks-tests integration::broadcast_flows
//! ```

pub mod integration;
