//! # Bricks Core
//!
//! Shared identifiers, errors and contract checks for the Bricks workspace.
//!
//! ## Design Principles
//!
//! - **Single error type**: every fallible operation in the workspace returns
//!   [`BricksError`]; contract violations carry the failed condition and its
//!   source location.
//! - **Tunable strictness**: precondition, postcondition and invariant checks
//!   are compiled in only when the `dbc` feature is enabled.
//! - **Byte-exact payloads**: [`PayloadWriter`] and [`PayloadReader`] give
//!   concrete object types bounds-checked access to their payload views.

pub mod contract;
pub mod cursor;
pub mod entities;
pub mod errors;

pub use contract::{throw_assertion, Assertion, DBC_ENABLED};
pub use cursor::{PayloadReader, PayloadWriter};
pub use entities::*;
pub use errors::*;
