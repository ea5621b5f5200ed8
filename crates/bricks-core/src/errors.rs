//! # Error Types
//!
//! Defines the error type shared by every Bricks crate.

use crate::contract::Assertion;
use crate::entities::TypeIndex;
use thiserror::Error;

/// Errors that can occur anywhere in Bricks.
///
/// None of these are meant to be retried: they indicate a logic error in the
/// caller or a misuse of a registered family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BricksError {
    /// A precondition, postcondition or invariant check failed.
    #[error(transparent)]
    Contract(#[from] Assertion),

    /// Lookup of a key that was never registered.
    #[error("Type key not registered: {key}")]
    UnregisteredKey { key: String },

    /// Lookup of an index that was never registered.
    #[error("Type index not registered: {index}")]
    UnregisteredIndex { index: TypeIndex },

    /// A second registration under an existing key.
    #[error("Type key already registered: {key} (index {index})")]
    DuplicateKey { key: String, index: TypeIndex },

    /// A payload view is too small for the bytes being read or written.
    #[error("Payload overflow at offset {offset}: need {needed} bytes, {available} available")]
    PayloadOverflow {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// An encoded buffer would exceed the configured limit.
    #[error("Encoded buffer of {bytes} bytes exceeds limit of {limit} bytes")]
    BufferLimit { bytes: usize, limit: usize },

    /// A concrete type rejected its payload.
    #[error("Invalid payload for {key}: {reason}")]
    InvalidPayload { key: String, reason: String },

    /// The communication layer failed to move bytes between ranks.
    #[error("Communication error: {0}")]
    Comm(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BricksError {
    /// True if this error is a contract violation.
    pub fn is_contract(&self) -> bool {
        matches!(self, BricksError::Contract(_))
    }
}

/// Result alias used across the workspace.
pub type BricksResult<T> = Result<T, BricksError>;
