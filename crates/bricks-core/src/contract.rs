//! # Design-by-Contract
//!
//! Precondition, postcondition and invariant checks.
//!
//! | Macro | Checked when |
//! |-------|--------------|
//! | [`bricks_require!`](crate::bricks_require) | `dbc` feature enabled (precondition) |
//! | [`bricks_ensure!`](crate::bricks_ensure) | `dbc` feature enabled (postcondition) |
//! | [`bricks_check!`](crate::bricks_check) | `dbc` feature enabled (invariant) |
//! | [`bricks_insist!`](crate::bricks_insist) | always |
//!
//! A failed check returns `Err(BricksError::Contract(..))` from the enclosing
//! function. When the `dbc` feature is disabled the conditions of the first
//! three macros are type-checked but never evaluated.
//!
//! ```rust,ignore
//! fn stride(count: usize, bytes: usize) -> BricksResult<usize> {
//!     bricks_require!(count > 0);
//!     Ok(bytes / count)
//! }
//! ```

use crate::errors::BricksError;
use thiserror::Error;

/// True when contract checks are compiled in.
pub const DBC_ENABLED: bool = cfg!(feature = "dbc");

/// A failed contract check: the condition text and where it was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Bricks Assertion: {condition}, failed in {file}, line {line}.")]
pub struct Assertion {
    condition: String,
    file: String,
    line: u32,
}

impl Assertion {
    /// Build an assertion from a condition and its source location.
    pub fn new(condition: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            condition: condition.into(),
            file: file.into(),
            line,
        }
    }

    /// The condition that failed.
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// File in which the check was written.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line at which the check was written.
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Build the error for a failed check and log it.
pub fn throw_assertion(condition: &str, file: &str, line: u32) -> BricksError {
    tracing::warn!(condition, file, line, "contract violation");
    BricksError::Contract(Assertion::new(condition, file, line))
}

/// Precondition check.
#[macro_export]
macro_rules! bricks_require {
    ($cond:expr) => {
        if $crate::contract::DBC_ENABLED && !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::contract::throw_assertion(stringify!($cond), file!(), line!()),
            ));
        }
    };
}

/// Postcondition check.
#[macro_export]
macro_rules! bricks_ensure {
    ($cond:expr) => {
        if $crate::contract::DBC_ENABLED && !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::contract::throw_assertion(stringify!($cond), file!(), line!()),
            ));
        }
    };
}

/// Invariant check.
#[macro_export]
macro_rules! bricks_check {
    ($cond:expr) => {
        if $crate::contract::DBC_ENABLED && !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::contract::throw_assertion(stringify!($cond), file!(), line!()),
            ));
        }
    };
}

/// Check that is active in every build.
#[macro_export]
macro_rules! bricks_insist {
    ($cond:expr) => {
        if !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::contract::throw_assertion(stringify!($cond), file!(), line!()),
            ));
        }
    };
}
