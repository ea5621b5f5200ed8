//! Domain Layer - filtered iteration
//!
//! This layer contains:
//! - Iteration sources (random-access sequences)
//! - Predicates and their composition
//! - The filtered iterator
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod iterator;
pub mod predicate;
pub mod source;

pub use iterator::AbstractIterator;
pub use predicate::{Predicate, PredicateComposition};
pub use source::IterSource;
