//! # Bricks Iterator
//!
//! Iteration over a borrowed sequence restricted to the elements that
//! satisfy a predicate.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `IterSource`: random-access sequence (`Vec`, slices, arrays,
//!     `VecDeque`, or any user type)
//!   - `Predicate`: shareable element test with `and`, `or` and `and_not`
//!   - `AbstractIterator`: source reference, position and predicate
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: an iterator is at the end or on an accepted element
//! - **INVARIANT-2**: equality compares source identity and position only
//! - **INVARIANT-3**: composing predicates never changes the operands
//!
//! ## Usage Example
//!
//! ```
//! use bricks_iterator::{AbstractIterator, Predicate};
//!
//! let data: Vec<i32> = (0..10).collect();
//! let even = Predicate::new(|n: &i32| n % 2 == 0);
//! let two = Predicate::new(|n: &i32| n % 10 == 2);
//!
//! let it = AbstractIterator::with_predicate(&data, even.and_not(&two));
//! assert_eq!(it.size(), 4);
//! assert_eq!(it.copied().collect::<Vec<_>>(), vec![0, 4, 6, 8]);
//! ```

pub mod domain;

pub use domain::{AbstractIterator, IterSource, Predicate, PredicateComposition};
