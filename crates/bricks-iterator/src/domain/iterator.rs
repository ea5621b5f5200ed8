//! Filtered iterator over a borrowed source.
//!
//! INVARIANTS:
//! - The iterator is either at the end or positioned on an element that
//!   satisfies its predicate
//! - Two iterators are equal when they walk the same source and sit at the
//!   same position; predicates are not compared

use bricks_core::{bricks_require, throw_assertion, BricksResult};
use std::fmt;

use super::predicate::Predicate;
use super::source::IterSource;

/// Position within `source`, restricted to elements accepted by a predicate.
///
/// Copies are structural: the clone shares the source and the predicate and
/// advances independently.
pub struct AbstractIterator<'a, T: 'a, S: ?Sized + IterSource<T> = dyn IterSource<T> + 'a> {
    source: &'a S,
    position: usize,
    predicate: Predicate<T>,
}

impl<'a, T: 'a, S: ?Sized + IterSource<T>> AbstractIterator<'a, T, S> {
    /// Iterate every element of `source`.
    pub fn new(source: &'a S) -> Self {
        Self::with_predicate(source, Predicate::always())
    }

    /// Iterate the elements of `source` accepted by `predicate`, starting at
    /// the first one.
    pub fn with_predicate(source: &'a S, predicate: Predicate<T>) -> Self {
        let mut iter = Self {
            source,
            position: 0,
            predicate,
        };
        iter.seek_valid();
        iter
    }

    fn seek_valid(&mut self) {
        while let Some(value) = self.source.element(self.position) {
            if self.predicate.test(value) {
                return;
            }
            self.position += 1;
        }
        self.position = self.source.source_len();
    }

    /// Move to the next accepted element, or to the end.
    pub fn advance(&mut self) -> BricksResult<&mut Self> {
        bricks_require!(!self.is_end());
        self.position += 1;
        self.seek_valid();
        Ok(self)
    }

    /// Advance and return the iterator as it was before.
    pub fn post_advance(&mut self) -> BricksResult<Self> {
        let previous = self.clone();
        self.advance()?;
        Ok(previous)
    }

    /// The current element; a contract failure at the end.
    pub fn get(&self) -> BricksResult<&'a T> {
        self.current()
            .ok_or_else(|| throw_assertion("!self.is_end()", file!(), line!()))
    }

    /// The current element, `None` at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.source.element(self.position)
    }

    pub fn is_end(&self) -> bool {
        self.position >= self.source.source_len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn predicate(&self) -> &Predicate<T> {
        &self.predicate
    }

    /// Number of source elements accepted by the predicate.
    ///
    /// Counted on every call, so it follows the source as it changes between
    /// iterations.
    pub fn size(&self) -> usize {
        (0..self.source.source_len())
            .filter_map(|i| self.source.element(i))
            .filter(|value| self.predicate.test(value))
            .count()
    }

    /// A fresh iterator at the first accepted element.
    pub fn begin(&self) -> Self {
        Self::with_predicate(self.source, self.predicate.clone())
    }

    /// A fresh iterator one past the last element.
    pub fn end(&self) -> Self {
        Self {
            source: self.source,
            position: self.source.source_len(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<'a, T: 'a, S: ?Sized + IterSource<T>> Clone for AbstractIterator<'a, T, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            position: self.position,
            predicate: self.predicate.clone(),
        }
    }
}

impl<'a, T: 'a, S: ?Sized + IterSource<T>> PartialEq for AbstractIterator<'a, T, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.source, other.source) && self.position == other.position
    }
}

impl<'a, T: 'a, S: ?Sized + IterSource<T>> Eq for AbstractIterator<'a, T, S> {}

impl<'a, T: 'a, S: ?Sized + IterSource<T>> fmt::Debug for AbstractIterator<'a, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractIterator")
            .field("position", &self.position)
            .field("len", &self.source.source_len())
            .finish()
    }
}

impl<'a, T: 'a, S: ?Sized + IterSource<T>> Iterator for AbstractIterator<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.current()?;
        self.position += 1;
        self.seek_valid();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.source.source_len().saturating_sub(self.position);
        (0, Some(left))
    }
}

impl<'a, T: 'a, S: ?Sized + IterSource<T>> std::iter::FusedIterator for AbstractIterator<'a, T, S> {}
