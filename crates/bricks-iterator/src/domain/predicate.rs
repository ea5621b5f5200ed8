//! Element predicates and their set algebra.
//!
//! Composing predicates never mutates the operands. The composed predicate
//! holds shared references to both, so the operands stay usable.

use std::fmt;
use std::sync::Arc;

/// A shareable boolean test of one element.
pub struct Predicate<T: ?Sized> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

impl<T: ?Sized> Predicate<T> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Accepts every element.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }
}

impl<T: ?Sized + 'static> Predicate<T> {
    /// Elements accepted by both `self` and `other`.
    pub fn and(&self, other: &Predicate<T>) -> Self {
        let (a, b) = (self.clone(), other.clone());
        Self::new(move |value| a.test(value) && b.test(value))
    }

    /// Elements accepted by either `self` or `other`.
    pub fn or(&self, other: &Predicate<T>) -> Self {
        let (a, b) = (self.clone(), other.clone());
        Self::new(move |value| a.test(value) || b.test(value))
    }

    /// Elements accepted by `self` and rejected by `other`.
    pub fn and_not(&self, other: &Predicate<T>) -> Self {
        let (a, b) = (self.clone(), other.clone());
        Self::new(move |value| a.test(value) && !b.test(value))
    }
}

/// Free-function form of the predicate algebra.
pub struct PredicateComposition;

impl PredicateComposition {
    pub fn and<T: ?Sized + 'static>(a: &Predicate<T>, b: &Predicate<T>) -> Predicate<T> {
        a.and(b)
    }

    pub fn or<T: ?Sized + 'static>(a: &Predicate<T>, b: &Predicate<T>) -> Predicate<T> {
        a.or(b)
    }

    pub fn and_not<T: ?Sized + 'static>(a: &Predicate<T>, b: &Predicate<T>) -> Predicate<T> {
        a.and_not(b)
    }
}
