//! Sequences an iterator can walk.

use std::collections::VecDeque;

/// Random-access sequence of `T`.
pub trait IterSource<T> {
    fn source_len(&self) -> usize;

    /// Element at `position`, `None` past the end.
    fn element(&self, position: usize) -> Option<&T>;
}

impl<T> IterSource<T> for [T] {
    fn source_len(&self) -> usize {
        self.len()
    }

    fn element(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

impl<T, const N: usize> IterSource<T> for [T; N] {
    fn source_len(&self) -> usize {
        N
    }

    fn element(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

impl<T> IterSource<T> for Vec<T> {
    fn source_len(&self) -> usize {
        self.len()
    }

    fn element(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}

impl<T> IterSource<T> for VecDeque<T> {
    fn source_len(&self) -> usize {
        self.len()
    }

    fn element(&self, position: usize) -> Option<&T> {
        self.get(position)
    }
}
