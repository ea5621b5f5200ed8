//! Owning handle to an optional polymorphic object.

use bricks_core::{throw_assertion, BricksResult};
use std::fmt;

use crate::ports::{AbstractObject, ObjectClone};

/// Holds zero or one object of base type `B`.
///
/// Cloning a bound handle deep-copies the implementation through
/// [`ObjectClone`]; the clone never aliases the original.
pub struct AbstractHandle<B: ?Sized> {
    implementation: Option<Box<B>>,
}

impl<B: ?Sized> AbstractHandle<B> {
    /// A handle with no implementation.
    pub fn empty() -> Self {
        Self {
            implementation: None,
        }
    }

    pub fn bound(implementation: Box<B>) -> Self {
        Self {
            implementation: Some(implementation),
        }
    }

    pub fn has_implementation(&self) -> bool {
        self.implementation.is_some()
    }

    pub fn get(&self) -> Option<&B> {
        self.implementation.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut B> {
        self.implementation.as_deref_mut()
    }

    /// The bound implementation, or a contract failure on an empty handle.
    pub fn implementation(&self) -> BricksResult<&B> {
        self.implementation
            .as_deref()
            .ok_or_else(|| throw_assertion("handle.has_implementation()", file!(), line!()))
    }

    /// Replace the implementation, returning the previous one.
    pub fn bind(&mut self, implementation: Box<B>) -> Option<Box<B>> {
        self.implementation.replace(implementation)
    }

    /// Detach the implementation, leaving the handle empty.
    pub fn take(&mut self) -> Option<Box<B>> {
        self.implementation.take()
    }

    pub fn into_inner(self) -> Option<Box<B>> {
        self.implementation
    }
}

impl<B: ?Sized> Default for AbstractHandle<B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: ?Sized> From<Box<B>> for AbstractHandle<B> {
    fn from(implementation: Box<B>) -> Self {
        Self::bound(implementation)
    }
}

impl<B: ?Sized + ObjectClone<B>> Clone for AbstractHandle<B> {
    fn clone(&self) -> Self {
        Self {
            implementation: self.implementation.as_ref().map(|imp| (**imp).clone_object()),
        }
    }
}

impl<B: ?Sized + AbstractObject> AbstractHandle<B> {
    /// Type key of the bound implementation, if any.
    pub fn object_type(&self) -> Option<&str> {
        self.get().map(AbstractObject::object_type)
    }
}

impl<B: ?Sized + AbstractObject> fmt::Debug for AbstractHandle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object_type() {
            Some(key) => write!(f, "AbstractHandle({key})"),
            None => f.write_str("AbstractHandle(<empty>)"),
        }
    }
}
