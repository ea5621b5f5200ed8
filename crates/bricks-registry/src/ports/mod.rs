//! Ports Layer
//!
//! Traits implemented by base types and their concrete types.

pub mod object;

pub use object::{AbstractObject, DerivedObject, ObjectClone, SerializableObject};
