//! # Object Contracts
//!
//! A base type is a trait (used as `dyn Base`) with [`SerializableObject`]
//! as supertrait and a `clone_box` method. [`ObjectClone`] is implemented
//! once for `dyn Base` by forwarding to `clone_box`. Concrete types
//! implement the base trait and [`DerivedObject`] to be registered with the
//! base type's family.
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! pub trait Shape: SerializableObject + Send + Sync {
//!     fn area(&self) -> f64;
//!
//!     fn clone_box(&self) -> Box<dyn Shape>;
//! }
//!
//! impl ObjectClone<dyn Shape> for dyn Shape {
//!     fn clone_object(&self) -> Box<dyn Shape> {
//!         self.clone_box()
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! pub struct Circle { radius: f64 }
//!
//! impl Shape for Circle {
//!     fn area(&self) -> f64 { std::f64::consts::PI * self.radius * self.radius }
//!     fn clone_box(&self) -> Box<dyn Shape> { Box::new(self.clone()) }
//! }
//!
//! impl AbstractObject for Circle {
//!     fn object_type(&self) -> &str { "circle" }
//! }
//!
//! impl DerivedObject for Circle {
//!     type Base = dyn Shape;
//!     fn byte_size() -> usize { 8 }
//!     fn create() -> Box<dyn Shape> { Box::new(Circle::default()) }
//! }
//! ```

use bricks_core::BricksResult;

/// An object that can name its concrete type.
///
/// The key is a pure function of the runtime type, never of instance state.
pub trait AbstractObject {
    fn object_type(&self) -> &str;
}

/// An object with a fixed-size payload encoding.
///
/// `serialize` receives a view at least as long as the type's registered
/// byte size; bytes past the natural size must be left untouched.
/// `deserialize` receives a view of the same length.
///
/// The serializer calls both without holding any lock of the family, so
/// implementations may query or register with it.
pub trait SerializableObject: AbstractObject {
    fn serialize(&self, buffer: &mut [u8]) -> BricksResult<()>;

    fn deserialize(&mut self, buffer: &[u8]) -> BricksResult<()>;
}

/// Deep copy of a concrete object through its base type `B`.
///
/// Implemented for `dyn B` itself; a supertrait bound `ObjectClone<dyn B>`
/// on the base trait would be cyclic.
pub trait ObjectClone<B: ?Sized> {
    fn clone_object(&self) -> Box<B>;
}

/// Registration data of one concrete type of the family `Self::Base`.
pub trait DerivedObject {
    /// The base type this object is registered under.
    type Base: ?Sized + AbstractObject;

    /// Natural payload size in bytes.
    fn byte_size() -> usize;

    /// Construct a default instance boxed as the base type.
    fn create() -> Box<Self::Base>;
}
