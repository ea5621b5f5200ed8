//! # Bricks Registry
//!
//! Polymorphic construction for abstract object families.
//!
//! ## Architecture
//!
//! - **Ports Layer** (`ports/`): the traits a base type and its concrete
//!   types implement
//!   - `AbstractObject`: every object names its own type key
//!   - `SerializableObject`: fixed-size payload encoding
//!   - `ObjectClone`: deep copy through the base type
//!   - `DerivedObject`: registration data of one concrete type
//!
//! - **Domain Layer** (`domain/`): pure bookkeeping, no I/O
//!   - `TypeRegistry`: key → index → factory
//!   - `SizeAuthority`: running maximum of payload sizes
//!   - `ObjectFamily`: one registry and size authority per base type
//!   - `AbstractHandle`: nullable owning handle to a concrete object
//!
//! ## Invariants
//!
//! - Indices are assigned in registration order starting at
//!   [`FIRST_TYPE_INDEX`](bricks_core::FIRST_TYPE_INDEX); index 0 is
//!   reserved for empty handles.
//! - The maximum payload size never decreases.
//! - Every communicating process must register the same types in the same
//!   order before exchanging encoded objects.
//!
//! ## Usage Example
//!
//! ```ignore
//! use bricks_registry::{ObjectFamily, AbstractHandle};
//!
//! let family = ObjectFamily::<dyn Shape>::shared("Shape");
//! family.register_all::<(Circle, Square)>()?;
//!
//! let circle: AbstractHandle<dyn Shape> = family.create_handle("circle")?;
//! assert_eq!(family.max_byte_size(), 16);
//! ```

pub mod domain;
pub mod ports;

pub use domain::{
    AbstractHandle, Factory, ObjectFamily, Registrants, SizeAuthority, TypeRegistry,
};
pub use ports::{AbstractObject, DerivedObject, ObjectClone, SerializableObject};
