//! Domain Layer - registry bookkeeping
//!
//! This layer contains:
//! - Type registry (key, index and factory tables)
//! - Size authority (maximum payload size)
//! - Object families (per-base-type registry objects)
//! - Owning handles
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod family;
pub mod handle;
pub mod registration;
pub mod size_authority;
pub mod type_registry;

#[cfg(test)]
pub(crate) mod fixtures;

pub use family::ObjectFamily;
pub use handle::AbstractHandle;
pub use registration::Registrants;
pub use size_authority::SizeAuthority;
pub use type_registry::{Factory, TypeRegistry};
