//! # Core Identifiers
//!
//! Identifiers shared by the registry, the serializer and the communication
//! layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integral identifier assigned to a concrete type at registration.
///
/// Written on the wire as a 4-byte little-endian integer.
pub type TypeIndex = u32;

/// Index reserved for an empty (unbound) handle.
///
/// Registered types are numbered from [`FIRST_TYPE_INDEX`] upwards, so a
/// record carrying this index always decodes to an empty handle.
pub const EMPTY_TYPE_INDEX: TypeIndex = 0;

/// Index given to the first registered type of a family.
pub const FIRST_TYPE_INDEX: TypeIndex = 1;

/// Width of the type index field of a wire record.
pub const TYPE_INDEX_BYTES: usize = std::mem::size_of::<TypeIndex>();

/// Stable, process-lifetime name of a concrete type within its family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeKey(String);

impl TypeKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the key is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for TypeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for TypeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for TypeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
