//! # Bricks Serializer
//!
//! Indirect serialization of slices of abstract handles into flat byte
//! buffers, for exchange between processes that registered the same family.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure encoding logic, no I/O
//!   - `RecordLayout`: fixed `4 + S` stride of every record
//!   - `IndirectSerializer`: encodes type index + payload per handle
//!   - `SerializerConfig`: fill byte and buffer limit, with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ObjectSerializer`: driving port used by the communication layer
//!
//! ## Wire Format
//!
//! A buffer of `n` records is exactly `n * (4 + S)` bytes, where `S` is the
//! family's maximum payload size. Each record is a little-endian type index
//! followed by the object's payload, padded with the fill byte. Index `0`
//! marks an unbound handle.
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `encode` consumes exactly `required_bytes(n)` bytes
//! - **INVARIANT-2**: `decode(encode(x))` restores types, values and gaps
//! - **INVARIANT-3**: a failed `decode` leaves the output slice unchanged
//!
//! ## Usage Example
//!
//! ```ignore
//! use bricks_serializer::{IndirectSerializer, ObjectSerializer};
//!
//! let serializer = IndirectSerializer::new(family.clone());
//! let bytes = serializer.encode_to_vec(&handles)?;
//! let restored = serializer.decode_to_vec(&bytes)?;
//! ```

pub mod domain;
pub mod ports;

pub use domain::{
    IndirectSerializer, RecordLayout, SerializerConfig, SerializerConfigBuilder,
    DEFAULT_FILL_BYTE, DEFAULT_MAX_BUFFER_BYTES,
};
pub use ports::ObjectSerializer;
