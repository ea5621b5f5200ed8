//! Domain Layer - Pure encoding logic
//!
//! This layer contains:
//! - Record layout (index + padded payload)
//! - Indirect serializer
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod codec;
pub mod config;
pub mod layout;


pub use codec::IndirectSerializer;
pub use config::{
    SerializerConfig, SerializerConfigBuilder, DEFAULT_FILL_BYTE, DEFAULT_MAX_BUFFER_BYTES,
};
pub use layout::RecordLayout;
