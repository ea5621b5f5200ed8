//! Serializer configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use bricks_serializer::domain::SerializerConfigBuilder;
//!
//! let config = SerializerConfigBuilder::new()
//!     .fill_byte(0)
//!     .max_buffer_bytes(1 << 20)
//!     .build()
//!     .expect("Valid config");
//! ```

use bricks_core::{BricksError, BricksResult, TYPE_INDEX_BYTES};
use serde::{Deserialize, Serialize};

/// ASCII `'0'`, written into every byte of a record before it is filled.
pub const DEFAULT_FILL_BYTE: u8 = b'0';

/// 64 MiB.
pub const DEFAULT_MAX_BUFFER_BYTES: usize = 64 * 1024 * 1024;

/// Indirect serializer configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Byte written into unused record bytes
    pub fill_byte: u8,
    /// Largest buffer the serializer will encode into or decode from
    pub max_buffer_bytes: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            fill_byte: DEFAULT_FILL_BYTE,
            max_buffer_bytes: DEFAULT_MAX_BUFFER_BYTES,
        }
    }
}

impl SerializerConfig {
    /// Create a new configuration with validation
    pub fn new(fill_byte: u8, max_buffer_bytes: usize) -> BricksResult<Self> {
        let config = Self {
            fill_byte,
            max_buffer_bytes,
        };
        config.validate()?;
        Ok(config)
    }

    /// A limit below one type index could not hold a single record.
    pub fn validate(&self) -> BricksResult<()> {
        if self.max_buffer_bytes < TYPE_INDEX_BYTES {
            return Err(BricksError::InvalidConfig(format!(
                "max_buffer_bytes must be at least {TYPE_INDEX_BYTES}, got {}",
                self.max_buffer_bytes
            )));
        }
        Ok(())
    }

    /// Builder-style method to set the fill byte
    pub fn with_fill_byte(mut self, fill_byte: u8) -> Self {
        self.fill_byte = fill_byte;
        self
    }

    /// Builder-style method to set the buffer limit
    pub fn with_max_buffer_bytes(mut self, bytes: usize) -> Self {
        self.max_buffer_bytes = bytes;
        self
    }
}

/// Builder for SerializerConfig with validation
#[derive(Default)]
pub struct SerializerConfigBuilder {
    fill_byte: Option<u8>,
    max_buffer_bytes: Option<usize>,
}

impl SerializerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_byte(mut self, fill_byte: u8) -> Self {
        self.fill_byte = Some(fill_byte);
        self
    }

    pub fn max_buffer_bytes(mut self, bytes: usize) -> Self {
        self.max_buffer_bytes = Some(bytes);
        self
    }

    /// Build the SerializerConfig, validating all parameters
    pub fn build(self) -> BricksResult<SerializerConfig> {
        let defaults = SerializerConfig::default();

        let config = SerializerConfig {
            fill_byte: self.fill_byte.unwrap_or(defaults.fill_byte),
            max_buffer_bytes: self.max_buffer_bytes.unwrap_or(defaults.max_buffer_bytes),
        };

        config.validate()?;
        Ok(config)
    }
}
