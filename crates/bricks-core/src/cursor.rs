//! Bounds-checked cursors over payload views.
//!
//! Concrete object types use these inside their `serialize`/`deserialize`
//! implementations. Every primitive is little-endian; a write or read past
//! the end of the view fails with [`BricksError::PayloadOverflow`] instead of
//! truncating.

use crate::errors::BricksError;

macro_rules! impl_write_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self, value: $type) -> Result<(), BricksError> {
            self.write_bytes(&value.to_le_bytes())
        }
    };
}

macro_rules! impl_read_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self) -> Result<$type, BricksError> {
            let mut bytes = [0u8; std::mem::size_of::<$type>()];
            bytes.copy_from_slice(self.read_bytes(std::mem::size_of::<$type>())?);
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Write cursor over a mutable payload view.
pub struct PayloadWriter<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> PayloadWriter<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_write_le!(write_u8, u8);
    impl_write_le!(write_u16, u16);
    impl_write_le!(write_u32, u32);
    impl_write_le!(write_u64, u64);
    impl_write_le!(write_i32, i32);
    impl_write_le!(write_i64, i64);
    impl_write_le!(write_f32, f32);
    impl_write_le!(write_f64, f64);

    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), BricksError> {
        let end = self.offset + data.len();
        if end > self.buffer.len() {
            return Err(BricksError::PayloadOverflow {
                offset: self.offset,
                needed: data.len(),
                available: self.remaining(),
            });
        }
        self.buffer[self.offset..end].copy_from_slice(data);
        self.offset = end;
        Ok(())
    }

    /// Bytes written so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }
}

/// Read cursor over a payload view.
pub struct PayloadReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_read_le!(read_u8, u8);
    impl_read_le!(read_u16, u16);
    impl_read_le!(read_u32, u32);
    impl_read_le!(read_u64, u64);
    impl_read_le!(read_i32, i32);
    impl_read_le!(read_i64, i64);
    impl_read_le!(read_f32, f32);
    impl_read_le!(read_f64, f64);

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], BricksError> {
        let end = self.offset + len;
        if end > self.buffer.len() {
            return Err(BricksError::PayloadOverflow {
                offset: self.offset,
                needed: len,
                available: self.remaining(),
            });
        }
        let bytes = &self.buffer[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }
}
