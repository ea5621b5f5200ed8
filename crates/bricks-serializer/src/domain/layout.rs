//! Wire layout of one record.
//!
//! ```text
//! +----------------------+---------------------------------+
//! | type index (4 B, LE) | payload (S B, fill-byte padded) |
//! +----------------------+---------------------------------+
//! ```
//!
//! `S` is the family's maximum payload size at the time of the call, so
//! every record of a buffer has the same stride.

use bricks_core::{BricksResult, PayloadReader, PayloadWriter, TypeIndex, TYPE_INDEX_BYTES};

/// Fixed stride of every record for a payload size `max_byte_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    max_byte_size: usize,
}

impl RecordLayout {
    pub fn new(max_byte_size: usize) -> Self {
        Self { max_byte_size }
    }

    /// Payload bytes per record.
    pub fn payload_bytes(&self) -> usize {
        self.max_byte_size
    }

    /// Total bytes per record.
    pub fn stride(&self) -> usize {
        TYPE_INDEX_BYTES + self.max_byte_size
    }

    /// Bytes needed to hold `count` records.
    pub fn required_bytes(&self, count: usize) -> usize {
        count * self.stride()
    }

    /// Whole records held in `bytes`, truncating any trailing remainder.
    pub fn record_count(&self, bytes: usize) -> usize {
        bytes / self.stride()
    }

    /// Byte range of record `i` within a buffer.
    pub fn record_range(&self, i: usize) -> std::ops::Range<usize> {
        let start = i * self.stride();
        start..start + self.stride()
    }
}

/// Write a type index into the first bytes of `record`.
pub fn write_index(record: &mut [u8], index: TypeIndex) -> BricksResult<()> {
    PayloadWriter::new(record).write_u32(index)
}

/// Read the type index from the first bytes of `record`.
pub fn read_index(record: &[u8]) -> BricksResult<TypeIndex> {
    PayloadReader::new(record).read_u32()
}
