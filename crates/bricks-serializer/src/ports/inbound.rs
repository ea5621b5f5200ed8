//! Inbound Ports (Driving Ports)
//!
//! The API the communication layer uses to turn handle slices into bytes
//! and back.

use bricks_core::BricksResult;
use bricks_registry::AbstractHandle;

/// Encode and decode a slice of handles of base type `B`.
///
/// Implementations must be deterministic: two processes with identical
/// registrations produce identical bytes for equal inputs.
pub trait ObjectSerializer<B: ?Sized>: Send + Sync {
    /// Whether objects can be copied as raw memory without an index.
    fn supports_direct_serialization(&self) -> bool;

    /// Bytes needed to encode `count` handles.
    fn required_bytes(&self, count: usize) -> usize;

    /// Handles held in `bytes` of encoded data.
    fn record_count(&self, bytes: usize) -> usize;

    /// Encode `handles` into `out`, which must be exactly
    /// `required_bytes(handles.len())` long.
    fn encode(&self, handles: &[AbstractHandle<B>], out: &mut [u8]) -> BricksResult<()>;

    /// Decode `buffer` into `out`, one handle per record.
    fn decode(&self, buffer: &[u8], out: &mut [AbstractHandle<B>]) -> BricksResult<()>;

    /// Encode into a freshly allocated buffer.
    fn encode_to_vec(&self, handles: &[AbstractHandle<B>]) -> BricksResult<Vec<u8>> {
        let mut out = vec![0u8; self.required_bytes(handles.len())];
        self.encode(handles, &mut out)?;
        Ok(out)
    }

    /// Decode every record of `buffer` into new handles.
    fn decode_to_vec(&self, buffer: &[u8]) -> BricksResult<Vec<AbstractHandle<B>>> {
        let mut out: Vec<AbstractHandle<B>> = std::iter::repeat_with(AbstractHandle::empty)
            .take(self.record_count(buffer.len()))
            .collect();
        self.decode(buffer, &mut out)?;
        Ok(out)
    }
}
