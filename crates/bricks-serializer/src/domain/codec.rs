//! Indirect serializer
//!
//! Encodes each handle as its registered type index followed by the
//! object's own payload, so a receiver can rebuild the concrete type from
//! the index alone.
//!
//! INVARIANTS:
//! - Every record is exactly `4 + S` bytes, `S` read once per call
//! - Unused bytes of a record hold the configured fill byte
//! - An unbound handle encodes as `EMPTY_TYPE_INDEX` and decodes unbound

use bricks_core::{
    bricks_ensure, bricks_require, BricksError, BricksResult, EMPTY_TYPE_INDEX, TYPE_INDEX_BYTES,
};
use bricks_registry::{AbstractHandle, Factory, ObjectFamily, SerializableObject};
use std::sync::Arc;
use tracing::trace;

use super::config::SerializerConfig;
use super::layout::{read_index, write_index, RecordLayout};
use crate::ports::ObjectSerializer;

/// Serializer for slices of handles of the family `B`.
pub struct IndirectSerializer<B: ?Sized> {
    family: Arc<ObjectFamily<B>>,
    config: SerializerConfig,
}

impl<B: ?Sized> Clone for IndirectSerializer<B> {
    fn clone(&self) -> Self {
        Self {
            family: Arc::clone(&self.family),
            config: self.config.clone(),
        }
    }
}

impl<B: ?Sized + SerializableObject> IndirectSerializer<B> {
    /// Objects are always written through their type index.
    pub const SUPPORTS_DIRECT_SERIALIZATION: bool = false;

    pub fn new(family: Arc<ObjectFamily<B>>) -> Self {
        Self {
            family,
            config: SerializerConfig::default(),
        }
    }

    pub fn with_config(family: Arc<ObjectFamily<B>>, config: SerializerConfig) -> BricksResult<Self> {
        config.validate()?;
        Ok(Self { family, config })
    }

    pub fn family(&self) -> &Arc<ObjectFamily<B>> {
        &self.family
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Current payload size `S` of the family.
    pub fn max_byte_size(&self) -> usize {
        self.family.max_byte_size()
    }

    /// Record layout for the current `S`.
    pub fn layout(&self) -> RecordLayout {
        RecordLayout::new(self.max_byte_size())
    }

    fn check_limit(&self, bytes: usize) -> BricksResult<()> {
        if bytes > self.config.max_buffer_bytes {
            return Err(BricksError::BufferLimit {
                bytes,
                limit: self.config.max_buffer_bytes,
            });
        }
        Ok(())
    }

    fn encode_records(&self, handles: &[AbstractHandle<B>], out: &mut [u8]) -> BricksResult<()> {
        let layout = self.layout();
        self.check_limit(out.len())?;
        bricks_require!(out.len() == layout.required_bytes(handles.len()));

        // Indices are resolved before any object code runs, with the registry
        // lock released afterwards
        let indices = {
            let registry = self.family.builder();
            handles
                .iter()
                .map(|handle| match handle.get() {
                    None => Ok(EMPTY_TYPE_INDEX),
                    Some(object) => registry.index_of_instance(object),
                })
                .collect::<BricksResult<Vec<_>>>()?
        };

        // `out` is only written once every record encoded
        let mut scratch = vec![self.config.fill_byte; out.len()];
        let mut consumed = 0usize;
        let mut bound = 0usize;

        for (i, (handle, &index)) in handles.iter().zip(&indices).enumerate() {
            let record = &mut scratch[layout.record_range(i)];
            write_index(record, index)?;
            if let Some(object) = handle.get() {
                object.serialize(&mut record[TYPE_INDEX_BYTES..])?;
                bound += 1;
            }
            consumed += layout.stride();
        }

        bricks_ensure!(consumed == scratch.len());
        out.copy_from_slice(&scratch);

        trace!(
            family = self.family.name(),
            records = handles.len(),
            bound,
            stride = layout.stride(),
            "encoded records"
        );
        Ok(())
    }

    fn decode_records(&self, buffer: &[u8], out: &mut [AbstractHandle<B>]) -> BricksResult<()> {
        let layout = self.layout();
        self.check_limit(buffer.len())?;
        bricks_require!(layout.record_count(buffer.len()) == out.len());
        bricks_require!(buffer.len() == layout.required_bytes(out.len()));

        let factories = {
            let registry = self.family.builder();
            (0..out.len())
                .map(|i| match read_index(&buffer[layout.record_range(i)])? {
                    EMPTY_TYPE_INDEX => Ok(None),
                    index => registry.factory(index).map(Some),
                })
                .collect::<BricksResult<Vec<Option<Factory<B>>>>>()?
        };

        let mut decoded = Vec::with_capacity(out.len());
        let mut consumed = 0usize;

        for (i, factory) in factories.iter().enumerate() {
            let handle = match factory {
                None => AbstractHandle::empty(),
                Some(factory) => {
                    let mut object = factory();
                    object.deserialize(&buffer[layout.record_range(i)][TYPE_INDEX_BYTES..])?;
                    AbstractHandle::bound(object)
                }
            };
            decoded.push(handle);
            consumed += layout.stride();
        }

        bricks_ensure!(consumed == buffer.len());

        // Nothing in `out` changes unless every record decoded
        for (slot, handle) in out.iter_mut().zip(decoded) {
            *slot = handle;
        }

        trace!(
            family = self.family.name(),
            records = out.len(),
            stride = layout.stride(),
            "decoded records"
        );
        Ok(())
    }
}

impl<B: ?Sized + SerializableObject + Send + Sync> ObjectSerializer<B> for IndirectSerializer<B> {
    fn supports_direct_serialization(&self) -> bool {
        Self::SUPPORTS_DIRECT_SERIALIZATION
    }

    fn required_bytes(&self, count: usize) -> usize {
        self.layout().required_bytes(count)
    }

    fn record_count(&self, bytes: usize) -> usize {
        self.layout().record_count(bytes)
    }

    fn encode(&self, handles: &[AbstractHandle<B>], out: &mut [u8]) -> BricksResult<()> {
        self.encode_records(handles, out)
    }

    fn decode(&self, buffer: &[u8], out: &mut [AbstractHandle<B>]) -> BricksResult<()> {
        self.decode_records(buffer, out)
    }
}
