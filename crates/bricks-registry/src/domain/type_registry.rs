//! Key, index and factory tables of one family.
//!
//! INVARIANTS:
//! - Keys are unique within a registry
//! - Indices are dense, assigned in registration order from `FIRST_TYPE_INDEX`
//! - `EMPTY_TYPE_INDEX` is never assigned

use bricks_core::{
    bricks_insist, BricksError, BricksResult, TypeIndex, TypeKey, FIRST_TYPE_INDEX,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::ports::AbstractObject;

/// Zero-argument constructor of a concrete type, boxed as the base type.
pub type Factory<B> = Arc<dyn Fn() -> Box<B> + Send + Sync>;

/// One registered concrete type.
struct RegistryEntry<B: ?Sized> {
    key: TypeKey,
    byte_size: usize,
    factory: Factory<B>,
}

/// Maps type keys to indices and indices to factories for base type `B`.
pub struct TypeRegistry<B: ?Sized> {
    /// Entry for index `i` lives at `entries[i - FIRST_TYPE_INDEX]`.
    entries: Vec<RegistryEntry<B>>,
    /// Reverse lookup by key.
    indices: HashMap<TypeKey, TypeIndex>,
}

impl<B: ?Sized> Default for TypeRegistry<B> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            indices: HashMap::new(),
        }
    }
}

impl<B: ?Sized> fmt::Debug for TypeRegistry<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<B: ?Sized> TypeRegistry<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate the next unused index with `key`.
    ///
    /// Fails with [`BricksError::DuplicateKey`] if `key` is already taken.
    pub fn register_factory(
        &mut self,
        key: TypeKey,
        byte_size: usize,
        factory: Factory<B>,
    ) -> BricksResult<TypeIndex> {
        bricks_insist!(!key.is_empty());

        if let Some(&index) = self.indices.get(&key) {
            return Err(BricksError::DuplicateKey {
                key: key.to_string(),
                index,
            });
        }

        let next = TypeIndex::try_from(self.entries.len())
            .ok()
            .and_then(|n| n.checked_add(FIRST_TYPE_INDEX));
        let Some(index) = next else {
            return Err(BricksError::InvalidConfig(format!(
                "type index space exhausted after {} registrations",
                self.entries.len()
            )));
        };

        self.indices.insert(key.clone(), index);
        self.entries.push(RegistryEntry {
            key,
            byte_size,
            factory,
        });
        Ok(index)
    }

    /// Index of a registered key.
    pub fn index_of(&self, key: &str) -> BricksResult<TypeIndex> {
        self.indices
            .get(key)
            .copied()
            .ok_or_else(|| BricksError::UnregisteredKey {
                key: key.to_string(),
            })
    }

    /// Key registered at `index`.
    pub fn key_at(&self, index: TypeIndex) -> BricksResult<&TypeKey> {
        self.entry(index).map(|entry| &entry.key)
    }

    /// Natural payload size of the type registered at `index`.
    pub fn byte_size_of(&self, index: TypeIndex) -> BricksResult<usize> {
        self.entry(index).map(|entry| entry.byte_size)
    }

    /// Construct a fresh instance of the type registered at `index`.
    pub fn create(&self, index: TypeIndex) -> BricksResult<Box<B>> {
        self.entry(index).map(|entry| (entry.factory)())
    }

    /// Shared factory of the type registered at `index`.
    pub fn factory(&self, index: TypeIndex) -> BricksResult<Factory<B>> {
        self.entry(index).map(|entry| Arc::clone(&entry.factory))
    }

    /// Construct a fresh instance of the type registered under `key`.
    pub fn create_by_key(&self, key: &str) -> BricksResult<Box<B>> {
        self.create(self.index_of(key)?)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.indices.contains_key(key)
    }

    /// Registered keys in index order.
    pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, index: TypeIndex) -> BricksResult<&RegistryEntry<B>> {
        index
            .checked_sub(FIRST_TYPE_INDEX)
            .and_then(|slot| self.entries.get(slot as usize))
            .ok_or(BricksError::UnregisteredIndex { index })
    }
}

impl<B: ?Sized + AbstractObject> TypeRegistry<B> {
    /// Key of a live instance, read through its `object_type`.
    pub fn key_of(&self, instance: &B) -> TypeKey {
        TypeKey::new(instance.object_type())
    }

    /// Index of a live instance's concrete type.
    pub fn index_of_instance(&self, instance: &B) -> BricksResult<TypeIndex> {
        self.index_of(instance.object_type())
    }
}
