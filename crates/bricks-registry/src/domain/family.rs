//! Per-base-type registry object.
//!
//! One `ObjectFamily` exists per base type and is shared by `Arc` between
//! every component that constructs or encodes objects of that family.

use bricks_core::{BricksResult, TypeIndex, TypeKey};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;
use tracing::debug;

use super::handle::AbstractHandle;
use super::registration::Registrants;
use super::size_authority::SizeAuthority;
use super::type_registry::{Factory, TypeRegistry};
use crate::ports::{AbstractObject, DerivedObject};

/// Type registry and size authority of the base type `B`.
pub struct ObjectFamily<B: ?Sized> {
    name: String,
    registry: RwLock<TypeRegistry<B>>,
    sizes: RwLock<SizeAuthority>,
}

impl<B: ?Sized + AbstractObject> ObjectFamily<B> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: RwLock::new(TypeRegistry::new()),
            sizes: RwLock::new(SizeAuthority::new()),
        }
    }

    /// Create a family ready to be shared between components.
    pub fn shared(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a factory under the key of the instances it produces.
    ///
    /// The factory is invoked once to read the key. On success the natural
    /// payload size is folded into the family's maximum.
    pub fn set_factory(&self, factory: Factory<B>, byte_size: usize) -> BricksResult<TypeIndex> {
        let key = TypeKey::new(factory().object_type());
        let index = self
            .registry
            .write()
            .register_factory(key.clone(), byte_size, factory)?;
        self.set_derived_byte_size(byte_size);

        debug!(
            family = %self.name,
            key = %key,
            index,
            byte_size,
            max_byte_size = self.max_byte_size(),
            "registered derived type"
        );
        Ok(index)
    }

    /// Fold a concrete type's natural payload size into the maximum.
    pub fn set_derived_byte_size(&self, byte_size: usize) {
        self.sizes.write().record_size(byte_size);
    }

    /// Register one concrete type.
    pub fn register<D>(&self) -> BricksResult<TypeIndex>
    where
        D: DerivedObject<Base = B> + 'static,
    {
        self.set_factory(Arc::new(D::create), D::byte_size())
    }

    /// Register a tuple of concrete types, in tuple order.
    pub fn register_all<R: Registrants<B>>(&self) -> BricksResult<Vec<TypeIndex>> {
        R::register_into(self)
    }

    /// Read access to the registry.
    ///
    /// Registration blocks while the guard is alive, and calling back into
    /// the family from the same thread while holding it can deadlock.
    pub fn builder(&self) -> RwLockReadGuard<'_, TypeRegistry<B>> {
        self.registry.read()
    }

    /// Factory of the type registered at `index`, usable after the registry
    /// lock is released.
    pub fn factory(&self, index: TypeIndex) -> BricksResult<Factory<B>> {
        self.registry.read().factory(index)
    }

    /// Largest natural payload size of any registered type.
    pub fn max_byte_size(&self) -> usize {
        self.sizes.read().max_size()
    }

    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    pub fn index_of(&self, key: &str) -> BricksResult<TypeIndex> {
        self.registry.read().index_of(key)
    }

    pub fn byte_size_of(&self, index: TypeIndex) -> BricksResult<usize> {
        self.registry.read().byte_size_of(index)
    }

    /// Construct a fresh instance; the factory runs without the registry lock.
    pub fn create(&self, index: TypeIndex) -> BricksResult<Box<B>> {
        let factory = self.factory(index)?;
        Ok(factory())
    }

    pub fn create_by_key(&self, key: &str) -> BricksResult<Box<B>> {
        let factory = {
            let registry = self.registry.read();
            registry.factory(registry.index_of(key)?)?
        };
        Ok(factory())
    }

    /// A handle bound to a fresh instance of the type registered under `key`.
    pub fn create_handle(&self, key: &str) -> BricksResult<AbstractHandle<B>> {
        self.create_by_key(key).map(AbstractHandle::bound)
    }
}

impl<B: ?Sized> std::fmt::Debug for ObjectFamily<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectFamily")
            .field("name", &self.name)
            .field("registry", &*self.registry.read())
            .field("max_byte_size", &self.sizes.read().max_size())
            .finish()
    }
}
