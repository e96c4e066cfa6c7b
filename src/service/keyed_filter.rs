//! Keyed filter facade
//!
//! Binds a raw membership core to an entity/key model and an optional
//! storage collaborator. Callers interact with entities and keys; the facade
//! serializes keys to bytes, probes the core and mediates storage around the
//! membership check.

use std::hash::Hash;
use std::marker::PhantomData;

use tracing::trace;

use crate::adapters::MemoryStorage;
use crate::domain::{CountingBloomFilter, MembershipFilter};
use crate::ports::{DataStorage, FilterKey, HasKey};

/// Outcome of a keyed lookup through the filter.
///
/// The filter cannot prove presence, only absence, so a hit that the store
/// cannot back is reported distinctly from a definite negative.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup<E> {
    /// Filter reported probable membership and the store had the entity.
    Found(E),
    /// Filter reported probable membership but the store had no entry - a
    /// surfaced false positive, or no storage attached.
    StorageMiss,
    /// Filter proves the key was never added.
    Absent,
}

impl<E> Lookup<E> {
    /// The stored entity, if the lookup found one.
    pub fn into_option(self) -> Option<E> {
        match self {
            Lookup::Found(entity) => Some(entity),
            Lookup::StorageMiss | Lookup::Absent => None,
        }
    }
}

/// Facade binding a filter core to an entity model and optional storage.
///
/// `C` is either filter variant, `E` the entity type, `S` the storage
/// collaborator (in-memory by default).
#[derive(Debug)]
pub struct KeyedFilter<C, E: HasKey, S = MemoryStorage<E>> {
    core: C,
    storage: Option<S>,
    _entity: PhantomData<fn() -> E>,
}

impl<C: MembershipFilter, E: HasKey> KeyedFilter<C, E, MemoryStorage<E>>
where
    E::Key: Eq + Hash,
{
    /// Wrap a core with a fresh in-memory store, the default collaborator.
    pub fn in_memory(core: C) -> Self {
        Self {
            core,
            storage: Some(MemoryStorage::new()),
            _entity: PhantomData,
        }
    }

    /// Wrap a core with no storage; lookups can then only distinguish
    /// definite absence from probable membership.
    pub fn without_storage(core: C) -> Self {
        Self {
            core,
            storage: None,
            _entity: PhantomData,
        }
    }
}

impl<C: MembershipFilter, E: HasKey, S: DataStorage<E>> KeyedFilter<C, E, S> {
    /// Wrap a core with an explicit storage collaborator.
    pub fn with_storage(core: C, storage: S) -> Self {
        Self {
            core,
            storage: Some(storage),
            _entity: PhantomData,
        }
    }

    /// Add an entity: probe the core with its key bytes and forward the
    /// entity to storage.
    ///
    /// The storage write happens regardless of whether the core saw the key
    /// as new. Returns the core's newly-added result.
    pub fn add(&mut self, entity: E) -> bool {
        let newly_added = self.core.add_raw(&entity.key().to_bytes());
        if let Some(storage) = &self.storage {
            storage.save(entity);
        }
        newly_added
    }

    /// Test a key. False is a guaranteed true negative.
    pub fn contains_key(&self, key: &E::Key) -> bool {
        self.core.contains_raw(&key.to_bytes())
    }

    /// Test an entity by its key.
    pub fn contains(&self, entity: &E) -> bool {
        self.contains_key(&entity.key())
    }

    /// Look a key up through the filter, consulting storage only when the
    /// filter reports probable membership.
    pub fn get(&self, key: &E::Key) -> Lookup<E> {
        if !self.contains_key(key) {
            return Lookup::Absent;
        }
        match self.storage.as_ref().and_then(|storage| storage.load(key)) {
            Some(entity) => Lookup::Found(entity),
            None => {
                trace!("filter hit without a stored entry");
                Lookup::StorageMiss
            }
        }
    }

    /// The wrapped filter core.
    pub fn core(&self) -> &C {
        &self.core
    }

    /// The storage collaborator, when one is attached.
    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }
}

impl<E: HasKey, S: DataStorage<E>> KeyedFilter<CountingBloomFilter, E, S> {
    /// Remove a key from the counting core.
    ///
    /// Storage is left untouched; the filter only stops vouching for the
    /// key. Returns false if the key was never added (or already fully
    /// removed).
    pub fn remove(&mut self, key: &E::Key) -> bool {
        self.core.remove(&key.to_bytes())
    }
}
