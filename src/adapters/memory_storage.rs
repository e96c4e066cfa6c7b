//! In-memory storage adapter
//!
//! HashMap-backed implementation of [`DataStorage`], the default lookaside
//! collaborator. Entities are cloned out on load so the map keeps ownership.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

use crate::ports::{DataStorage, HasKey};

/// In-memory key/value store keyed by the entity's own key.
#[derive(Debug)]
pub struct MemoryStorage<E: HasKey> {
    entries: RwLock<HashMap<E::Key, E>>,
}

impl<E: HasKey> MemoryStorage<E>
where
    E::Key: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: HasKey> Default for MemoryStorage<E>
where
    E::Key: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DataStorage<E> for MemoryStorage<E>
where
    E: HasKey + Clone,
    E::Key: Eq + Hash,
{
    fn save(&self, entity: E) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(entity.key(), entity);
    }

    fn load(&self, key: &E::Key) -> Option<E> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
