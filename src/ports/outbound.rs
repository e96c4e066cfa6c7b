//! Outbound ports (driven side)
//!
//! The filter core never owns entities or storage; it probes raw key bytes.
//! These traits define the entity/key model and the storage collaborator the
//! facade mediates between.

/// A key that serializes deterministically to bytes.
///
/// Equal logical keys must always serialize to identical byte sequences;
/// probe positions are a pure function of these bytes.
pub trait FilterKey {
    fn to_bytes(&self) -> Vec<u8>;
}

impl FilterKey for String {
    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl FilterKey for Vec<u8> {
    fn to_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

/// An entity that exposes its key.
pub trait HasKey {
    type Key: FilterKey;

    fn key(&self) -> Self::Key;
}

/// Backend storage collaborator: a database, disk, cache and so on.
///
/// Operations are synchronous and must be callable from whichever thread the
/// facade runs on. `save` must not fail for valid entities.
pub trait DataStorage<E: HasKey> {
    /// Persist the entity under its own key.
    fn save(&self, entity: E);

    /// Read an entity back by key, or `None` if absent.
    fn load(&self, key: &E::Key) -> Option<E>;
}
