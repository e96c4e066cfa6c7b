//! Adapters layer - concrete implementations of the outbound ports

pub mod memory_storage;

pub use memory_storage::MemoryStorage;
