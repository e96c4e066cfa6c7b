//! # bloomgate
//!
//! Bloom and counting Bloom filters with pluggable hash-probing strategies,
//! an optimal-parameter builder, and a storage-backed lookaside facade.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - [`HashStrategy`]: interchangeable probing strategies
//!   - [`BloomFilter`] / [`CountingBloomFilter`]: the two filter cores
//!   - [`FilterBuilder`] / [`FilterParams`]: two-phase configuration with
//!     optimal-parameter derivation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - [`FilterKey`] / [`HasKey`]: the entity/key model
//!   - [`DataStorage`]: the storage collaborator (driven port)
//!
//! - **Adapters Layer** (`adapters/`): Concrete collaborators
//!   - [`MemoryStorage`]: HashMap-backed default store
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - [`KeyedFilter`]: binds a core to entities and storage
//!
//! ## Guarantees
//!
//! - No false negatives: once added, `contains` returns true (the counting
//!   variant can relinquish this only through explicit `remove` calls).
//! - False positives are bounded by the configured rate under uniform-hash
//!   assumptions; they are a property, not an error.
//! - Counting-filter add/remove are atomic as whole multi-position
//!   operations; counters never go negative.
//!
//! ## Usage Example
//!
//! ```
//! use bloomgate::{FilterBuilder, HashStrategy};
//!
//! let mut filter = FilterBuilder::new()
//!     .with_capacity(1000)
//!     .with_false_positive_rate(0.01)
//!     .with_strategy(HashStrategy::Murmur3)
//!     .build_filter()?;
//!
//! filter.add(b"https://example.com/");
//! assert!(filter.contains(b"https://example.com/"));
//! # Ok::<(), bloomgate::ConfigError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::MemoryStorage;
pub use domain::{
    BloomFilter, CountingBloomFilter, DigestAlgorithm, FilterBuilder, FilterParams, HashStrategy,
    MembershipFilter,
};
pub use error::ConfigError;
pub use ports::{DataStorage, FilterKey, HasKey};
pub use service::{KeyedFilter, Lookup};
