//! Domain layer - pure filter logic
//!
//! This layer contains:
//! - The hash-probing strategies and their dispatch
//! - The plain and counting filter cores
//! - Optimal-parameter math and the configuration builder
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod counting_bloom;
pub mod hash_functions;
pub mod parameters;
pub mod strategy;

pub use bloom_filter::BloomFilter;
pub use config::{FilterBuilder, FilterParams};
pub use counting_bloom::CountingBloomFilter;
pub use strategy::{DigestAlgorithm, HashStrategy};

/// Raw membership capability shared by both filter variants.
///
/// The facade depends only on this seam, staying agnostic to whether the
/// state behind it is bits or counters.
pub trait MembershipFilter {
    /// Add raw key bytes. True iff the element was not already
    /// indistinguishable from present (the counting variant always reports
    /// true).
    fn add_raw(&mut self, element: &[u8]) -> bool;

    /// Test raw key bytes. False is a guaranteed true negative.
    fn contains_raw(&self, element: &[u8]) -> bool;
}
