//! Counting Bloom filter
//!
//! Replaces bits with counters so elements can be removed:
//! - add: increment the counters at all k probed positions
//! - remove: verify all k counters are nonzero, then decrement them
//! - contains: true iff every probed counter is nonzero
//!
//! One exclusive lock per filter instance guards the whole multi-position
//! add/remove, so interleavings can never drive a counter negative or expose
//! a half-applied update. `contains` reads without the lock; stale values
//! are acceptable, torn ones impossible (word-sized atomic loads).

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};

use super::strategy::HashStrategy;
use super::MembershipFilter;

/// Counter-array Bloom filter supporting removal.
#[derive(Debug)]
pub struct CountingBloomFilter {
    /// Counter array of width m, all zero at construction.
    counters: Vec<AtomicU32>,
    /// Serializes add/remove so each multi-position update is atomic as a
    /// whole.
    write_lock: Mutex<()>,
    /// Probe positions per element (k).
    k: usize,
    /// Width in counters (m).
    m: usize,
    /// Probing strategy shared by all operations.
    strategy: HashStrategy,
}

impl CountingBloomFilter {
    /// Create a filter of `m` counters probing `k` positions per element.
    pub fn new(m: usize, k: usize, strategy: HashStrategy) -> Self {
        let mut counters = Vec::with_capacity(m);
        counters.resize_with(m, || AtomicU32::new(0));
        Self {
            counters,
            write_lock: Mutex::new(()),
            k,
            m,
            strategy,
        }
    }

    /// Add an element, incrementing every probed counter.
    ///
    /// Always returns true: counters do not distinguish a new element from a
    /// repeated one.
    pub fn add(&self, element: &[u8]) -> bool {
        let positions = self.strategy.probe(element, self.m, self.k);
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for pos in positions {
            self.counters[pos].fetch_add(1, Ordering::Relaxed);
        }
        true
    }

    /// Remove an element.
    ///
    /// Verifies under the write lock that every probed counter is nonzero;
    /// if any is zero the element is considered not present and no counter
    /// is touched. Returns true iff the decrement was applied.
    pub fn remove(&self, element: &[u8]) -> bool {
        let positions = self.strategy.probe(element, self.m, self.k);
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if positions
            .iter()
            .any(|&pos| self.counters[pos].load(Ordering::Relaxed) == 0)
        {
            return false;
        }
        for pos in positions {
            self.counters[pos].fetch_sub(1, Ordering::Relaxed);
        }
        true
    }

    /// Test membership: true iff every probed counter is nonzero.
    ///
    /// Runs without the write lock; a concurrent add/remove may make the
    /// result stale but never corrupt.
    pub fn contains(&self, element: &[u8]) -> bool {
        self.strategy
            .probe(element, self.m, self.k)
            .into_iter()
            .all(|pos| self.counters[pos].load(Ordering::Relaxed) > 0)
    }

    /// Width of the counter array (m).
    pub fn size(&self) -> usize {
        self.m
    }

    /// Probe positions per element (k).
    pub fn probe_count(&self) -> usize {
        self.k
    }

    /// The configured probing strategy.
    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    #[cfg(test)]
    fn counter_sum(&self) -> u64 {
        self.counters
            .iter()
            .map(|c| u64::from(c.load(Ordering::Relaxed)))
            .sum()
    }
}

impl MembershipFilter for CountingBloomFilter {
    fn add_raw(&mut self, element: &[u8]) -> bool {
        self.add(element)
    }

    fn contains_raw(&self, element: &[u8]) -> bool {
        self.contains(element)
    }
}
