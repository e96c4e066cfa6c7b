//! Plain Bloom filter
//!
//! Bit-array membership filter. False positives are possible, false
//! negatives are not, and bits never clear, so membership is monotonic for
//! the lifetime of the filter.

use bitvec::prelude::*;

use super::strategy::HashStrategy;
use super::MembershipFilter;

/// Bit-array Bloom filter.
///
/// Mutation takes `&mut self`; the structure makes no cross-thread
/// visibility guarantee, so callers that share a filter between threads
/// must synchronize it themselves. There is no removal operation - clearing
/// a bit could erase evidence of other elements.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array of width m, all false at construction.
    bits: BitVec<u8, Lsb0>,
    /// Probe positions per element (k).
    k: usize,
    /// Width in bits (m).
    m: usize,
    /// Probing strategy shared by add and contains.
    strategy: HashStrategy,
}

impl BloomFilter {
    /// Create a filter of `m` bits probing `k` positions per element.
    pub fn new(m: usize, k: usize, strategy: HashStrategy) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; m],
            k,
            m,
            strategy,
        }
    }

    /// Add an element.
    ///
    /// Returns true iff at least one probed bit was newly set - false means
    /// the element was already indistinguishable from present.
    pub fn add(&mut self, element: &[u8]) -> bool {
        let mut newly_added = false;
        for pos in self.strategy.probe(element, self.m, self.k) {
            if !self.bits[pos] {
                self.bits.set(pos, true);
                newly_added = true;
            }
        }
        newly_added
    }

    /// Test membership.
    ///
    /// False is a guaranteed true negative; true is probabilistic with the
    /// configured false-positive rate.
    pub fn contains(&self, element: &[u8]) -> bool {
        self.strategy
            .probe(element, self.m, self.k)
            .into_iter()
            .all(|pos| self.bits[pos])
    }

    /// Width of the bit array (m).
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

    /// Number of bits currently set.
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}

impl MembershipFilter for BloomFilter {
    fn add_raw(&mut self, element: &[u8]) -> bool {
        self.add(element)
    }

    fn contains_raw(&self, element: &[u8]) -> bool {
        self.contains(element)
    }
}
