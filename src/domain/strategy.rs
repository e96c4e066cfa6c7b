//! Hash-probing strategy selection
//!
//! The strategies trade cryptographic strength, uniformity and speed behind
//! one contract: `probe(bytes, m, k)` yields `k` positions in `[0, m)`.
//! Dispatch is a plain sum type chosen at filter construction.

use serde::{Deserialize, Serialize};

use super::hash_functions;

/// Digest selectable by [`HashStrategy::Digest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

/// A family of interchangeable hash-probing strategies.
///
/// All strategies are deterministic for identical `(bytes, m, k)` within a
/// process run. [`HashStrategy::Rng`] is a reference/benchmark strategy with
/// the weakest uniformity guarantees; its sequence is an artifact of the
/// underlying generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashStrategy {
    /// Universal hashing `(a*v + b) mod P mod m`; theoretical reference.
    CarterWegman,
    /// Uniform draws from a hash-seeded generator; fastest, weakest quality.
    Rng,
    /// FNV-seeded 48-bit linear congruential recurrence.
    SimpleLcg,
    /// 32-bit murmur3 with rejection sampling against modulo bias.
    Murmur3,
    /// Kirsch-Mitzenmacher double hashing over two murmur3 rounds.
    Cassandra,
    /// Repeated cryptographic digest split into 32-bit chunks.
    Digest(DigestAlgorithm),
}

impl Default for HashStrategy {
    fn default() -> Self {
        HashStrategy::Digest(DigestAlgorithm::Sha256)
    }
}

impl HashStrategy {
    /// Compute `k` probe positions in `[0, m)` for `bytes`.
    ///
    /// `m` and `k` must be positive; the builder guarantees both and caps
    /// `m` at `i32::MAX`.
    pub fn probe(&self, bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
        debug_assert!(m > 0 && m <= i32::MAX as usize);
        debug_assert!(k > 0);

        match self {
            HashStrategy::CarterWegman => hash_functions::carter_wegman_positions(bytes, m, k),
            HashStrategy::Rng => hash_functions::rng_positions(bytes, m, k),
            HashStrategy::SimpleLcg => hash_functions::lcg_positions(bytes, m, k),
            HashStrategy::Murmur3 => hash_functions::murmur3_positions(bytes, m, k),
            HashStrategy::Cassandra => hash_functions::cassandra_positions(bytes, m, k),
            HashStrategy::Digest(algorithm) => match algorithm {
                DigestAlgorithm::Md5 => hash_functions::digest_positions::<md5::Md5>(bytes, m, k),
                DigestAlgorithm::Sha1 => hash_functions::digest_positions::<sha1::Sha1>(bytes, m, k),
                DigestAlgorithm::Sha256 => {
                    hash_functions::digest_positions::<sha2::Sha256>(bytes, m, k)
                }
                DigestAlgorithm::Sha384 => {
                    hash_functions::digest_positions::<sha2::Sha384>(bytes, m, k)
                }
                DigestAlgorithm::Sha512 => {
                    hash_functions::digest_positions::<sha2::Sha512>(bytes, m, k)
                }
            },
        }
    }

    /// Every strategy in the family, for exhaustive testing and benches.
    pub const ALL: [HashStrategy; 10] = [
        HashStrategy::CarterWegman,
        HashStrategy::Rng,
        HashStrategy::SimpleLcg,
        HashStrategy::Murmur3,
        HashStrategy::Cassandra,
        HashStrategy::Digest(DigestAlgorithm::Md5),
        HashStrategy::Digest(DigestAlgorithm::Sha1),
        HashStrategy::Digest(DigestAlgorithm::Sha256),
        HashStrategy::Digest(DigestAlgorithm::Sha384),
        HashStrategy::Digest(DigestAlgorithm::Sha512),
    ];
}
