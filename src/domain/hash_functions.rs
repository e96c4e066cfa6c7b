//! Hash-probing algorithms
//!
//! Each function maps an input byte sequence and the filter parameters
//! `(m, k)` to `k` positions in `[0, m)`. All arithmetic is 32-bit signed at
//! the reduction step, matching the classic filter formulations; the builder
//! rejects sizes above `i32::MAX` so the reductions cannot truncate.

use std::io::Cursor;

use digest::Digest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed for the Carter-Wegman coefficient generator.
const GENERATOR_SEED: u64 = 89_478_583;

/// 46-bit prime modulus for the Carter-Wegman strategy.
const CARTER_WEGMAN_PRIME: u128 = 53_200_200_938_189;

/// 48-bit LCG constants (the java.util.Random recurrence).
const LCG_MULTIPLIER: u64 = 0x5DEECE66D;
const LCG_INCREMENT: u64 = 0xB;
const LCG_MASK: u64 = (1 << 48) - 1;

/// 32-bit murmur3 of `bytes` under `seed`, in signed representation.
pub(crate) fn murmur3_signed(seed: i32, bytes: &[u8]) -> i32 {
    let mut cursor = Cursor::new(bytes);
    murmur3::murmur3_32(&mut cursor, seed as u32)
        .map(|h| h as i32)
        .unwrap_or(0)
}

/// 32-bit FNV-1-style hash (multiply-then-xor variant, masked to 32 bits).
pub(crate) fn fnv1_32(bytes: &[u8]) -> i32 {
    const FNV_PRIME: u64 = 16_777_619;
    const FNV_OFFSET_BASIS: u64 = 2_166_136_261;

    let mut result = FNV_OFFSET_BASIS;
    for &b in bytes {
        result = result.wrapping_mul(FNV_PRIME) & 0xFFFF_FFFF;
        result ^= u64::from(b);
    }
    result as u32 as i32
}

/// Murmur3 strategy: rejection sampling over repeated 32-bit murmur3 rounds.
///
/// A candidate is accepted only when its magnitude does not exceed
/// `i32::MAX - (i32::MAX % m)`, which removes modulo bias, and is not
/// `i32::MIN` (whose magnitude has no signed representation). Rejected
/// outputs are fed back as the seed of the next round.
pub fn murmur3_positions(bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
    let m32 = m as i32;
    let limit = i32::MAX - (i32::MAX % m32);

    let mut positions = Vec::with_capacity(k);
    let mut seed = 0i32;
    while positions.len() < k {
        seed = murmur3_signed(seed, bytes);
        if seed == i32::MIN {
            continue;
        }
        let candidate = seed.abs();
        if candidate > limit {
            continue;
        }
        positions.push((candidate % m32) as usize);
    }
    positions
}

/// Cassandra-style double hashing: `h1 + i*h2` for two murmur3 rounds.
///
/// The second hash is seeded with the first, and position `i` is the 32-bit
/// truncation of `h1 + i*h2` reduced mod `m` (Kirsch-Mitzenmacher; no
/// rejection sampling).
pub fn cassandra_positions(bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
    let m32 = m as i32;
    let h1 = murmur3_signed(0, bytes);
    let h2 = murmur3_signed(h1, bytes);

    (0..k)
        .map(|i| {
            let combined = i64::from(h1).wrapping_add((i as i64).wrapping_mul(i64::from(h2)));
            ((combined as i32) % m32).unsigned_abs() as usize
        })
        .collect()
}

/// LCG strategy: FNV-seeded 48-bit linear congruential recurrence.
///
/// The initial seed is the magnitude of the FNV hash (with `i32::MIN`
/// substituted by a fixed constant to stay positive). Each step advances the
/// 48-bit state and takes the top 30 bits reduced mod `m`.
pub fn lcg_positions(bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
    let reduced = fnv1_32(bytes);
    let mut state = if reduced == i32::MIN {
        42
    } else {
        u64::from(reduced.unsigned_abs())
    };

    (0..k)
        .map(|_| {
            state = state.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT) & LCG_MASK;
            ((state >> 18) as usize) % m
        })
        .collect()
}

/// Carter-Wegman universal hashing: `(a*v + b) mod P mod m`.
///
/// The input is folded into a residue `v` modulo the 46-bit prime `P`, and
/// each probe draws fresh coefficients `a, b` from a generator re-seeded
/// with a fixed constant per call, so the positions are deterministic within
/// a process run. A theoretically grounded reference strategy.
pub fn carter_wegman_positions(bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(GENERATOR_SEED);
    let v = bytes
        .iter()
        .fold(0u128, |acc, &b| (acc * 256 + u128::from(b)) % CARTER_WEGMAN_PRIME);

    (0..k)
        .map(|_| {
            let a = rng.gen_range(0..i32::MAX) as u128;
            let b = rng.gen_range(0..i32::MAX) as u128;
            ((a * v + b) % CARTER_WEGMAN_PRIME % m as u128) as usize
        })
        .collect()
}

/// RNG strategy: `k` uniform draws from a generator seeded with the FNV
/// hash of the input.
///
/// Fast but the weakest-quality option: uniformity rests entirely on the
/// generator, and the exact sequence is an artifact of its implementation.
pub fn rng_positions(bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(u64::from(fnv1_32(bytes) as u32));
    (0..k).map(|_| rng.gen_range(0..m)).collect()
}

/// Digest strategy: positions from 32-bit LE chunks of a cryptographic digest.
///
/// Each digest yields `digest_bits / 32` chunks, each reduced as
/// `abs(chunk) mod m`. When `k` exceeds the chunks available, the digest of
/// the same input is recomputed, so the positions repeat with period
/// `digest_bits / 32` - a known quality gap preserved from the classic
/// formulation rather than silently re-seeding.
pub fn digest_positions<D: Digest>(bytes: &[u8], m: usize, k: usize) -> Vec<usize> {
    let mut positions = Vec::with_capacity(k);
    while positions.len() < k {
        let output = D::digest(bytes);
        for chunk in output.chunks_exact(4) {
            if positions.len() == k {
                break;
            }
            let word = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            positions.push((word.unsigned_abs() as usize) % m);
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    type ProbeFn = fn(&[u8], usize, usize) -> Vec<usize>;

    const ALL: [(&str, ProbeFn); 6] = [
        ("murmur3", murmur3_positions),
        ("cassandra", cassandra_positions),
        ("lcg", lcg_positions),
        ("carter_wegman", carter_wegman_positions),
        ("rng", rng_positions),
        ("sha256", digest_positions::<sha2::Sha256>),
    ];

    #[test]
    fn all_strategies_stay_in_range() {
        for (name, probe) in ALL {
            for m in [1usize, 8, 1000] {
                for k in [1usize, 7, 20] {
                    let positions = probe(b"range_probe_element", m, k);
                    assert_eq!(positions.len(), k, "{name}: wrong position count");
                    for pos in positions {
                        assert!(pos < m, "{name}: position {pos} out of range for m={m}");
                    }
                }
            }
        }
    }

    #[test]
    fn all_strategies_are_deterministic_in_process() {
        for (name, probe) in ALL {
            let first = probe(b"determinism", 1000, 7);
            let second = probe(b"determinism", 1000, 7);
            assert_eq!(first, second, "{name}: repeated probes diverged");
        }
    }

    #[test]
    fn strategies_spread_positions_for_distinct_inputs() {
        for (name, probe) in ALL {
            let mut seen = HashSet::new();
            for i in 0..100 {
                let element = format!("element_{i}");
                for pos in probe(element.as_bytes(), 10_000, 5) {
                    seen.insert(pos);
                }
            }
            // 500 probes over 10k slots should touch a lot of distinct slots.
            assert!(seen.len() > 300, "{name}: only {} distinct positions", seen.len());
        }
    }

    #[test]
    fn murmur3_signed_matches_across_seeds() {
        let h0 = murmur3_signed(0, b"abc");
        let h1 = murmur3_signed(1, b"abc");
        assert_ne!(h0, h1, "different seeds must produce different outputs");
        assert_eq!(h0, murmur3_signed(0, b"abc"));
    }

    #[test]
    fn fnv_hash_distinguishes_inputs() {
        assert_ne!(fnv1_32(b"a"), fnv1_32(b"b"));
        assert_eq!(fnv1_32(b""), 2_166_136_261u32 as i32);
    }

    #[test]
    fn cassandra_matches_double_hash_formula() {
        let m = 1000usize;
        let h1 = murmur3_signed(0, b"formula_check");
        let h2 = murmur3_signed(h1, b"formula_check");
        let positions = cassandra_positions(b"formula_check", m, 5);
        for (i, &pos) in positions.iter().enumerate() {
            let combined = i64::from(h1).wrapping_add((i as i64).wrapping_mul(i64::from(h2)));
            let expected = ((combined as i32) % m as i32).unsigned_abs() as usize;
            assert_eq!(pos, expected);
        }
    }

    #[test]
    fn digest_positions_cycle_when_k_exceeds_chunks() {
        // MD5 yields 128/32 = 4 chunks per digest; beyond that the same
        // digest is recomputed and the sequence repeats.
        let positions = digest_positions::<md5::Md5>(b"cycling", 1000, 10);
        for i in 4..10 {
            assert_eq!(positions[i], positions[i % 4]);
        }
    }

    #[test]
    fn digest_positions_differ_between_algorithms() {
        let sha256 = digest_positions::<sha2::Sha256>(b"algo", 100_000, 4);
        let sha512 = digest_positions::<sha2::Sha512>(b"algo", 100_000, 4);
        assert_ne!(sha256, sha512);
    }

    #[test]
    fn degenerate_width_pins_every_position_to_zero() {
        for (name, probe) in ALL {
            assert!(
                probe(b"m_is_one", 1, 7).iter().all(|&p| p == 0),
                "{name}: m=1 must map everything to 0"
            );
        }
    }

    #[test]
    fn empty_input_is_probed_without_panic() {
        for (_, probe) in ALL {
            let positions = probe(b"", 128, 3);
            assert_eq!(positions.len(), 3);
            assert!(positions.iter().all(|&p| p < 128));
        }
    }
}
