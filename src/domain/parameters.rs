//! Optimal filter parameter math
//!
//! Formulas:
//! - m = ceil(-n*ln(p) / ln(2)^2)   -- optimal bits
//! - k = ceil(ln(2) * m / n)        -- optimal probe count
//! - n = ceil(ln(2) * m / k)        -- capacity a given (m, k) is optimal for
//! - p = (1 - e^(-k*n/m))^k         -- best-case false-positive rate

use std::f64::consts::LN_2;

/// Optimal bit-array size for `capacity` elements at `false_positive_rate`.
pub fn optimal_size(capacity: usize, false_positive_rate: f64) -> usize {
    (-1.0 * (capacity as f64 * false_positive_rate.ln()) / (LN_2 * LN_2)).ceil() as usize
}

/// Optimal probe count for `capacity` elements in `size` bits.
pub fn optimal_probe_count(capacity: usize, size: usize) -> usize {
    ((LN_2 * size as f64) / capacity as f64).ceil() as usize
}

/// Capacity for which a `(size, probe_count)` pair is optimal.
pub fn optimal_capacity(probe_count: usize, size: usize) -> usize {
    ((LN_2 * size as f64) / probe_count as f64).ceil() as usize
}

/// Best-case (uniform hashing) false-positive rate at full capacity.
pub fn expected_fpr(probe_count: usize, size: usize, capacity: usize) -> f64 {
    if size == 0 {
        return 1.0;
    }
    let exponent = -((probe_count * capacity) as f64) / size as f64;
    (1.0 - exponent.exp()).powi(probe_count as i32)
}
