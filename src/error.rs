//! Error types for filter construction
//!
//! Only configuration problems are errors. False positives, failed removals
//! and storage misses are ordinary return values, never `Err`.

use thiserror::Error;

/// Errors raised while freezing a filter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `(capacity, false_positive_rate)` nor `(size, probe_count)`
    /// was fully supplied before validation.
    #[error("neither (capacity, false_positive_rate) nor (size, probe_count) were supplied")]
    MissingParameters,

    /// Probe arithmetic is 32-bit signed, so the bit/counter array cannot
    /// exceed `i32::MAX` positions.
    #[error("filter size exceeds addressable range: {size} > {max}")]
    SizeTooLarge { size: usize, max: usize },
}
