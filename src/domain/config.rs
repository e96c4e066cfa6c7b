//! Filter configuration: draft builder and frozen parameters
//!
//! Two-phase construction: [`FilterBuilder`] is the mutable draft with
//! fluent setters, and [`validate`](FilterBuilder::validate) freezes it into
//! an immutable [`FilterParams`]. `validate` is a pure function of the
//! draft, so repeated calls derive identical values.
//!
//! # Example
//!
//! ```
//! use bloomgate::domain::{FilterBuilder, HashStrategy};
//!
//! let params = FilterBuilder::new()
//!     .with_capacity(1000)
//!     .with_false_positive_rate(0.01)
//!     .with_strategy(HashStrategy::Murmur3)
//!     .validate()
//!     .expect("one parameter pair is supplied");
//!
//! assert!(params.size > 0 && params.probe_count > 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bloom_filter::BloomFilter;
use super::counting_bloom::CountingBloomFilter;
use super::parameters::{expected_fpr, optimal_capacity, optimal_probe_count, optimal_size};
use super::strategy::HashStrategy;
use crate::error::ConfigError;

/// Draft filter configuration.
///
/// Exactly one of the pairs `(capacity, false_positive_rate)` or
/// `(size, probe_count)` must be supplied before validation; the other pair
/// is derived. Setters silently ignore out-of-range input (non-positive
/// numbers, blank names), leaving the field unset.
#[derive(Clone, Debug, Default)]
pub struct FilterBuilder {
    name: Option<String>,
    false_positive_rate: Option<f64>,
    probe_count: Option<usize>,
    capacity: Option<usize>,
    size: Option<usize>,
    strategy: Option<HashStrategy>,
}

/// Frozen, validated filter parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Display name, used in logs.
    pub name: String,
    /// Width of the bit/counter array (m).
    pub size: usize,
    /// Number of probe positions per element (k).
    pub probe_count: usize,
    /// Anticipated element count before the rate degrades (n).
    pub capacity: usize,
    /// Best-case false-positive rate at capacity (p).
    pub false_positive_rate: f64,
    /// Selected hash-probing strategy.
    pub strategy: HashStrategy,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter name. Blank names are ignored.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.name = Some(name);
        }
        self
    }

    /// Set the tolerable false-positive rate (e.g. 0.01 for 1%).
    /// Non-positive values are ignored.
    pub fn with_false_positive_rate(mut self, rate: f64) -> Self {
        if rate > 0.0 {
            self.false_positive_rate = Some(rate);
        }
        self
    }

    /// Set the number of probe positions per element. Zero is ignored.
    pub fn with_probe_count(mut self, probe_count: usize) -> Self {
        if probe_count > 0 {
            self.probe_count = Some(probe_count);
        }
        self
    }

    /// Set the anticipated number of elements. More can be added, but the
    /// false-positive rate then exceeds the configured target. Zero is
    /// ignored.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        if capacity > 0 {
            self.capacity = Some(capacity);
        }
        self
    }

    /// Set the width of the bit/counter array. Zero is ignored.
    pub fn with_size(mut self, size: usize) -> Self {
        if size > 0 {
            self.size = Some(size);
        }
        self
    }

    /// Select the hash-probing strategy.
    pub fn with_strategy(mut self, strategy: HashStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Freeze the draft, deriving whichever pair was not supplied.
    ///
    /// Derivation order: size from `(capacity, rate)`, probe count from
    /// `(capacity, size)`, then capacity from `(probe_count, size)` and the
    /// rate from the full triple - each only when not user-supplied.
    pub fn validate(&self) -> Result<FilterParams, ConfigError> {
        let mut size = self.size.unwrap_or(0);
        let mut probe_count = self.probe_count.unwrap_or(0);
        let mut capacity = self.capacity.unwrap_or(0);
        let mut false_positive_rate = self.false_positive_rate.unwrap_or(0.0);

        if size == 0 && capacity > 0 && false_positive_rate > 0.0 {
            size = optimal_size(capacity, false_positive_rate);
        }
        if probe_count == 0 && capacity > 0 && size > 0 {
            probe_count = optimal_probe_count(capacity, size);
        }

        if probe_count == 0 || size == 0 {
            return Err(ConfigError::MissingParameters);
        }
        if size > i32::MAX as usize {
            return Err(ConfigError::SizeTooLarge {
                size,
                max: i32::MAX as usize,
            });
        }

        if capacity == 0 {
            capacity = optimal_capacity(probe_count, size);
        }
        if false_positive_rate <= 0.0 {
            false_positive_rate = expected_fpr(probe_count, size, capacity);
        }

        let params = FilterParams {
            name: self.name.clone().unwrap_or_else(|| "default".to_string()),
            size,
            probe_count,
            capacity,
            false_positive_rate,
            strategy: self.strategy.unwrap_or_default(),
        };
        debug!(
            name = %params.name,
            size = params.size,
            probe_count = params.probe_count,
            capacity = params.capacity,
            false_positive_rate = params.false_positive_rate,
            "froze filter parameters"
        );
        Ok(params)
    }

    /// Validate and construct the plain bit-array filter.
    pub fn build_filter(&self) -> Result<BloomFilter, ConfigError> {
        Ok(self.validate()?.build_filter())
    }

    /// Validate and construct the counting filter.
    pub fn build_counting_filter(&self) -> Result<CountingBloomFilter, ConfigError> {
        Ok(self.validate()?.build_counting_filter())
    }
}

impl FilterParams {
    /// Construct the plain bit-array filter bound to these parameters.
    pub fn build_filter(&self) -> BloomFilter {
        BloomFilter::new(self.size, self.probe_count, self.strategy)
    }

    /// Construct the counting filter bound to these parameters.
    pub fn build_counting_filter(&self) -> CountingBloomFilter {
        CountingBloomFilter::new(self.size, self.probe_count, self.strategy)
    }
}
