//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Default freshness window in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;
/// Default soft capacity
pub const DEFAULT_CAPACITY: usize = 200;
/// Default fraction of entries removed by a capacity trim
pub const DEFAULT_TRIM_FRACTION: f64 = 0.3;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Freshness window; entries older than this are no longer served
    pub ttl: Duration,
    /// Number of entries at which `store` runs an eviction pass first
    pub capacity: usize,
    /// Fraction of `capacity` removed by a capacity trim, in (0, 1]
    pub trim_fraction: f64,
}

impl CacheConfig {
    /// Creates a config from explicit values, clamping anything out of range.
    pub fn new(ttl: Duration, capacity: usize, trim_fraction: f64) -> Self {
        Self {
            ttl,
            capacity: clamp_capacity(capacity),
            trim_fraction: checked_trim_fraction(trim_fraction).unwrap_or(DEFAULT_TRIM_FRACTION),
        }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Freshness window in seconds (default: 300)
    /// - `CACHE_CAPACITY` - Soft max entries (default: 200, minimum 1)
    /// - `CACHE_TRIM_FRACTION` - Trim aggressiveness in (0, 1] (default: 0.3)
    pub fn from_env() -> Self {
        let ttl_secs = env_parse("CACHE_TTL_SECS").unwrap_or(DEFAULT_TTL_SECS);
        let capacity = env_parse("CACHE_CAPACITY").unwrap_or(DEFAULT_CAPACITY);
        let trim_fraction = env_parse::<f64>("CACHE_TRIM_FRACTION")
            .and_then(|f| {
                let checked = checked_trim_fraction(f);
                if checked.is_none() {
                    warn!(value = f, "CACHE_TRIM_FRACTION outside (0, 1], using default");
                }
                checked
            })
            .unwrap_or(DEFAULT_TRIM_FRACTION);

        Self {
            ttl: Duration::from_secs(ttl_secs),
            capacity: clamp_capacity(capacity),
            trim_fraction,
        }
    }

    // == Trim Count ==
    /// Number of entries a capacity trim removes: `floor(capacity * trim_fraction)`,
    /// but never less than one so a trim always makes room.
    pub fn trim_count(&self) -> usize {
        // Absorb float error so e.g. 100 * 0.57 floors to 57, not 56
        let exact = self.capacity as f64 * self.trim_fraction + 1e-9;
        (exact.floor() as usize).max(1)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            capacity: DEFAULT_CAPACITY,
            trim_fraction: DEFAULT_TRIM_FRACTION,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = name, value = %raw, "Ignoring unparseable config value");
            None
        }
    }
}

fn checked_trim_fraction(f: f64) -> Option<f64> {
    (f > 0.0 && f <= 1.0).then_some(f)
}

fn clamp_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        warn!("Cache capacity of 0 clamped to 1");
    }
    capacity.max(1)
}
