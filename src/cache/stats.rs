//! Cache Statistics Module
//!
//! Tracks cache effectiveness: hits, misses, evictions by cause, and
//! contained faults.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of cache metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a fresh value
    pub hits: u64,
    /// Lookups that found nothing or only a stale entry
    pub misses: u64,
    /// Entries removed by expiry sweeps
    pub expired: u64,
    /// Entries removed by capacity trims
    pub trimmed: u64,
    /// Internal faults swallowed by `store` or `clear`
    pub faults: u64,
    /// Current number of entries, stale ones included
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Evictions ==
    /// Total entries removed by eviction passes.
    pub fn evictions(&self) -> u64 {
        self.expired + self.trimmed
    }

    pub fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    pub fn record_trimmed(&mut self, count: usize) {
        self.trimmed += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
