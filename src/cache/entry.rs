//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age checks.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and write metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value, opaque to the cache
    pub value: String,
    /// When the entry was written; never refreshed by reads
    pub written_at: Instant,
    /// Store-wide insertion counter, breaks `written_at` ties
    pub seq: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry written at `now`.
    pub fn new(value: String, written_at: Instant, seq: u64) -> Self {
        Self {
            value,
            written_at,
            seq,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was written, saturating at zero.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.written_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served.
    ///
    /// Boundary condition: fresh only while `age < ttl`. At exactly `ttl`
    /// the entry is no longer served.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) < ttl
    }

    // == Is Expired ==
    /// Checks whether an expiry sweep should remove the entry.
    ///
    /// Boundary condition: expired only once `age > ttl`. An entry aged
    /// exactly `ttl` is neither fresh nor expired and survives a sweep.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }

    // == Eviction Order ==
    /// Sort key for oldest-first trimming.
    pub fn eviction_order(&self) -> (Instant, u64) {
        (self.written_at, self.seq)
    }
}
