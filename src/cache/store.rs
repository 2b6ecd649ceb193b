//! Cache Store Module
//!
//! Single-threaded cache engine: HashMap storage, lazy freshness checks, and
//! the expire-then-trim eviction pass. Callers pass the current instant in,
//! so the engine itself never reads a clock.

use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::config::CacheConfig;
use crate::error::Result;

// == Eviction Report ==
/// Entries removed by one eviction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvictionReport {
    /// Removed by the expiry sweep
    pub expired: usize,
    /// Removed by the capacity trim
    pub trimmed: usize,
}

// == Cache Store ==
/// Cache storage with TTL freshness and oldest-first capacity trimming.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Freshness window, capacity and trim fraction
    config: CacheConfig,
    /// Sequence number handed to the next written entry
    next_seq: u64,
    /// Eviction counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            next_seq: 0,
            stats: CacheStats::new(),
        }
    }

    // == Lookup ==
    /// Returns the value for `key` if it is still fresh at `now`.
    ///
    /// Stale entries are reported as absent but left in place; only an
    /// eviction pass removes them.
    pub fn lookup(&self, key: &str, now: Instant) -> Option<&str> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.config.ttl))
            .map(|entry| entry.value.as_str())
    }

    // == Store ==
    /// Writes `value` under `key` at `now`, replacing any existing entry.
    ///
    /// If the store already holds `capacity` entries, an eviction pass runs
    /// first. The pass and the insert happen in the same `&mut self` call.
    pub fn store(&mut self, key: String, value: String, now: Instant) -> Result<()> {
        if self.entries.len() >= self.config.capacity {
            self.evict(now);
        }

        self.entries.try_reserve(1)?;

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(key, CacheEntry::new(value, now, seq));
        Ok(())
    }

    // == Evict ==
    /// Runs the expiry sweep, then a capacity trim if the store is still full.
    pub fn evict(&mut self, now: Instant) -> EvictionReport {
        let expired = self.sweep_expired(now);
        let trimmed = if self.entries.len() >= self.config.capacity {
            self.trim_oldest(self.config.trim_count())
        } else {
            0
        };

        debug!(
            expired,
            trimmed,
            remaining = self.entries.len(),
            "Eviction pass complete"
        );
        EvictionReport { expired, trimmed }
    }

    // == Sweep Expired ==
    /// Removes every entry whose age strictly exceeds the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let ttl = self.config.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, ttl));

        let count = before - self.entries.len();
        self.stats.record_expired(count);
        count
    }

    // == Trim Oldest ==
    /// Removes up to `count` entries, oldest write first.
    ///
    /// Returns the number of entries removed.
    pub fn trim_oldest(&mut self, count: usize) -> usize {
        let mut order: Vec<(_, String)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.eviction_order(), key.clone()))
            .collect();
        order.sort_unstable();

        let victims: Vec<String> = order.into_iter().take(count).map(|(_, key)| key).collect();
        for key in &victims {
            self.entries.remove(key);
        }

        self.stats.record_trimmed(victims.len());
        victims.len()
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns eviction counters and the current entry count.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Length ==
    /// Returns the current number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
