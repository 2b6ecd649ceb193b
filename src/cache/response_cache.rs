//! Shared Response Cache
//!
//! Thread-safe front for [`CacheStore`]. Every mutation (eviction pass plus
//! insert, or clear) happens under one write-lock acquisition, so readers
//! only ever see whole states. Internal faults never reach the caller: they
//! are logged, counted, and reported as [`StoreOutcome::Degraded`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{error, warn};

use crate::cache::{CacheStats, CacheStore, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Store Outcome ==
/// Result of a mutating call. Both variants mean "carry on"; `Degraded`
/// only tells the caller the write did not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The mutation was applied
    Applied,
    /// An internal fault was logged and the mutation skipped
    Degraded,
}

impl StoreOutcome {
    pub fn is_applied(self) -> bool {
        self == StoreOutcome::Applied
    }
}

// == Response Cache ==
/// In-process response cache with a freshness window and bounded size.
#[derive(Debug)]
pub struct ResponseCache {
    inner: RwLock<CacheStore>,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
    faults: AtomicU64,
}

impl ResponseCache {
    // == Constructors ==
    /// Creates a cache that reads the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache driven by the given clock.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(CacheStore::new(config)),
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            faults: AtomicU64::new(0),
        }
    }

    // == Lookup ==
    /// Returns the value stored under `key` if it is still fresh.
    ///
    /// Missing keys, stale entries and an unavailable store all come back
    /// as `None`.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let found = match self.inner.read() {
            Ok(store) => store.lookup(key, self.clock.now()).map(str::to_owned),
            Err(_) => {
                error!(key, "Cache lock poisoned, treating lookup as miss");
                None
            }
        };

        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    // == Store ==
    /// Stores `value` under `key`, evicting first if the cache is full.
    pub fn store(&self, key: impl Into<String>, value: impl Into<String>) -> StoreOutcome {
        let (key, value) = (key.into(), value.into());
        let result = self
            .inner
            .write()
            .map_err(|_| CacheError::Poisoned("store"))
            .and_then(|mut store| {
                let now = self.clock.now();
                store.store(key, value, now)
            });
        self.contain("store", result)
    }

    // == Clear ==
    /// Removes every entry.
    ///
    /// A store poisoned by a panicking writer is wiped and put back into
    /// service here, since clearing discards whatever state the panic left.
    pub fn clear(&self) -> StoreOutcome {
        let result = match self.inner.write() {
            Ok(mut store) => {
                store.clear();
                Ok(())
            }
            Err(poisoned) => {
                poisoned.into_inner().clear();
                self.inner.clear_poison();
                warn!("Recovered poisoned cache by clearing it");
                Ok(())
            }
        };
        self.contain("clear", result)
    }

    // == Size ==
    /// Number of entries held, stale ones included.
    pub fn size(&self) -> usize {
        match self.inner.read() {
            Ok(store) => store.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    // == Stats ==
    /// Snapshot of hit, miss, eviction and fault counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = match self.inner.read() {
            Ok(store) => store.stats(),
            Err(poisoned) => poisoned.into_inner().stats(),
        };
        stats.hits = self.hits.load(Ordering::Relaxed);
        stats.misses = self.misses.load(Ordering::Relaxed);
        stats.faults = self.faults.load(Ordering::Relaxed);
        stats
    }

    fn contain(&self, operation: &'static str, result: Result<()>) -> StoreOutcome {
        match result {
            Ok(()) => StoreOutcome::Applied,
            Err(err) => {
                self.faults.fetch_add(1, Ordering::Relaxed);
                error!(operation, error = %err, "Cache fault suppressed");
                StoreOutcome::Degraded
            }
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
