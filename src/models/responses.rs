//! Reply DTOs
//!
//! Defines the JSON lines written back for each answered intent, plus the
//! stats line.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::models::Payload;

/// Where a reply's payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// Served from a fresh cache entry
    Cache,
    /// Resolved by the payload provider on a cache miss
    Provider,
    /// Neither the cache nor the provider knew the intent
    Unknown,
}

/// Reply to one intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// The intent as looked up
    pub intent: String,
    pub source: ReplySource,
    /// Absent when the intent is unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl Reply {
    pub fn new(intent: impl Into<String>, source: ReplySource, payload: Option<Payload>) -> Self {
        Self {
            intent: intent.into(),
            source,
            payload,
        }
    }

    /// Reply for an intent nobody recognized
    pub fn unknown(intent: impl Into<String>) -> Self {
        Self::new(intent, ReplySource::Unknown, None)
    }
}

/// Stats line written on request and at end of input
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Entries removed by expiry sweeps
    pub expired: u64,
    /// Entries removed by capacity trims
    pub trimmed: u64,
    /// Suppressed internal faults
    pub faults: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            trimmed: stats.trimmed,
            faults: stats.faults,
            total_entries: stats.total_entries,
        }
    }
}
