//! Cache Module
//!
//! In-memory response caching with a TTL freshness window and
//! expire-then-trim eviction.

mod clock;
mod entry;
mod response_cache;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use response_cache::{ResponseCache, StoreOutcome};
pub use stats::CacheStats;
pub use store::{CacheStore, EvictionReport};
