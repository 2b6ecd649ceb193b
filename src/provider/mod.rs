//! Payload Provider Module
//!
//! Maps intent keys to canned payloads. Providers are pure lookups: no
//! caching, no mutation, and "not found" is their only failure.

mod static_table;

pub use static_table::StaticPayloadProvider;

use crate::models::Payload;

/// Source of canned payloads for recognized intents.
pub trait PayloadProvider: Send + Sync {
    /// Returns the payload for `intent`, or `None` if it is not recognized.
    fn resolve(&self, intent: &str) -> Option<Payload>;
}
