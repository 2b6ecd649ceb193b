//! Intent Cache - an in-process response cache
//!
//! Stores computed responses under a request key, serves them while fresh,
//! and bounds its size with an expire-then-trim eviction pass.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod responder;
pub mod session;

pub use cache::{ResponseCache, StoreOutcome};
pub use config::CacheConfig;
pub use provider::{PayloadProvider, StaticPayloadProvider};
pub use responder::CachedResponder;
