//! Cached Responder
//!
//! Answers intents through the cache: lookup, and on a miss resolve via the
//! payload provider and store the encoded payload for next time.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::cache::ResponseCache;
use crate::error::CacheError;
use crate::models::{Payload, Reply, ReplySource};
use crate::provider::{PayloadProvider, StaticPayloadProvider};

// == Cached Responder ==
/// Pairs a shared cache with a payload provider.
#[derive(Debug, Clone)]
pub struct CachedResponder<P = StaticPayloadProvider> {
    cache: Arc<ResponseCache>,
    provider: P,
}

impl<P: PayloadProvider> CachedResponder<P> {
    pub fn new(cache: Arc<ResponseCache>, provider: P) -> Self {
        Self { cache, provider }
    }

    // == Respond ==
    /// Answers `intent`, which doubles as the cache key.
    ///
    /// Provider misses are not cached; an unknown intent is asked of the
    /// provider again every time.
    pub fn respond(&self, intent: &str) -> Reply {
        if let Some(payload) = self.cached(intent) {
            return Reply::new(intent, ReplySource::Cache, Some(payload));
        }

        match self.provider.resolve(intent) {
            Some(payload) => {
                match serde_json::to_string(&payload) {
                    Ok(encoded) => {
                        self.cache.store(intent, encoded);
                    }
                    Err(err) => {
                        let err = CacheError::from(err);
                        error!(intent, error = %err, "Payload not cached");
                    }
                }
                Reply::new(intent, ReplySource::Provider, Some(payload))
            }
            None => {
                debug!(intent, "No payload for intent");
                Reply::unknown(intent)
            }
        }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn cached(&self, intent: &str) -> Option<Payload> {
        let encoded = self.cache.lookup(intent)?;
        match serde_json::from_str(&encoded) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!(intent, error = %err, "Cached value is not a payload, resolving again");
                None
            }
        }
    }
}
